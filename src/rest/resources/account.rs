//! Account resources.
//!
//! - [`Account`]: GET `/{location}/Accounts/{accountId}`
//! - [`TrialAccounts`]: GET `/{location}/Accounts`, the trial accounts visible to the caller
//!
//! # Example
//!
//! ```rust,ignore
//! use video_indexer::rest::Resource;
//! use video_indexer::rest::resources::{Account, AccountParams};
//!
//! let request = ResourceRequest::builder(Location::trial())
//!     .account(AccountId::new("abc123")?)
//!     .access_token(token)
//!     .params(AccountParams { include_usage: Some(true), ..Default::default() })
//!     .build();
//!
//! let account = Account::get(&client, &request).await?;
//! println!("{} ({:?})", account.name.as_deref().unwrap_or(""), account.account_type);
//! ```

use serde::{Deserialize, Serialize};

use crate::auth::AccessToken;
use crate::clients::{AuthStyle, HttpMethod};
use crate::rest::{EndpointScope, Resource, ResourcePath};

/// A Video Indexer account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The account id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The region the account lives in (e.g., "trial", "westus2").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// The account type (e.g., "Trial", "Paid").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,

    /// The portal URL of the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// An access token for the account, present when one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<AccessToken>,

    /// Whether the caller has read-only access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_read_only: Option<bool>,

    /// Whether the account belongs to the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,

    /// Usage quota information, present when `includeUsage` was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_usage: Option<QuotaUsage>,
}

/// Indexing quota consumed by an account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuotaUsage {
    /// Daily upload count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_upload_count: Option<u64>,

    /// Daily upload count limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_upload_count_limit: Option<u64>,

    /// Daily upload duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_upload_duration_in_seconds: Option<u64>,

    /// Daily upload duration limit in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_upload_duration_limit_in_seconds: Option<u64>,

    /// Everyday upload duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub everyday_upload_duration_in_seconds: Option<u64>,
}

impl Account {
    /// Returns `true` if this is a trial account.
    #[must_use]
    pub fn is_trial(&self) -> bool {
        self.account_type
            .as_deref()
            .is_some_and(|kind| kind.eq_ignore_ascii_case("trial"))
    }
}

impl Resource for Account {
    type Payload = Self;
    type Params = AccountParams;
    type Body = ();

    const NAME: &'static str = "Account";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        EndpointScope::Account,
        AuthStyle::Query,
        &[],
        "",
    );
}

/// Parameters for fetching an account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountParams {
    /// Include quota usage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_usage: Option<bool>,

    /// Include statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_statistics: Option<bool>,
}

/// The trial accounts visible to the caller in a location.
pub struct TrialAccounts;

impl Resource for TrialAccounts {
    type Payload = Vec<Account>;
    type Params = TrialAccountParams;
    type Body = ();

    const NAME: &'static str = "TrialAccounts";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        EndpointScope::Location,
        AuthStyle::Query,
        &[],
        "Accounts",
    );
}

/// Parameters for listing trial accounts.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrialAccountParams {
    /// Request contributor rather than reader tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_edit: Option<bool>,

    /// Return an access token with each account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_access_tokens: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccountId, BaseUrl, IndexerConfig, Location};
    use crate::clients::HttpClient;
    use crate::rest::ResourceRequest;

    fn client() -> HttpClient {
        HttpClient::new(
            &IndexerConfig::builder()
                .base_url(BaseUrl::new("https://vi.example").unwrap())
                .build(),
        )
    }

    #[test]
    fn test_account_url_has_no_trailing_segment() {
        let request = ResourceRequest::builder(Location::new("westus2").unwrap())
            .account(AccountId::new("abc123").unwrap())
            .params(AccountParams {
                include_usage: Some(true),
                ..Default::default()
            })
            .build();

        assert_eq!(
            Account::build_url(&client(), &request).unwrap(),
            "https://vi.example/westus2/Accounts/abc123?includeUsage=true"
        );
    }

    #[test]
    fn test_trial_accounts_url() {
        let request = ResourceRequest::builder(Location::trial())
            .params(TrialAccountParams {
                allow_edit: Some(false),
                generate_access_tokens: Some(true),
            })
            .build();

        assert_eq!(
            TrialAccounts::build_url(&client(), &request).unwrap(),
            "https://vi.example/trial/Accounts?allowEdit=false&generateAccessTokens=true"
        );
    }

    #[test]
    fn test_account_deserialization() {
        let json = r#"{
            "AccountType": "Trial",
            "Id": "abc123",
            "Name": "Media Lab",
            "Location": "trial",
            "Url": "https://www.videoindexer.ai/accounts/abc123",
            "AccessToken": "eyJ0eXAi.payload.sig",
            "IsReadOnly": false,
            "QuotaUsage": {"DailyUploadCount": 3, "DailyUploadCountLimit": 100}
        }"#;

        let account = Account::parse_json(json).unwrap();

        assert_eq!(account.id.as_deref(), Some("abc123"));
        assert_eq!(account.name.as_deref(), Some("Media Lab"));
        assert!(account.is_trial());
        assert_eq!(account.is_read_only, Some(false));
        assert_eq!(account.access_token.as_ref().unwrap().as_ref(), "eyJ0eXAi.payload.sig");
        assert_eq!(account.quota_usage.unwrap().daily_upload_count, Some(3));
    }

    #[test]
    fn test_account_debug_masks_embedded_token() {
        let account = Account::parse_json(r#"{"id":"a","accessToken":"raw-secret"}"#).unwrap();
        assert!(!format!("{account:?}").contains("raw-secret"));
    }

    #[test]
    fn test_trial_accounts_parse_list() {
        let accounts =
            TrialAccounts::parse_json(r#"[{"id":"a","accountType":"Trial"},{"id":"b"}]"#).unwrap();

        assert_eq!(accounts.len(), 2);
        assert!(accounts[0].is_trial());
        assert!(!accounts[1].is_trial());
    }
}
