//! Account migration status resources.
//!
//! Accounts moving from the classic service to the resource-managed one
//! migrate in the background. These resources report its progress:
//!
//! - [`AccountMigration`]: GET `.../AccountMigrationStatus`, the overall status
//! - [`ProjectMigrations`] / [`VideoMigrations`]: pages of per-item status
//! - [`ProjectMigration`] / [`VideoMigration`]: the status of one item
//!
//! All of them use the bearer credential convention. The single-item
//! resources answer 404 for items that are not part of the migration, so
//! they implement [`OptionalResource`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Page;
use crate::clients::{AuthStyle, HttpMethod};
use crate::rest::{EndpointScope, OptionalResource, Resource, ResourcePath};

service_enum! {
    /// Progress of a migration or of one migrated item.
    pub enum MigrationState {
        NotStarted,
        Pending,
        InProgress,
        Success,
        Failed,
    }
}

/// The migration status of a whole account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountMigration {
    /// The overall state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MigrationState>,

    /// Completion percentage, 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migration_completed_percentage: Option<u8>,

    /// A human-readable status detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Items that could not be migrated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_failed_items: Option<u64>,

    /// Items migrated so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_migrated_items: Option<u64>,

    /// Items in scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items_to_migrate: Option<u64>,
}

impl AccountMigration {
    /// Returns `true` once the migration has finished, successfully or not.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status,
            Some(MigrationState::Success | MigrationState::Failed)
        )
    }
}

impl Resource for AccountMigration {
    type Payload = Self;
    type Params = ();
    type Body = ();

    const NAME: &'static str = "AccountMigration";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        EndpointScope::Account,
        AuthStyle::Bearer,
        &[],
        "AccountMigrationStatus",
    );
}

/// The migration status of one project.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMigration {
    /// The project id.
    pub id: String,

    /// The project name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The migration state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MigrationState>,

    /// Why the project could not be migrated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// When the project was migrated.
    #[serde(
        default,
        with = "crate::rest::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub migration_completed_at: Option<DateTime<Utc>>,
}

impl Resource for ProjectMigration {
    type Payload = Self;
    type Params = ();
    type Body = ();

    const NAME: &'static str = "ProjectMigration";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        EndpointScope::Account,
        AuthStyle::Bearer,
        &["id"],
        "ProjectsMigrations/{id}",
    );
}

impl OptionalResource for ProjectMigration {}

/// The migration status of one video.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoMigration {
    /// The video id.
    pub id: String,

    /// The video name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The migration state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MigrationState>,

    /// Why the video could not be migrated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// When the video was migrated.
    #[serde(
        default,
        with = "crate::rest::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub migration_completed_at: Option<DateTime<Utc>>,
}

impl Resource for VideoMigration {
    type Payload = Self;
    type Params = ();
    type Body = ();

    const NAME: &'static str = "VideoMigration";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        EndpointScope::Account,
        AuthStyle::Bearer,
        &["id"],
        "VideosMigrations/{id}",
    );
}

impl OptionalResource for VideoMigration {}

/// Parameters for listing migrated items.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MigrationListParams {
    /// Maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Number of results to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,

    /// Only items in these states (repeated parameter).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<MigrationState>,
}

/// A page of project migration statuses.
pub struct ProjectMigrations;

impl Resource for ProjectMigrations {
    type Payload = Page<ProjectMigration>;
    type Params = MigrationListParams;
    type Body = ();

    const NAME: &'static str = "ProjectMigrations";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        EndpointScope::Account,
        AuthStyle::Bearer,
        &[],
        "ProjectsMigrations",
    );
}

/// A page of video migration statuses.
pub struct VideoMigrations;

impl Resource for VideoMigrations {
    type Payload = Page<VideoMigration>;
    type Params = MigrationListParams;
    type Body = ();

    const NAME: &'static str = "VideoMigrations";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        EndpointScope::Account,
        AuthStyle::Bearer,
        &[],
        "VideosMigrations",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpClient;
    use crate::config::{AccountId, BaseUrl, IndexerConfig, Location};
    use crate::rest::ResourceRequest;

    fn client() -> HttpClient {
        HttpClient::new(
            &IndexerConfig::builder()
                .base_url(BaseUrl::new("https://vi.example").unwrap())
                .build(),
        )
    }

    #[test]
    fn test_account_migration_parse() {
        let migration = AccountMigration::parse_json(
            r#"{"Status":"InProgress","MigrationCompletedPercentage":60,"TotalMigratedItems":6,"TotalItemsToMigrate":10}"#,
        )
        .unwrap();

        assert_eq!(migration.status, Some(MigrationState::InProgress));
        assert_eq!(migration.migration_completed_percentage, Some(60));
        assert!(!migration.is_finished());
    }

    #[test]
    fn test_video_migrations_url_repeats_states() {
        let request = ResourceRequest::builder(Location::new("eastus").unwrap())
            .account(AccountId::new("abc123").unwrap())
            .params(MigrationListParams {
                page_size: Some(25),
                skip: None,
                states: vec![MigrationState::Failed, MigrationState::Pending],
            })
            .build();

        assert_eq!(
            VideoMigrations::build_url(&client(), &request).unwrap(),
            "https://vi.example/eastus/Accounts/abc123/VideosMigrations?pageSize=25&states=Failed&states=Pending"
        );
    }

    #[test]
    fn test_project_migration_url() {
        let request = ResourceRequest::builder(Location::new("eastus").unwrap())
            .account(AccountId::new("abc123").unwrap())
            .resource_id("p-7")
            .build();

        assert_eq!(
            ProjectMigration::build_url(&client(), &request).unwrap(),
            "https://vi.example/eastus/Accounts/abc123/ProjectsMigrations/p-7"
        );
    }

    #[test]
    fn test_migration_page_parse() {
        let page = ProjectMigrations::parse_json(
            r#"{"results":[{"id":"p-1","status":"Success","migrationCompletedAt":"2024-06-01T00:00:00Z"},{"id":"p-2","status":"failed","details":"too large"}],"nextPage":{"done":true}}"#,
        )
        .unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page.results[1].status, Some(MigrationState::Failed));
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_migration_resources_use_bearer() {
        for auth in [
            AccountMigration::PATH.auth,
            ProjectMigration::PATH.auth,
            ProjectMigrations::PATH.auth,
            VideoMigration::PATH.auth,
            VideoMigrations::PATH.auth,
        ] {
            assert_eq!(auth, AuthStyle::Bearer);
        }
    }
}
