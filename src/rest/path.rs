//! Path building infrastructure for resources.
//!
//! Every resource URL has the shape
//! `{base}/{location}[/Accounts/{accountId}][/{template}]`. The
//! [`EndpointScope`] of a [`ResourcePath`] decides whether the account
//! segment is present; the template supplies the resource-specific tail with
//! `{name}` placeholders for identifiers.
//!
//! All inserted segments are percent-encoded, so an identifier can never
//! introduce an extra path segment or a query string.
//!
//! # Example
//!
//! ```rust
//! use video_indexer::rest::{build_path, EndpointScope, ResourcePath};
//! use video_indexer::clients::{AuthStyle, HttpMethod};
//! use std::collections::HashMap;
//!
//! const INDEX: ResourcePath = ResourcePath::new(
//!     HttpMethod::Get,
//!     EndpointScope::Account,
//!     AuthStyle::Query,
//!     &["id"],
//!     "Videos/{id}/Index",
//! );
//!
//! let mut ids = HashMap::new();
//! ids.insert("id", "v 1");
//!
//! assert_eq!(build_path(INDEX.template, &ids), "Videos/v%201/Index");
//! ```

use crate::clients::{AuthStyle, HttpMethod};
use crate::config::{AccountId, BaseUrl, Location};
use std::collections::HashMap;
use std::fmt::Display;

/// Where a resource lives relative to the base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointScope {
    /// `{base}/{location}/{template}`, for region-wide resources.
    Location,
    /// `{base}/{location}/Accounts/{accountId}[/{template}]`.
    Account,
}

/// The request shape of a resource.
///
/// Defines the HTTP method, the URL template with its required identifiers,
/// and the credential convention of the endpoint family.
///
/// # Example
///
/// ```rust
/// use video_indexer::rest::{EndpointScope, ResourcePath};
/// use video_indexer::clients::{AuthStyle, HttpMethod};
///
/// const JOB: ResourcePath = ResourcePath::new(
///     HttpMethod::Get,
///     EndpointScope::Account,
///     AuthStyle::Bearer,
///     &["id"],
///     "Jobs/{id}",
/// );
/// assert_eq!(JOB.missing_id(&[]), Some("id"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The HTTP method for this path.
    pub http_method: HttpMethod,
    /// Whether the account segment is part of the URL.
    pub scope: EndpointScope,
    /// How the access token is attached.
    pub auth: AuthStyle,
    /// Required identifier names, in template order (e.g., `["id"]`).
    pub ids: &'static [&'static str],
    /// The URL tail with `{name}` placeholders. May be empty.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` to allow paths to be defined as constants.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        scope: EndpointScope,
        auth: AuthStyle,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            scope,
            auth,
            ids,
            template,
        }
    }

    /// Returns the first required ID that is not available.
    #[must_use]
    pub fn missing_id(&self, available_ids: &[&str]) -> Option<&'static str> {
        self.ids
            .iter()
            .find(|id| !available_ids.contains(id))
            .copied()
    }
}

/// Builds a path from a template by interpolating percent-encoded IDs.
///
/// Replaces `{id_name}` placeholders in the template with values from
/// the provided map.
///
/// # Example
///
/// ```rust
/// use video_indexer::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("id", "abc/def");
///
/// assert_eq!(build_path("Jobs/{id}", &ids), "Jobs/abc%2Fdef");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(&value.to_string()));
    }

    result
}

/// Composes the absolute URL of a resource, without query string.
///
/// `account` adds the `Accounts/{accountId}` segments; `path` is the
/// already-interpolated template and is omitted when empty.
///
/// # Example
///
/// ```rust
/// use video_indexer::rest::endpoint_url;
/// use video_indexer::{AccountId, BaseUrl, Location};
///
/// let base = BaseUrl::default();
/// let trial = Location::trial();
///
/// assert_eq!(
///     endpoint_url(&base, &trial, None, "SupportedLanguages"),
///     "https://api.videoindexer.ai/trial/SupportedLanguages"
/// );
///
/// let account = AccountId::new("abc123").unwrap();
/// assert_eq!(
///     endpoint_url(&base, &trial, Some(&account), ""),
///     "https://api.videoindexer.ai/trial/Accounts/abc123"
/// );
/// ```
#[must_use]
pub fn endpoint_url(
    base: &BaseUrl,
    location: &Location,
    account: Option<&AccountId>,
    path: &str,
) -> String {
    let mut url = format!("{base}/{}", urlencoding::encode(location.as_ref()));

    if let Some(account) = account {
        url.push_str("/Accounts/");
        url.push_str(&urlencoding::encode(account.as_ref()));
    }

    if !path.is_empty() {
        url.push('/');
        url.push_str(path);
    }

    url
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EndpointScope>();
    assert_send_sync::<ResourcePath>();
};
