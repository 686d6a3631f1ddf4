//! Validated newtype wrappers for configuration and addressing values.
//!
//! These wrappers validate their contents on construction so that every URL
//! the client composes is built from well-formed segments.

use crate::error::ConfigError;
use std::fmt;

/// The default public endpoint of the Video Indexer API.
pub const DEFAULT_BASE_URL: &str = "https://api.videoindexer.ai";

/// A validated base endpoint URL.
///
/// The URL must be absolute with an `http` or `https` scheme and a non-empty
/// host. Trailing slashes are trimmed so path segments can be appended with a
/// single `/`.
///
/// # Example
///
/// ```rust
/// use video_indexer::BaseUrl;
///
/// let url = BaseUrl::new("https://api.videoindexer.ai/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.videoindexer.ai");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.videoindexer.ai");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no http(s)
    /// scheme, no host, or carries a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        // Query strings and fragments would end up between path segments
        if url.contains(['?', '#']) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = url.get(host_start..).ok_or_else(invalid)?;
        let host_end = remainder
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: DEFAULT_BASE_URL.len(),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A validated region/location segment (e.g., `trial`, `westus2`).
///
/// # Example
///
/// ```rust
/// use video_indexer::Location;
///
/// let location = Location::new("trial").unwrap();
/// assert!(location.is_trial());
/// assert!(Location::new("west/us").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    /// The location name used by trial accounts.
    pub const TRIAL: &'static str = "trial";

    /// Creates a new validated location.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLocation`] if the location is empty or
    /// contains URL delimiters or whitespace.
    pub fn new(location: impl Into<String>) -> Result<Self, ConfigError> {
        let location = location.into().trim().to_string();
        let valid = !location.is_empty()
            && !location
                .chars()
                .any(|c| matches!(c, '/' | '?' | '#' | '&') || c.is_whitespace());
        if !valid {
            return Err(ConfigError::InvalidLocation { location });
        }
        Ok(Self(location))
    }

    /// Returns the trial location.
    #[must_use]
    pub fn trial() -> Self {
        Self(Self::TRIAL.to_string())
    }

    /// Returns `true` for the trial location.
    #[must_use]
    pub fn is_trial(&self) -> bool {
        self.0.eq_ignore_ascii_case(Self::TRIAL)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated account identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    /// Creates a new validated account id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccountId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(ConfigError::EmptyAccountId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let url = BaseUrl::new("https://api.videoindexer.ai///").unwrap();
        assert_eq!(url.as_ref(), "https://api.videoindexer.ai");
    }

    #[test]
    fn test_base_url_keeps_path_prefix_and_port() {
        let url = BaseUrl::new("http://localhost:8080/proxy").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "localhost");
        assert_eq!(url.as_ref(), "http://localhost:8080/proxy");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("api.videoindexer.ai").is_err());
        assert!(BaseUrl::new("ftp://api.videoindexer.ai").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("https://host/path?x=1").is_err());
    }

    #[test]
    fn test_default_base_url_matches_constructed() {
        let constructed = BaseUrl::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(BaseUrl::default(), constructed);
    }

    #[test]
    fn test_location_validation() {
        assert!(Location::new("westus2").is_ok());
        assert!(Location::new("").is_err());
        assert!(Location::new("west us").is_err());
        assert!(Location::new("trial?x").is_err());
        assert_eq!(Location::new("  trial ").unwrap().as_ref(), "trial");
    }

    #[test]
    fn test_location_trial() {
        assert!(Location::trial().is_trial());
        assert!(Location::new("Trial").unwrap().is_trial());
        assert!(!Location::new("eastus").unwrap().is_trial());
    }

    #[test]
    fn test_account_id_rejects_empty() {
        assert!(matches!(AccountId::new("  "), Err(ConfigError::EmptyAccountId)));
        assert_eq!(AccountId::new("abc123").unwrap().to_string(), "abc123");
    }
}
