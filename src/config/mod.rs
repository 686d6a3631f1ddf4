//! Configuration types for the Video Indexer client.
//!
//! # Overview
//!
//! - [`IndexerConfig`]: the settings shared by every request
//! - [`IndexerConfigBuilder`]: a builder for [`IndexerConfig`]
//! - [`BaseUrl`]: a validated base endpoint URL
//! - [`Location`]: a validated region segment
//! - [`AccountId`]: a validated account identifier
//!
//! Loading these values from files or the environment is left to the host
//! application; the client only consumes them.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use video_indexer::{BaseUrl, IndexerConfig};
//!
//! let config = IndexerConfig::builder()
//!     .base_url(BaseUrl::new("https://api.videoindexer.ai").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build();
//! ```

mod newtypes;

pub use newtypes::{AccountId, BaseUrl, Location, DEFAULT_BASE_URL};

use std::time::Duration;

/// Configuration shared by every resource accessor.
///
/// # Thread Safety
///
/// `IndexerConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, Default)]
pub struct IndexerConfig {
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl IndexerConfig {
    /// Creates a new builder for constructing an `IndexerConfig`.
    #[must_use]
    pub fn builder() -> IndexerConfigBuilder {
        IndexerConfigBuilder::new()
    }

    /// Returns the base endpoint URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the timeout applied to transports the client builds itself.
    ///
    /// An injected shared transport keeps its own timeout settings.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify IndexerConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<IndexerConfig>();
};

/// Builder for constructing [`IndexerConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (reqwest default, no overall timeout)
#[derive(Debug, Default)]
pub struct IndexerConfigBuilder {
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl IndexerConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base endpoint URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the request timeout for ad-hoc transports.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`IndexerConfig`].
    #[must_use]
    pub fn build(self) -> IndexerConfig {
        IndexerConfig {
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = IndexerConfig::builder().build();

        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let base = BaseUrl::new("http://localhost:9000").unwrap();
        let config = IndexerConfig::builder()
            .base_url(base.clone())
            .user_agent_prefix("MediaTool/2.1")
            .timeout(Duration::from_secs(15))
            .build();

        assert_eq!(config.base_url(), &base);
        assert_eq!(config.user_agent_prefix(), Some("MediaTool/2.1"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IndexerConfig>();
    }
}
