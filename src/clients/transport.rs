//! Transport provisioning.
//!
//! A [`TransportProvider`] hands out the `reqwest::Client` used for each
//! exchange. An injected client is shared by every accessor (reqwest clients
//! are reference-counted and pool connections internally); without one, a
//! fresh client is built for the single call and dropped afterwards.

use std::time::Duration;

/// Supplies the HTTP transport for each request.
///
/// # Example
///
/// ```rust
/// use video_indexer::clients::TransportProvider;
///
/// // Share one pooled client across every accessor
/// let shared = TransportProvider::shared(reqwest::Client::new());
/// assert!(shared.is_shared());
///
/// // Or build a client per call
/// let ad_hoc = TransportProvider::ad_hoc(None);
/// assert!(!ad_hoc.is_shared());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransportProvider {
    shared: Option<reqwest::Client>,
    timeout: Option<Duration>,
}

// Verify TransportProvider is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransportProvider>();
};

impl TransportProvider {
    /// Uses `client` for every request.
    #[must_use]
    pub fn shared(client: reqwest::Client) -> Self {
        Self {
            shared: Some(client),
            timeout: None,
        }
    }

    /// Builds a new client for every request, applying `timeout` if set.
    #[must_use]
    pub const fn ad_hoc(timeout: Option<Duration>) -> Self {
        Self {
            shared: None,
            timeout,
        }
    }

    /// Returns `true` when an injected client is reused.
    #[must_use]
    pub const fn is_shared(&self) -> bool {
        self.shared.is_some()
    }

    /// Returns the client for one exchange.
    ///
    /// # Errors
    ///
    /// Returns the builder error if an ad-hoc client cannot be created
    /// (e.g., TLS backend initialization failure).
    pub fn client(&self) -> Result<reqwest::Client, reqwest::Error> {
        if let Some(client) = &self.shared {
            return Ok(client.clone());
        }

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}
