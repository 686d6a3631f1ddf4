//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type returned by
//! [`HttpClient::request`](crate::clients::HttpClient::request).

use std::collections::HashMap;

/// A response from the Video Indexer API.
///
/// The body is kept as the raw text the service returned; parsing into typed
/// payloads happens in the resource layer so callers can keep the undecoded
/// JSON when they want it.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use video_indexer::clients::HttpResponse;
///
/// let response = HttpResponse::new(
///     200,
///     HashMap::new(),
///     r#"[{"name":"English","languageCode":"en-US"}]"#.to_string(),
///     "https://api.videoindexer.ai/trial/SupportedLanguages?accessToken=***".to_string(),
/// );
/// assert!(response.is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name. Multi-valued headers keep every value.
    pub headers: HashMap<String, Vec<String>>,
    /// Raw response body.
    pub body: String,
    /// The redacted URL the response came from.
    pub log_uri: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: String,
        log_uri: String,
    ) -> Self {
        Self {
            code,
            headers,
            body,
            log_uri,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` for a 404 status code.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }

    /// Returns the first value of the header `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the service's request id, if present.
    ///
    /// Useful when reporting issues to the service operator.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-ms-request-id")
    }
}
