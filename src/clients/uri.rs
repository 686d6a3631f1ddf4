//! Credential-safe request URIs.
//!
//! Every request URI is produced in two forms: the real URI sent over the
//! network, which carries the URL-encoded access token, and a log URI in which
//! the token is replaced by [`MASK`]. Only the log form is ever handed to
//! `tracing` or stored in an error.
//!
//! # Example
//!
//! ```rust
//! use video_indexer::clients::SecureUri;
//!
//! let uri = SecureUri::build("https://api.videoindexer.ai/trial/SupportedLanguages", Some("tok==&x"));
//! assert_eq!(
//!     uri.request_uri(),
//!     "https://api.videoindexer.ai/trial/SupportedLanguages?accessToken=tok%3D%3D%26x"
//! );
//! assert_eq!(
//!     uri.log_uri(),
//!     "https://api.videoindexer.ai/trial/SupportedLanguages?accessToken=***"
//! );
//! ```

use std::borrow::Cow;

/// Query parameter name used for query-string credentials.
pub const ACCESS_TOKEN_PARAM: &str = "accessToken";

/// Replacement text for credentials in anything destined for logs.
pub const MASK: &str = "***";

/// A request URI paired with its redacted, log-safe form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecureUri {
    request_uri: String,
    log_uri: String,
}

impl SecureUri {
    /// Builds the request and log URIs for `base_uri`.
    ///
    /// When `credential` is `None` or empty both forms equal `base_uri`.
    /// Otherwise the credential is appended as an `accessToken` query
    /// parameter, joined with `?` or `&` depending on whether `base_uri`
    /// already has a query string.
    #[must_use]
    pub fn build(base_uri: &str, credential: Option<&str>) -> Self {
        let Some(credential) = credential.filter(|c| !c.is_empty()) else {
            return Self {
                request_uri: base_uri.to_string(),
                log_uri: base_uri.to_string(),
            };
        };

        let separator = if base_uri.contains('?') { '&' } else { '?' };
        let request_uri = format!(
            "{base_uri}{separator}{ACCESS_TOKEN_PARAM}={}",
            urlencoding::encode(credential)
        );
        let log_uri = format!(
            "{}{separator}{ACCESS_TOKEN_PARAM}={MASK}",
            redact(base_uri, Some(credential))
        );

        Self {
            request_uri,
            log_uri,
        }
    }

    /// Returns the URI to send over the network.
    #[must_use]
    pub fn request_uri(&self) -> &str {
        &self.request_uri
    }

    /// Returns the URI safe for logs and error messages.
    #[must_use]
    pub fn log_uri(&self) -> &str {
        &self.log_uri
    }
}

/// Masks every occurrence of `credential` in `text`, raw or URL-encoded.
///
/// Returns `text` unchanged when there is no credential or it does not occur.
#[must_use]
pub fn redact<'a>(text: &'a str, credential: Option<&str>) -> Cow<'a, str> {
    let Some(credential) = credential.filter(|c| !c.is_empty()) else {
        return Cow::Borrowed(text);
    };

    let encoded = urlencoding::encode(credential);
    if !text.contains(credential) && !text.contains(encoded.as_ref()) {
        return Cow::Borrowed(text);
    }

    let mut masked = text.replace(credential, MASK);
    if encoded != credential {
        masked = masked.replace(encoded.as_ref(), MASK);
    }
    Cow::Owned(masked)
}
