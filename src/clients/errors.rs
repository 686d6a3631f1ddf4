//! HTTP-layer error types.
//!
//! - [`TransportError`]: the exchange could not be completed
//! - [`HttpResponseError`]: the service answered with a non-2xx status
//! - [`InvalidHttpRequestError`]: a request failed validation before sending
//! - [`HttpError`]: unified error type for all of the above
//!
//! URLs stored in these errors are always the redacted log form.
//!
//! # Example
//!
//! ```rust,ignore
//! use video_indexer::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("HTTP {}: {}", e.status, e.body),
//!     Err(HttpError::Transport(e)) => println!("Transport failure: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the exchange itself fails (connection refused, DNS,
/// TLS, timeout, or a body that could not be read).
///
/// The underlying `reqwest::Error` has its URL stripped, since the request
/// URL may carry the access token.
#[derive(Debug, Error)]
#[error("Transport failure calling {url}: {source}")]
pub struct TransportError {
    /// The redacted URL of the request.
    pub url: String,
    /// The underlying transport error.
    #[source]
    pub source: reqwest::Error,
}

impl TransportError {
    /// Returns `true` if the failure was a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.source.is_timeout()
    }

    /// Returns `true` if the connection could not be established.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        self.source.is_connect()
    }
}

/// Error returned when the service answers with a non-successful status.
///
/// # Example
///
/// ```rust
/// use video_indexer::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     status: 404,
///     body: r#"{"error":"not found"}"#.to_string(),
///     url: "https://api.videoindexer.ai/trial/Accounts/abc?accessToken=***".to_string(),
/// };
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP {status} from {url}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The response body, kept whole for diagnosis. It is left out of
    /// `Display` because the service may echo credentials back.
    pub body: String,
    /// The redacted URL of the request.
    pub url: String,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for HTTP operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The exchange could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service answered with a non-2xx status.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed; nothing was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}

impl HttpError {
    /// Returns the HTTP status code for response errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_display_omits_body() {
        let error = HttpResponseError {
            status: 401,
            body: r#"{"message":"token eyJ0.secret.sig expired"}"#.to_string(),
            url: "https://host/trial/Accounts/a?accessToken=***".to_string(),
        };
        let message = error.to_string();

        assert_eq!(message, "HTTP 401 from https://host/trial/Accounts/a?accessToken=***");
        assert!(!message.contains("secret"));
        assert!(error.body.contains("eyJ0.secret.sig"));
    }

    #[test]
    fn test_http_error_status_accessor() {
        let error = HttpError::Response(HttpResponseError {
            status: 401,
            body: String::new(),
            url: String::new(),
        });
        assert_eq!(error.status(), Some(401));

        let error = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType);
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_invalid_request_error_messages() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use post without specifying data.");
        assert_eq!(
            InvalidHttpRequestError::MissingBodyType.to_string(),
            "Cannot set a body without also setting body_type."
        );
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let error: &dyn std::error::Error = &HttpResponseError {
            status: 400,
            body: "test".to_string(),
            url: String::new(),
        };
        let _ = error;

        let invalid: &dyn std::error::Error = &InvalidHttpRequestError::MissingBodyType;
        let _ = invalid;
    }
}
