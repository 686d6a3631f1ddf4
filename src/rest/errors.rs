//! Resource-specific error types.
//!
//! This module contains [`ResourceError`], the error returned by every
//! resource accessor. It wraps [`HttpError`] for failures of the exchange and
//! adds the resource-level failures: a payload that does not match its
//! model, or a request that cannot be turned into a URL.
//!
//! # Failure Kinds
//!
//! [`ResourceError::kind`] collapses the variants into the three kinds a
//! caller usually branches on:
//!
//! - [`FailureKind::Transport`]: the exchange could not be completed
//! - [`FailureKind::Http`]: the service answered with a non-success status
//! - [`FailureKind::Deserialization`]: the body did not match the expected shape
//!
//! # Example
//!
//! ```rust,ignore
//! use video_indexer::clients::FailureKind;
//! use video_indexer::rest::Resource;
//! use video_indexer::rest::resources::Job;
//!
//! match Job::get(&client, &request).await {
//!     Ok(job) => println!("Job state: {:?}", job.state),
//!     Err(e) if e.kind() == Some(FailureKind::Http) => {
//!         println!("Service rejected the call with {:?}", e.status());
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::{FailureKind, HttpError};
use thiserror::Error;

/// Error type for resource operations.
///
/// # Example
///
/// ```rust
/// use video_indexer::rest::ResourceError;
///
/// let error = ResourceError::PathResolutionFailed {
///     resource: "VideoIndex",
///     missing: "id",
/// };
/// assert!(error.to_string().contains("VideoIndex"));
/// assert!(error.kind().is_none());
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// An HTTP-level error occurred.
    ///
    /// Covers transport failures, non-success statuses, and HTTP requests
    /// rejected before sending.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body did not match the resource's payload model.
    ///
    /// The request nominally succeeded, but the contract was violated.
    #[error("Failed to deserialize {resource} payload: {source}")]
    Deserialization {
        /// The name of the resource being parsed.
        resource: &'static str,
        /// The parser's diagnostic.
        #[source]
        source: serde_json::Error,
    },

    /// A path input required by the resource's template was not provided.
    ///
    /// Nothing was sent.
    #[error("Cannot resolve path for {resource}: missing {missing}")]
    PathResolutionFailed {
        /// The name of the resource.
        resource: &'static str,
        /// The name of the missing path input.
        missing: &'static str,
    },

    /// The request parameters or body could not be encoded.
    ///
    /// Nothing was sent.
    #[error("Invalid {resource} request: {reason}")]
    InvalidRequest {
        /// The name of the resource.
        resource: &'static str,
        /// Why the request is invalid.
        reason: String,
    },
}

impl ResourceError {
    /// Returns the failure kind, or `None` when the request was rejected
    /// before anything was sent.
    #[must_use]
    pub const fn kind(&self) -> Option<FailureKind> {
        match self {
            Self::Http(HttpError::Transport(_)) => Some(FailureKind::Transport),
            Self::Http(HttpError::Response(_)) => Some(FailureKind::Http),
            Self::Deserialization { .. } => Some(FailureKind::Deserialization),
            Self::Http(HttpError::InvalidRequest(_))
            | Self::PathResolutionFailed { .. }
            | Self::InvalidRequest { .. } => None,
        }
    }

    /// Returns the HTTP status code for non-success responses.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the response body for non-success responses.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Http(HttpError::Response(e)) => Some(&e.body),
            _ => None,
        }
    }

    /// Returns `true` if the service answered 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, InvalidHttpRequestError};

    fn http_failure(status: u16, body: &str) -> ResourceError {
        ResourceError::Http(HttpError::Response(HttpResponseError {
            status,
            body: body.to_string(),
            url: "https://api.videoindexer.ai/trial/Accounts/abc?accessToken=***".to_string(),
        }))
    }

    #[test]
    fn test_http_failure_kind_status_and_body() {
        let error = http_failure(404, r#"{"error":"not found"}"#);

        assert_eq!(error.kind(), Some(FailureKind::Http));
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.body(), Some(r#"{"error":"not found"}"#));
        assert!(error.is_not_found());
    }

    #[test]
    fn test_deserialization_failure_kind() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = ResourceError::Deserialization {
            resource: "Account",
            source,
        };

        assert_eq!(error.kind(), Some(FailureKind::Deserialization));
        assert_eq!(error.status(), None);
        assert!(error.to_string().starts_with("Failed to deserialize Account payload"));
    }

    #[test]
    fn test_pre_flight_failures_have_no_kind() {
        let errors = [
            ResourceError::PathResolutionFailed {
                resource: "Job",
                missing: "id",
            },
            ResourceError::InvalidRequest {
                resource: "Redact",
                reason: "bad body".to_string(),
            },
            ResourceError::Http(HttpError::InvalidRequest(
                InvalidHttpRequestError::MissingBodyType,
            )),
        ];

        for error in errors {
            assert!(error.kind().is_none(), "{error}");
            assert!(!error.is_not_found());
        }
    }

    #[test]
    fn test_http_error_converts_via_from() {
        let http = HttpError::Response(HttpResponseError {
            status: 500,
            body: String::new(),
            url: String::new(),
        });
        let error: ResourceError = http.into();
        assert_eq!(error.status(), Some(500));
    }
}
