//! HTTP request types.
//!
//! This module provides the [`HttpRequest`] type and its builder.

use std::fmt;

use crate::auth::AccessToken;
use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Video Indexer API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieval and listing.
    Get,
    /// HTTP POST method for creation and actions.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
        }
    }
}

/// How the access token travels with a request.
///
/// Each endpoint family uses exactly one convention; the credential is never
/// sent both ways.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStyle {
    /// `?accessToken=<urlencoded>` query parameter.
    #[default]
    Query,
    /// `Authorization: Bearer <token>` header.
    Bearer,
}

/// An HTTP request to be sent to the Video Indexer API.
///
/// `url` is the absolute URL without credentials; the client adds the access
/// token according to `auth_style`.
///
/// # Example
///
/// ```rust
/// use video_indexer::clients::{AuthStyle, DataType, HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "https://api.videoindexer.ai/trial/Accounts/abc/Videos/v1/redact")
///     .body(json!({"faces": {"blurringKind": "HighBlur"}}))
///     .body_type(DataType::Json)
///     .auth_style(AuthStyle::Bearer)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL, without credentials.
    pub url: String,
    /// The request body, if any.
    pub body: Option<serde_json::Value>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// The access token, if the call is authenticated.
    pub access_token: Option<AccessToken>,
    /// How the access token is attached.
    pub auth_style: AuthStyle,
    /// Non-2xx statuses returned as responses instead of failures.
    pub accepted_statuses: Vec<u16>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is `Some` but `body_type` is `None`
    /// - `http_method` is `Post` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if self.http_method == HttpMethod::Post && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns `true` if `status` should be returned as a response.
    #[must_use]
    pub fn accepts(&self, status: u16) -> bool {
        (200..300).contains(&status) || self.accepted_statuses.contains(&status)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    body: Option<serde_json::Value>,
    body_type: Option<DataType>,
    access_token: Option<AccessToken>,
    auth_style: AuthStyle,
    accepted_statuses: Vec<u16>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            body: None,
            body_type: None,
            access_token: None,
            auth_style: AuthStyle::default(),
            accepted_statuses: Vec::new(),
        }
    }

    /// Sets the request body.
    ///
    /// When setting a body, you must also set the body type via [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Sets the access token.
    #[must_use]
    pub fn access_token(mut self, token: Option<AccessToken>) -> Self {
        self.access_token = token;
        self
    }

    /// Sets how the access token is attached.
    #[must_use]
    pub const fn auth_style(mut self, style: AuthStyle) -> Self {
        self.auth_style = style;
        self
    }

    /// Treats `status` as a normal response rather than a failure.
    #[must_use]
    pub fn accept_status(mut self, status: u16) -> Self {
        self.accepted_statuses.push(status);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
            body_type: self.body_type,
            access_token: self.access_token,
            auth_style: self.auth_style,
            accepted_statuses: self.accepted_statuses,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://api.videoindexer.ai/trial/Accounts/abc/Videos";

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, URL).build().unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.url, URL);
        assert!(request.body.is_none());
        assert!(request.access_token.is_none());
        assert_eq!(request.auth_style, AuthStyle::Query);
    }

    #[test]
    fn test_verify_requires_body_for_post() {
        let result = HttpRequest::builder(HttpMethod::Post, URL).build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBody { method }) if method == "post"
        ));
    }

    #[test]
    fn test_verify_requires_body_type_when_body_present() {
        let result = HttpRequest::builder(HttpMethod::Get, URL)
            .body(json!({"key": "value"}))
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::MissingBodyType)
        ));
    }

    #[test]
    fn test_builder_with_token_and_bearer_style() {
        let request = HttpRequest::builder(HttpMethod::Get, URL)
            .access_token(Some(AccessToken::new("tok").unwrap()))
            .auth_style(AuthStyle::Bearer)
            .build()
            .unwrap();

        assert_eq!(request.auth_style, AuthStyle::Bearer);
        assert_eq!(request.access_token.unwrap().as_ref(), "tok");
    }

    #[test]
    fn test_accepted_statuses() {
        let request = HttpRequest::builder(HttpMethod::Get, URL)
            .accept_status(404)
            .build()
            .unwrap();

        assert!(request.accepts(200));
        assert!(request.accepts(202));
        assert!(request.accepts(404));
        assert!(!request.accepts(500));
    }

    #[test]
    fn test_debug_output_masks_token() {
        let request = HttpRequest::builder(HttpMethod::Get, URL)
            .access_token(Some(AccessToken::new("very-secret").unwrap()))
            .build()
            .unwrap();

        assert!(!format!("{request:?}").contains("very-secret"));
    }
}
