//! HTTP client for Video Indexer API communication.
//!
//! This module provides the [`HttpClient`] type, which performs one
//! authenticated exchange per call and classifies every failure.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError, TransportError};
use crate::clients::http_request::{AuthStyle, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::report::{FailureKind, FailureReporter};
use crate::clients::transport::TransportProvider;
use crate::clients::uri::{redact, SecureUri};
use crate::config::{BaseUrl, IndexerConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Video Indexer API.
///
/// The client handles:
/// - Attaching the access token by query parameter or bearer header
/// - Default headers including User-Agent and Accept
/// - Logging each failure once, through the redacted URL
/// - Classifying failures as transport or HTTP errors
///
/// It never retries. Retries, backoff and pooling belong to the injected
/// `reqwest::Client`, if any.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use video_indexer::{AccessToken, IndexerConfig};
/// use video_indexer::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = IndexerConfig::default();
/// let client = HttpClient::with_transport(&config, reqwest::Client::new());
///
/// let request = HttpRequest::builder(HttpMethod::Get, client.url_for("trial/SupportedLanguages"))
///     .access_token(Some(AccessToken::new("token")?))
///     .build()?;
///
/// let response = client.request(request).await?;
/// println!("{}", response.body);
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// Supplies the reqwest client for each exchange.
    transport: TransportProvider,
    /// Base URL (e.g., `https://api.videoindexer.ai`).
    base_url: BaseUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Logs failed calls.
    reporter: FailureReporter,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client that builds a fresh transport for every call.
    ///
    /// The configured timeout, if any, applies to those transports.
    ///
    /// # Example
    ///
    /// ```rust
    /// use video_indexer::IndexerConfig;
    /// use video_indexer::clients::HttpClient;
    ///
    /// let client = HttpClient::new(&IndexerConfig::default());
    /// assert_eq!(client.base_url().as_ref(), "https://api.videoindexer.ai");
    /// ```
    #[must_use]
    pub fn new(config: &IndexerConfig) -> Self {
        Self::from_parts(config, TransportProvider::ad_hoc(config.timeout()))
    }

    /// Creates a client that shares `client` across every call.
    ///
    /// Timeouts and pooling are whatever `client` was built with.
    #[must_use]
    pub fn with_transport(config: &IndexerConfig, client: reqwest::Client) -> Self {
        Self::from_parts(config, TransportProvider::shared(client))
    }

    fn from_parts(config: &IndexerConfig, transport: TransportProvider) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Video Indexer Client v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            transport,
            base_url: config.base_url().clone(),
            default_headers,
            reporter: FailureReporter::default(),
        }
    }

    /// Replaces the failure reporter, e.g. to parent events to the caller's span.
    #[must_use]
    pub fn with_reporter(mut self, reporter: FailureReporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the failure reporter.
    #[must_use]
    pub const fn reporter(&self) -> &FailureReporter {
        &self.reporter
    }

    /// Returns the transport provider.
    #[must_use]
    pub const fn transport(&self) -> &TransportProvider {
        &self.transport
    }

    /// Joins `path` onto the base URL.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.as_ref().to_string()
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Sends an HTTP request to the Video Indexer API.
    ///
    /// A 2xx status, or any status the request explicitly accepts, yields a
    /// response. Everything else is logged once at error level, through the
    /// redacted URL, and returned as an error.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`); nothing is sent or logged
    /// - The exchange cannot be completed (`Transport`)
    /// - A non-accepted status is received (`Response`), carrying the full body
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let credential = request.access_token.as_ref().map(AsRef::as_ref);
        let uri = match request.auth_style {
            AuthStyle::Query => SecureUri::build(&request.url, credential),
            AuthStyle::Bearer => SecureUri::build(&request.url, None),
        };

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }

        let client = self
            .transport
            .client()
            .map_err(|e| self.transport_failure(uri.log_uri(), e, credential))?;

        let mut req_builder = match request.http_method {
            HttpMethod::Get => client.get(uri.request_uri()),
            HttpMethod::Post => client.post(uri.request_uri()),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if request.auth_style == AuthStyle::Bearer {
            if let Some(token) = credential {
                req_builder = req_builder.bearer_auth(token);
            }
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder
            .send()
            .await
            .map_err(|e| self.transport_failure(uri.log_uri(), e, credential))?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res
            .text()
            .await
            .map_err(|e| self.transport_failure(uri.log_uri(), e, credential))?;

        if request.accepts(code) {
            tracing::debug!(
                parent: self.reporter.span(),
                method = %request.http_method,
                url = %uri.log_uri(),
                status = code,
                "Video Indexer request completed"
            );
            return Ok(HttpResponse::new(
                code,
                res_headers,
                body,
                uri.log_uri().to_string(),
            ));
        }

        self.reporter.report(
            uri.log_uri(),
            Some(code),
            FailureKind::Http,
            &redact(&body, credential),
        );

        Err(HttpError::Response(HttpResponseError {
            status: code,
            body,
            url: uri.log_uri().to_string(),
        }))
    }

    /// Logs a transport failure and wraps it with the URL stripped.
    fn transport_failure(
        &self,
        log_uri: &str,
        error: reqwest::Error,
        credential: Option<&str>,
    ) -> HttpError {
        let source = error.without_url();
        self.reporter.report(
            log_uri,
            None,
            FailureKind::Transport,
            &redact(&source.to_string(), credential),
        );
        HttpError::Transport(TransportError {
            url: log_uri.to_string(),
            source,
        })
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
