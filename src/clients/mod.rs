//! HTTP client types for Video Indexer API communication.
//!
//! This module provides the HTTP layer that every resource accessor goes
//! through. It builds credential-safe URIs, obtains a transport, performs the
//! exchange and reports failures.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`SecureUri`]: A request URI paired with its redacted log form
//! - [`TransportProvider`]: Shared or per-call `reqwest::Client` supply
//! - [`FailureReporter`]: Logs each failed call once under an explicit span
//! - [`HttpError`]: Transport, response, and validation failures
//!
//! # Example
//!
//! ```rust,ignore
//! use video_indexer::{AccessToken, IndexerConfig};
//! use video_indexer::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::with_transport(&IndexerConfig::default(), reqwest::Client::new());
//!
//! let request = HttpRequest::builder(HttpMethod::Get, client.url_for("trial/SupportedLanguages"))
//!     .access_token(Some(AccessToken::new("token")?))
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Failure Behavior
//!
//! Nothing in this layer retries:
//!
//! - **Transport failures** (connect, DNS, timeout): logged, returned as [`HttpError::Transport`]
//! - **Non-2xx statuses**: logged with a body snippet, returned as [`HttpError::Response`] with the full body
//! - **Invalid requests**: returned as [`HttpError::InvalidRequest`] before anything is sent

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod report;
mod transport;
mod uri;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError, TransportError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{AuthStyle, DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use report::{snippet, FailureKind, FailureReporter, BODY_SNIPPET_LIMIT};
pub use transport::TransportProvider;
pub use uri::{redact, SecureUri, ACCESS_TOKEN_PARAM, MASK};
