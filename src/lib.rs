//! # Video Indexer Rust Client
//!
//! A typed async client for the Video Indexer media-intelligence REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`IndexerConfig`] and [`IndexerConfigBuilder`]
//! - Validated newtypes for locations, account ids and access tokens
//! - One uniform pipeline for every endpoint: URL building, transport,
//!   case-insensitive deserialization and failure reporting
//! - A catalogue of typed resources in [`rest::resources`]
//! - Credential-safe logging through [`tracing`]: access tokens never appear
//!   in log output
//!
//! ## Quick Start
//!
//! ```rust
//! use video_indexer::{AccessToken, AccountId, IndexerConfig, Location};
//!
//! let config = IndexerConfig::builder().build();
//! let location = Location::trial();
//! let account = AccountId::new("abc123").unwrap();
//! let token = AccessToken::new("eyJ0eXAiOiJKV1Qi...").unwrap();
//!
//! // Debug output never contains the credential
//! assert_eq!(format!("{token:?}"), "AccessToken(*****)");
//! # let _ = (config, location, account);
//! ```
//!
//! ## Fetching Resources
//!
//! ```rust,ignore
//! use video_indexer::{AccessToken, AccountId, HttpClient, IndexerConfig, Location};
//! use video_indexer::rest::{Resource, ResourceRequest};
//! use video_indexer::rest::resources::{VideoSearch, VideoSearchParams, VideoState};
//!
//! let client = HttpClient::new(&IndexerConfig::default());
//!
//! let request = ResourceRequest::builder(Location::trial())
//!     .account(AccountId::new("abc123")?)
//!     .access_token(AccessToken::new(token)?)
//!     .params(VideoSearchParams {
//!         state: vec![VideoState::Processed],
//!         ..Default::default()
//!     })
//!     .build();
//!
//! let page = VideoSearch::get(&client, &request).await?;
//! ```
//!
//! ## Sharing a Transport
//!
//! By default each call builds its own short-lived transport. To pool
//! connections across calls, inject a `reqwest::Client`:
//!
//! ```rust,ignore
//! let client = HttpClient::with_transport(&config, reqwest::Client::new());
//! ```
//!
//! ## Errors
//!
//! Every resource operation returns [`rest::ResourceError`]. Its
//! [`kind`](rest::ResourceError::kind) is one of the three
//! [`FailureKind`](clients::FailureKind)s: transport, HTTP, or
//! deserialization. Each failure is logged exactly once with the redacted URL.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Secrets stay secret**: Credentials are masked in `Debug`, logs and errors

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AccessToken, AccessTokenClaims, TokenError};
pub use config::{
    AccountId, BaseUrl, IndexerConfig, IndexerConfigBuilder, Location, DEFAULT_BASE_URL,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    AuthStyle, DataType, FailureKind, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError, TransportError,
};

// Re-export resource access types
pub use rest::{OptionalResource, Resource, ResourceError, ResourceRequest};
