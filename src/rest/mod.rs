//! Typed access to Video Indexer resources.
//!
//! This module provides the resource pipeline:
//!
//! - **[`Resource`] trait**: `build_url`, `fetch_json`, `parse_json` and `get`
//!   for every endpoint, driven by associated constants
//! - **[`OptionalResource`]**: `get_optional` for endpoints that answer 404 for
//!   absent items
//! - **[`ResourceRequest`]**: the per-call inputs (location, account, ids,
//!   credential, parameters, body)
//! - **Path building**: [`ResourcePath`] templates and [`endpoint_url`]
//! - **Query encoding**: [`serialize_to_query`] and [`append_query`]
//! - **[`deserialize`]**: case-insensitive payload deserialization
//! - **[`timestamp`]**: parsing of the service's timestamp shapes
//! - **[`ResourceError`]**: the error type of every resource operation
//!
//! Individual resources live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use video_indexer::{AccessToken, AccountId, HttpClient, IndexerConfig, Location};
//! use video_indexer::rest::{Resource, ResourceRequest};
//! use video_indexer::rest::resources::{VideoIndex, VideoIndexParams};
//!
//! let client = HttpClient::new(&IndexerConfig::default());
//!
//! let request = ResourceRequest::builder(Location::trial())
//!     .account(AccountId::new("abc123")?)
//!     .resource_id("e7a2b1")
//!     .access_token(AccessToken::new(token)?)
//!     .params(VideoIndexParams { language: Some("en-US".into()), ..Default::default() })
//!     .build();
//!
//! // All at once
//! let index = VideoIndex::get(&client, &request).await?;
//!
//! // Or stage by stage
//! let body = VideoIndex::fetch_json(&client, &request).await?;
//! let index = VideoIndex::parse_json(&body)?;
//! ```

pub mod deserialize;
mod errors;
mod path;
mod query;
mod request;
mod resource;
pub mod timestamp;

pub mod resources;

// Public exports
pub use errors::ResourceError;
pub use path::{build_path, endpoint_url, EndpointScope, ResourcePath};
pub use query::{append_query, serialize_to_query};
pub use request::{ResourceRequest, ResourceRequestBuilder};
pub use resource::{OptionalResource, Resource};
