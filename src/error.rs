//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! values are rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use video_indexer::{AccountId, ConfigError};
//!
//! let result = AccountId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccountId)));
//! ```

use thiserror::Error;

/// Errors that can occur while building configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Account identifier cannot be empty.
    #[error("Account id cannot be empty. Please provide a valid Video Indexer account id.")]
    EmptyAccountId,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Omit the token instead of passing an empty one.")]
    EmptyAccessToken,

    /// Location segment is invalid.
    #[error("Invalid location '{location}'. Expected a region name such as 'trial' or 'westus2'.")]
    InvalidLocation {
        /// The invalid location that was provided.
        location: String,
    },

    /// Base endpoint URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an absolute http(s) URL (e.g., 'https://api.videoindexer.ai').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
