//! Authentication types for the Video Indexer client.
//!
//! - [`AccessToken`]: the credential passed with each request, masked in debug output
//! - [`AccessTokenClaims`]: the unverified claims carried by an access token
//! - [`TokenError`]: failure to read a token's claims
//!
//! Obtaining tokens is the caller's concern. The client only carries them,
//! either as an `accessToken` query parameter or as a bearer header depending
//! on the resource family.

mod access_token;

pub use access_token::{AccessToken, AccessTokenClaims, TokenError};
