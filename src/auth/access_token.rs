//! Access tokens and their claims.
//!
//! Video Indexer access tokens are JWTs signed by the service. The client
//! cannot verify the signature (it never holds the signing key), but it can
//! read the claims to learn which account and permission a token grants and
//! when it expires, so a caller can refresh a credential before the service
//! rejects it with `401`.
//!
//! # Redaction
//!
//! [`AccessToken`] masks its value in `Debug` output and does not implement
//! `Display`, so formatting a request or a payload never prints the raw
//! credential.

use std::fmt;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::error::ConfigError;

/// Errors that can occur while reading access-token claims.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token is not a decodable JWT.
    #[error("Access token is malformed: {reason}")]
    Malformed {
        /// Why decoding failed.
        reason: String,
    },
}

/// An opaque access token for the Video Indexer API.
///
/// # Example
///
/// ```rust
/// use video_indexer::AccessToken;
///
/// let token = AccessToken::new("eyJhbGciOi...").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }

    /// Decodes the token's claims without verifying its signature.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Malformed`] if the token is not a JWT or its
    /// payload is not a JSON object.
    pub fn claims(&self) -> Result<AccessTokenClaims, TokenError> {
        let malformed = |e: jsonwebtoken::errors::Error| TokenError::Malformed {
            reason: e.to_string(),
        };

        let header = decode_header(&self.0).map_err(malformed)?;
        let mut validation = Validation::new(header.alg);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let key = DecodingKey::from_secret(&[]);
        let data = decode::<AccessTokenClaims>(&self.0, &key, &validation).map_err(malformed)?;
        Ok(data.claims)
    }

    /// Returns `true` if the token's `exp` claim is in the past.
    ///
    /// Tokens that cannot be decoded or carry no `exp` claim are reported as
    /// not expired; the service remains the authority.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.claims()
            .map(|claims| claims.is_expired_at(Utc::now()))
            .unwrap_or(false)
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

impl Serialize for AccessToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccessToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// Claims carried by a Video Indexer access token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessTokenClaims {
    /// The account the token was issued for.
    #[serde(rename = "AccountId")]
    pub account_id: Option<String>,

    /// The granted permission (e.g., `Reader`, `Contributor`).
    #[serde(rename = "Permission")]
    pub permission: Option<String>,

    /// The account type (e.g., `Trial`, `Paid`).
    #[serde(rename = "AccountType")]
    pub account_type: Option<String>,

    /// The location of the issuing service.
    #[serde(rename = "IssuerLocation")]
    pub issuer_location: Option<String>,

    /// Expiration timestamp (Unix seconds).
    pub exp: Option<i64>,

    /// Not-before timestamp (Unix seconds).
    pub nbf: Option<i64>,
}

impl AccessTokenClaims {
    /// Returns the expiry as a UTC timestamp.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Returns `true` if the token has expired at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expires| expires <= now)
    }
}

// Verify token types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AccessToken>();
    assert_send_sync::<AccessTokenClaims>();
};
