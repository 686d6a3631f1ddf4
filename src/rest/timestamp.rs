//! Serde support for service timestamps.
//!
//! The service writes instants in several shapes: `2024-05-01T10:00:00Z`,
//! `2018-04-25T16:50:00.967+00:00`, and without any offset at all
//! (`2018-04-25T16:50:00.967`). Timestamps without an offset are UTC.
//!
//! Parsed values are normalized: they serialize back in RFC 3339 form with a
//! `Z` suffix and only as many fractional digits as needed. The instant is
//! preserved, the original spelling is not.
//!
//! # Example
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Event {
//!     #[serde(default, with = "video_indexer::rest::timestamp")]
//!     at: Option<DateTime<Utc>>,
//! }
//!
//! let event: Event = serde_json::from_str(r#"{"at":"2018-04-25T16:50:00.967+00:00"}"#).unwrap();
//! assert_eq!(
//!     serde_json::to_string(&event).unwrap(),
//!     r#"{"at":"2018-04-25T16:50:00.967Z"}"#
//! );
//! ```

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Formats used for timestamps that carry no offset.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a service timestamp, with or without an offset.
///
/// # Errors
///
/// Returns a message naming the value if it matches none of the accepted
/// shapes.
pub fn parse(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| format!("invalid timestamp: {value:?}"))
}

/// Serializes an optional timestamp in normalized RFC 3339 form.
///
/// This function can be used with serde's `with` attribute.
///
/// # Errors
///
/// Returns the serializer's error.
pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(instant) => {
            serializer.serialize_str(&instant.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        }
        None => serializer.serialize_none(),
    }
}

/// Deserializes an optional timestamp in any accepted shape.
///
/// This function can be used with serde's `with` attribute. Pair it with
/// `default` so an absent field becomes `None`.
///
/// # Errors
///
/// Returns an error if the value is not a string or not a timestamp.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|value| parse(&value).map_err(de::Error::custom))
        .transpose()
}
