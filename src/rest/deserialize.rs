//! Case-insensitive payload deserialization.
//!
//! The service is not consistent about the casing of JSON field names
//! (`accountId`, `AccountId` and `accountID` all occur). Models declare their
//! canonical camelCase names, and [`from_str`] matches incoming keys against
//! them ignoring ASCII case. String enum values are matched against variant
//! names the same way.
//!
//! Matching works on the field list serde hands to `deserialize_struct`, so
//! models must not use `#[serde(flatten)]`. Unknown keys are ignored, and
//! absent `Option` fields become `None`. If a payload repeats a field in
//! several casings, the exact spelling is used; among other spellings the
//! last one in key order is used.
//!
//! # Example
//!
//! ```rust
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Language {
//!     language_code: String,
//!     is_right_to_left: Option<bool>,
//! }
//!
//! let language: Language =
//!     video_indexer::rest::deserialize::from_str(r#"{"LanguageCode":"he-IL","ISRIGHTTOLEFT":true}"#).unwrap();
//! assert_eq!(language.language_code, "he-IL");
//! assert_eq!(language.is_right_to_left, Some(true));
//! ```

use serde::de::value::{MapDeserializer, SeqDeserializer, StringDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer, Visitor};
use serde::{forward_to_deserialize_any, Deserializer};
use serde_json::{Map, Value};

/// Parses `json` into `T`, matching field names and enum values ignoring case.
///
/// # Errors
///
/// Returns the parser's error if `json` is not valid JSON or does not match
/// the shape of `T`.
pub fn from_str<T: DeserializeOwned>(json: &str) -> Result<T, serde_json::Error> {
    let value: Value = serde_json::from_str(json)?;
    from_value(value)
}

/// Converts an already-parsed JSON value into `T`, ignoring case.
///
/// # Errors
///
/// Returns an error if `value` does not match the shape of `T`.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    T::deserialize(CaseInsensitive(value))
}

/// A `Deserializer` over a JSON value that ignores case when matching names.
#[derive(Debug)]
pub struct CaseInsensitive(Value);

impl CaseInsensitive {
    /// Wraps `value`.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }
}

/// Returns the declared name matching `name`, preferring an exact match.
fn canonical<'a>(name: &'a str, declared: &[&'static str]) -> &'a str {
    let mut folded: Option<&'a str> = None;
    for candidate in declared {
        if *candidate == name {
            return name;
        }
        if folded.is_none() && candidate.eq_ignore_ascii_case(name) {
            folded = Some(*candidate);
        }
    }
    folded.unwrap_or(name)
}

/// Renames keys to their declared spelling.
///
/// When several keys fold to the same field, a key spelled exactly as
/// declared wins. Otherwise the one visited last is kept.
fn remap_keys(
    map: Map<String, Value>,
    fields: &'static [&'static str],
) -> Vec<(String, CaseInsensitive)> {
    let mut entries: Vec<(String, bool, CaseInsensitive)> = Vec::with_capacity(map.len());
    for (key, value) in map {
        let canonical_key = canonical(&key, fields).to_string();
        let exact = canonical_key == key;
        match entries.iter_mut().find(|(seen, _, _)| *seen == canonical_key) {
            Some(entry) => {
                if exact || !entry.1 {
                    *entry = (canonical_key, exact, CaseInsensitive(value));
                }
            }
            None => entries.push((canonical_key, exact, CaseInsensitive(value))),
        }
    }
    entries
        .into_iter()
        .map(|(key, _, value)| (key, value))
        .collect()
}

impl<'de> IntoDeserializer<'de, serde_json::Error> for CaseInsensitive {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

impl<'de> Deserializer<'de> for CaseInsensitive {
    type Error = serde_json::Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(n) => n.deserialize_any(visitor),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(items) => {
                let mut seq: SeqDeserializer<_, serde_json::Error> =
                    SeqDeserializer::new(items.into_iter().map(CaseInsensitive));
                let value = visitor.visit_seq(&mut seq)?;
                seq.end()?;
                Ok(value)
            }
            Value::Object(map) => {
                let mut entries: MapDeserializer<'de, _, serde_json::Error> = MapDeserializer::new(
                    map.into_iter().map(|(key, value)| (key, CaseInsensitive(value))),
                );
                let value = visitor.visit_map(&mut entries)?;
                entries.end()?;
                Ok(value)
            }
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Object(map) => {
                let mut entries: MapDeserializer<'de, _, serde_json::Error> =
                    MapDeserializer::new(remap_keys(map, fields).into_iter());
                let value = visitor.visit_map(&mut entries)?;
                entries.end()?;
                Ok(value)
            }
            other => Self(other).deserialize_any(visitor),
        }
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::String(s) => {
                let variant: StringDeserializer<serde_json::Error> =
                    canonical(&s, variants).to_string().into_deserializer();
                visitor.visit_enum(variant)
            }
            other => other.deserialize_enum(name, variants, visitor),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map identifier
        ignored_any
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    enum State {
        Uploaded,
        Processing,
        Processed,
        Failed,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Item {
        id: String,
        state: Option<State>,
        duration_in_seconds: Option<u32>,
        created: Option<DateTime<Utc>>,
        #[serde(default)]
        tags: Vec<String>,
        owner: Option<Owner>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Owner {
        user_name: String,
    }

    #[test]
    fn test_keys_match_ignoring_case() {
        let item: Item = from_str(
            r#"{"ID":"v1","State":"Processed","DURATIONINSECONDS":42,"Owner":{"USERNAME":"dana"}}"#,
        )
        .unwrap();

        assert_eq!(item.id, "v1");
        assert_eq!(item.state, Some(State::Processed));
        assert_eq!(item.duration_in_seconds, Some(42));
        assert_eq!(item.owner.unwrap().user_name, "dana");
    }

    #[test]
    fn test_enum_values_match_ignoring_case() {
        let item: Item = from_str(r#"{"id":"v1","state":"processing"}"#).unwrap();
        assert_eq!(item.state, Some(State::Processing));
    }

    #[test]
    fn test_unknown_variant_of_closed_enum_fails() {
        let result: Result<Item, _> = from_str(r#"{"id":"v1","state":"Quarantined"}"#);
        assert!(result.unwrap_err().to_string().contains("Quarantined"));
    }

    #[test]
    fn test_repeated_key_in_two_casings_prefers_exact_spelling() {
        let item: Item = from_str(r#"{"Id":"upper","id":"exact","ID":"shout"}"#).unwrap();
        assert_eq!(item.id, "exact");
    }

    #[test]
    fn test_repeated_key_without_exact_spelling_is_not_a_duplicate() {
        let item: Item = from_str(r#"{"Id":"v1","ID":"v1","STATE":"Failed","State":"Failed"}"#)
            .unwrap();
        assert_eq!(item.id, "v1");
        assert_eq!(item.state, Some(State::Failed));
    }

    #[test]
    fn test_absent_optional_fields_are_none() {
        let item: Item = from_str(r#"{"id":"v1"}"#).unwrap();

        assert_eq!(item.state, None);
        assert_eq!(item.duration_in_seconds, None);
        assert_eq!(item.created, None);
        assert!(item.tags.is_empty());
        assert_eq!(item.owner, None);
    }

    #[test]
    fn test_null_optional_fields_are_none() {
        let item: Item = from_str(r#"{"id":"v1","state":null,"owner":null}"#).unwrap();
        assert_eq!(item.state, None);
        assert_eq!(item.owner, None);
    }

    #[test]
    fn test_nested_sequences_are_case_insensitive() {
        let items: Vec<Item> =
            from_str(r#"[{"Id":"a","Tags":["x","y"]},{"iD":"b","CREATED":"2024-05-01T10:00:00Z"}]"#)
                .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].tags, vec!["x", "y"]);
        assert_eq!(
            items[1].created.unwrap().to_rfc3339(),
            "2024-05-01T10:00:00+00:00"
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let item: Item = from_str(r#"{"id":"v1","somethingNew":{"deep":[1,2]}}"#).unwrap();
        assert_eq!(item.id, "v1");
    }

    #[test]
    fn test_missing_required_field_fails() {
        let result: Result<Item, _> = from_str(r#"{"state":"Processed"}"#);
        assert!(result.unwrap_err().to_string().contains("id"));
    }

    #[test]
    fn test_malformed_json_fails() {
        let result: Result<Item, _> = from_str("{not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_type_fails_instead_of_coercing() {
        let result: Result<Item, _> = from_str(r#"{"id":"v1","durationInSeconds":"long"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_plain_values_pass_through() {
        let url: String = from_str(r#""https://media.example/artifact.zip?sv=1""#).unwrap();
        assert_eq!(url, "https://media.example/artifact.zip?sv=1");

        let value: Value = from_str(r#"{"A":[1,{"b":null}]}"#).unwrap();
        assert_eq!(value, serde_json::json!({"A": [1, {"b": null}]}));
    }
}
