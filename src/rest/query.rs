//! Query string encoding for resource parameters.
//!
//! Parameter structs are serialized through `serde_json::Value`, so the
//! ordinary `#[serde(rename)]` and `skip_serializing_if` attributes decide
//! the wire names. Unset (`null`) and empty values are left out entirely.
//! Arrays become repeated `key=value` pairs (`state=Processed&state=Failed`),
//! which is how the service expects multi-valued filters.

use serde::Serialize;
use serde_json::Value;

use crate::rest::ResourceError;

/// Serializes a params struct into ordered query pairs.
///
/// Keys come out in the key order of the serialized map.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidRequest`] if `params` cannot be serialized.
///
/// # Example
///
/// ```rust
/// use video_indexer::rest::serialize_to_query;
/// use serde_json::json;
///
/// let pairs = serialize_to_query("VideoSearch", &json!({
///     "pageSize": 10,
///     "state": ["Processed", "Failed"],
///     "query": null,
/// })).unwrap();
///
/// assert_eq!(pairs, vec![
///     ("pageSize".to_string(), "10".to_string()),
///     ("state".to_string(), "Processed".to_string()),
///     ("state".to_string(), "Failed".to_string()),
/// ]);
/// ```
pub fn serialize_to_query<T: Serialize + ?Sized>(
    resource: &'static str,
    params: &T,
) -> Result<Vec<(String, String)>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::InvalidRequest {
        resource,
        reason: format!("Failed to serialize params: {e}"),
    })?;

    let mut query = Vec::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Array(arr) => {
                    for item in arr {
                        if let Some(s) = scalar_to_string(item) {
                            query.push((key.clone(), s));
                        }
                    }
                }
                other => {
                    if let Some(s) = scalar_to_string(other) {
                        query.push((key, s));
                    }
                }
            }
        }
    }

    Ok(query)
}

/// Appends encoded query pairs to `url`.
///
/// Leaves `url` untouched when there are no pairs, so a URL never ends with
/// a bare `?`.
///
/// # Example
///
/// ```rust
/// use video_indexer::rest::append_query;
///
/// let pairs = vec![("query".to_string(), "cats & dogs".to_string())];
/// assert_eq!(
///     append_query("https://host/trial/Accounts/a/Videos/Search".to_string(), &pairs),
///     "https://host/trial/Accounts/a/Videos/Search?query=cats%20%26%20dogs"
/// );
/// assert_eq!(append_query("https://host/x".to_string(), &[]), "https://host/x");
/// ```
#[must_use]
pub fn append_query(mut url: String, pairs: &[(String, String)]) -> String {
    let mut separator = if url.contains('?') { '&' } else { '?' };
    for (key, value) in pairs {
        url.push(separator);
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
        separator = '&';
    }
    url
}

/// Converts a JSON value to its query form; `None` means "omit".
fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    struct SearchParams {
        #[serde(skip_serializing_if = "Option::is_none")]
        page_size: Option<u32>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        state: Vec<String>,
        query: Option<String>,
        include_streaming_urls: Option<bool>,
    }

    #[test]
    fn test_serialize_to_query_handles_basic_types() {
        let params = SearchParams {
            page_size: Some(25),
            query: Some("sunset".to_string()),
            include_streaming_urls: Some(true),
            ..Default::default()
        };

        let query = serialize_to_query("VideoSearch", &params).unwrap();

        assert!(query.contains(&("pageSize".to_string(), "25".to_string())));
        assert!(query.contains(&("query".to_string(), "sunset".to_string())));
        assert!(query.contains(&("includeStreamingUrls".to_string(), "true".to_string())));
        assert_eq!(query.len(), 3);
    }

    #[test]
    fn test_serialize_to_query_skips_null_and_empty() {
        let params = SearchParams {
            query: Some(String::new()),
            ..Default::default()
        };

        let query = serialize_to_query("VideoSearch", &params).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_serialize_to_query_repeats_array_values() {
        let params = SearchParams {
            state: vec!["Processed".to_string(), "Failed".to_string()],
            ..Default::default()
        };

        let query = serialize_to_query("VideoSearch", &params).unwrap();
        assert_eq!(
            query,
            vec![
                ("state".to_string(), "Processed".to_string()),
                ("state".to_string(), "Failed".to_string()),
            ]
        );
    }

    #[test]
    fn test_serialize_unit_params_is_empty() {
        let query = serialize_to_query("Account", &()).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_append_query_encodes_and_joins() {
        let pairs = vec![
            ("state".to_string(), "Processed".to_string()),
            ("state".to_string(), "Failed".to_string()),
            ("query".to_string(), "a=b&c".to_string()),
        ];

        let url = append_query("https://host/path".to_string(), &pairs);
        assert_eq!(
            url,
            "https://host/path?state=Processed&state=Failed&query=a%3Db%26c"
        );
    }

    #[test]
    fn test_append_query_respects_existing_query() {
        let pairs = vec![("skip".to_string(), "10".to_string())];
        let url = append_query("https://host/path?pageSize=5".to_string(), &pairs);
        assert_eq!(url, "https://host/path?pageSize=5&skip=10");
    }
}
