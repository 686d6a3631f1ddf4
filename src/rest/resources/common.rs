//! Common types shared by several resources.
//!
//! List endpoints wrap their results in a [`Page`] envelope with a
//! [`Paging`] cursor. These types are not resources themselves; they appear
//! as the `Payload` of list resources such as
//! [`VideoList`](super::VideoList) and [`ProjectMigrations`](super::ProjectMigrations).
//!
//! Status values reported by the service are declared with `service_enum!`.
//! The service adds states over time, so these enums keep any value they do
//! not know in an `Other` variant and write it back unchanged.

use serde::{Deserialize, Serialize};

/// Declares a string enum of service-reported values.
///
/// Known names match ignoring ASCII case and serialize in their declared
/// spelling. Any other string is kept verbatim in `Other`.
macro_rules! service_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this client does not know, as the service sent it.
            Other(String),
        }

        impl $name {
            /// Returns the value as it is sent over the wire.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                    Self::Other(value) => value.as_str(),
                }
            }

            /// Resolves `value` to a known variant ignoring ASCII case, or
            /// keeps it in `Other`.
            #[must_use]
            pub fn from_name(value: &str) -> Self {
                $(
                    if value.eq_ignore_ascii_case(stringify!($variant)) {
                        return Self::$variant;
                    }
                )+
                Self::Other(value.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_name(&value))
            }
        }
    };
}

/// Paging information returned with a list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    /// The total number of items across all pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,

    /// The page size used for this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// The number of items skipped before this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,

    /// Whether this is the last page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

/// One page of a list response.
///
/// # Example
///
/// ```rust
/// use video_indexer::rest::resources::{Page, VideoSummary};
///
/// let page: Page<VideoSummary> = video_indexer::rest::deserialize::from_str(
///     r#"{"results":[{"id":"v1"}],"nextPage":{"pageSize":1,"skip":1,"done":false}}"#,
/// ).unwrap();
///
/// assert_eq!(page.len(), 1);
/// assert!(page.has_next_page());
/// assert_eq!(page.next_skip(), Some(2));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,

    /// Paging information for fetching the following page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<Paging>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            next_page: None,
        }
    }
}

impl<T> Page<T> {
    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns an iterator over the items on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.results.iter()
    }

    /// Returns `true` if the service reports more pages.
    ///
    /// A missing `done` flag is treated as "no more pages".
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_page
            .as_ref()
            .and_then(|paging| paging.done)
            .is_some_and(|done| !done)
    }

    /// Returns the `skip` value that fetches the following page.
    #[must_use]
    pub fn next_skip(&self) -> Option<u32> {
        if !self.has_next_page() {
            return None;
        }
        let paging = self.next_page.as_ref()?;
        let page_size = paging.page_size.unwrap_or_else(|| {
            u32::try_from(self.results.len()).unwrap_or(u32::MAX)
        });
        Some(paging.skip.unwrap_or(0).saturating_add(page_size))
    }

    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.results
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::deserialize::from_str;

    #[test]
    fn test_page_deserializes_with_any_key_case() {
        let page: Page<String> =
            from_str(r#"{"Results":["a","b"],"NextPage":{"TotalCount":5,"PageSize":2,"Skip":0,"Done":false}}"#)
                .unwrap();

        assert_eq!(page.results, vec!["a", "b"]);
        let paging = page.next_page.as_ref().unwrap();
        assert_eq!(paging.total_count, Some(5));
        assert!(page.has_next_page());
        assert_eq!(page.next_skip(), Some(2));
    }

    #[test]
    fn test_last_page_has_no_next_skip() {
        let page: Page<String> =
            from_str(r#"{"results":["a"],"nextPage":{"pageSize":2,"skip":4,"done":true}}"#).unwrap();

        assert!(!page.has_next_page());
        assert_eq!(page.next_skip(), None);
    }

    #[test]
    fn test_missing_results_is_empty_page() {
        let page: Page<String> = from_str("{}").unwrap();
        assert!(page.is_empty());
        assert!(!page.has_next_page());
    }

    service_enum! {
        pub enum Shade {
            Light,
            Dark,
        }
    }

    #[test]
    fn test_service_enum_matches_known_names_ignoring_case() {
        let shades: Vec<Shade> = from_str(r#"["light","DARK","Dark"]"#).unwrap();
        assert_eq!(shades, vec![Shade::Light, Shade::Dark, Shade::Dark]);
        assert_eq!(serde_json::to_string(&shades).unwrap(), r#"["Light","Dark","Dark"]"#);
    }

    #[test]
    fn test_service_enum_keeps_unknown_values_verbatim() {
        let shade: Shade = from_str(r#""Translucent""#).unwrap();

        assert_eq!(shade, Shade::Other("Translucent".to_string()));
        assert_eq!(shade.to_string(), "Translucent");
        assert_eq!(serde_json::to_string(&shade).unwrap(), r#""Translucent""#);
    }

    #[test]
    fn test_service_enum_rejects_non_strings() {
        let result: Result<Shade, _> = from_str("3");
        assert!(result.is_err());
    }

    #[test]
    fn test_page_iteration() {
        let page = Page {
            results: vec![1, 2, 3],
            next_page: None,
        };

        assert_eq!(page.iter().sum::<i32>(), 6);
        assert_eq!((&page).into_iter().count(), 3);
        assert_eq!(page.into_inner(), vec![1, 2, 3]);
    }
}
