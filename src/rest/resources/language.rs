//! Supported languages resource.
//!
//! GET `/{location}/SupportedLanguages` lists the languages the service can
//! index and translate in a region. The resource is location-scoped; no
//! account id is needed.

use serde::{Deserialize, Serialize};

use crate::clients::{AuthStyle, HttpMethod};
use crate::rest::{EndpointScope, Resource, ResourcePath};

/// A language supported for indexing or translation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupportedLanguage {
    /// The display name (e.g., "English").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The BCP-47 language code (e.g., "en-US").
    pub language_code: String,

    /// Whether the language is written right to left.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_right_to_left: Option<bool>,

    /// Whether the language can be the source language of a video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_source_language: Option<bool>,

    /// Whether the language participates in auto-detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_detect: Option<bool>,
}

/// The languages supported in a location.
pub struct SupportedLanguages;

impl Resource for SupportedLanguages {
    type Payload = Vec<SupportedLanguage>;
    type Params = ();
    type Body = ();

    const NAME: &'static str = "SupportedLanguages";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        EndpointScope::Location,
        AuthStyle::Query,
        &[],
        "SupportedLanguages",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_languages_path() {
        assert_eq!(SupportedLanguages::PATH.scope, EndpointScope::Location);
        assert_eq!(SupportedLanguages::PATH.auth, AuthStyle::Query);
        assert_eq!(SupportedLanguages::PATH.template, "SupportedLanguages");
    }

    #[test]
    fn test_supported_languages_parse() {
        let languages = SupportedLanguages::parse_json(
            r#"[
                {"Name":"English","LanguageCode":"en-US","IsRightToLeft":false,"IsSourceLanguage":true,"IsAutoDetect":true},
                {"name":"Hebrew","languageCode":"he-IL","isRightToLeft":true}
            ]"#,
        )
        .unwrap();

        assert_eq!(languages.len(), 2);
        assert_eq!(languages[0].language_code, "en-US");
        assert_eq!(languages[0].is_source_language, Some(true));
        assert_eq!(languages[1].is_right_to_left, Some(true));
        assert_eq!(languages[1].is_auto_detect, None);
    }

    #[test]
    fn test_supported_language_requires_code() {
        assert!(SupportedLanguages::parse_json(r#"[{"name":"English"}]"#).is_err());
    }
}
