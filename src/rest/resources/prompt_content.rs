//! Prompt content resources.
//!
//! Prompt content is a text rendition of a video's insights, split into
//! sections sized for language-model prompts.
//!
//! - [`PromptContent`]: GET `.../Videos/{id}/PromptContent`; 404 until generated
//! - [`CreatePromptContent`]: POST `.../Videos/{id}/PromptContent`; starts generation and returns a [`Job`]
//!
//! Since the service answers 404 for content that was never generated,
//! [`PromptContent`] implements [`OptionalResource`].

use serde::{Deserialize, Serialize};

use super::job::Job;
use crate::clients::{AuthStyle, HttpMethod};
use crate::rest::{EndpointScope, OptionalResource, Resource, ResourcePath};

/// The generated prompt content of a video.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PromptContent {
    /// The partition of the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,

    /// The video name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The content, in playback order.
    #[serde(default)]
    pub sections: Vec<PromptSection>,
}

/// One section of prompt content.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PromptSection {
    pub id: u32,

    /// Section start, as an `hh:mm:ss.fffffff` offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// Section end, as an `hh:mm:ss.fffffff` offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    pub content: String,
}

impl PromptContent {
    /// Joins every section's content with blank lines.
    #[must_use]
    pub fn full_text(&self) -> String {
        self.sections
            .iter()
            .map(|section| section.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Resource for PromptContent {
    type Payload = Self;
    type Params = ();
    type Body = ();

    const NAME: &'static str = "PromptContent";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        EndpointScope::Account,
        AuthStyle::Query,
        &["id"],
        "Videos/{id}/PromptContent",
    );
}

impl OptionalResource for PromptContent {}

/// Level of detail of generated prompt content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub enum PromptStyle {
    /// Every insight.
    #[default]
    Full,
    /// A condensed rendition.
    Summarized,
}

/// The body of a prompt content generation request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PromptContentRequest {
    /// The language model the sections are sized for (e.g., "Gpt4").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,

    /// The level of detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_style: Option<PromptStyle>,
}

/// Starts prompt content generation for a video.
pub struct CreatePromptContent;

impl Resource for CreatePromptContent {
    type Payload = Job;
    type Params = ();
    type Body = PromptContentRequest;

    const NAME: &'static str = "CreatePromptContent";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Post,
        EndpointScope::Account,
        AuthStyle::Query,
        &["id"],
        "Videos/{id}/PromptContent",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_content_parse() {
        let content = PromptContent::parse_json(
            r#"{
                "Partition": "news",
                "Name": "Keynote",
                "Sections": [
                    {"Id": 0, "Start": "0:00:00", "End": "0:00:40.2", "Content": "[Transcript] Hello"},
                    {"id": 1, "content": "[Labels] stage"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(content.sections.len(), 2);
        assert_eq!(content.sections[0].end.as_deref(), Some("0:00:40.2"));
        assert_eq!(content.full_text(), "[Transcript] Hello\n\n[Labels] stage");
    }

    #[test]
    fn test_section_requires_content() {
        assert!(PromptContent::parse_json(r#"{"sections":[{"id":0}]}"#).is_err());
    }

    #[test]
    fn test_get_and_create_share_template() {
        assert_eq!(PromptContent::PATH.template, CreatePromptContent::PATH.template);
        assert_eq!(PromptContent::PATH.http_method, HttpMethod::Get);
        assert_eq!(CreatePromptContent::PATH.http_method, HttpMethod::Post);
    }

    #[test]
    fn test_prompt_content_request_serialization() {
        let body = PromptContentRequest {
            model_name: Some("Gpt4".to_string()),
            prompt_style: Some(PromptStyle::Summarized),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"modelName": "Gpt4", "promptStyle": "Summarized"})
        );
        assert_eq!(
            serde_json::to_value(PromptContentRequest::default()).unwrap(),
            json!({})
        );
    }
}
