//! Download URL resources.
//!
//! Both resources return a short-lived, pre-signed download URL as a bare
//! JSON string rather than an object.
//!
//! - [`ArtifactUrl`]: GET `.../Videos/{id}/ArtifactUrl?type=...`
//! - [`SourceFileDownloadUrl`]: GET `.../Videos/{id}/SourceFile/DownloadUrl`

use serde::{Deserialize, Serialize};

use crate::clients::{AuthStyle, HttpMethod};
use crate::rest::{EndpointScope, Resource, ResourcePath};

/// Kinds of processing artifacts that can be downloaded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ArtifactType {
    Ocr,
    Faces,
    FaceThumbnails,
    KeyframesThumbnails,
    Labels,
    ObjectDetection,
}

/// Parameters for [`ArtifactUrl`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtifactParams {
    /// Which artifact to download.
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,
}

/// The download URL of a processing artifact.
pub struct ArtifactUrl;

impl Resource for ArtifactUrl {
    type Payload = String;
    type Params = ArtifactParams;
    type Body = ();

    const NAME: &'static str = "ArtifactUrl";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        EndpointScope::Account,
        AuthStyle::Query,
        &["id"],
        "Videos/{id}/ArtifactUrl",
    );
}

/// The download URL of a video's source file.
pub struct SourceFileDownloadUrl;

impl Resource for SourceFileDownloadUrl {
    type Payload = String;
    type Params = ();
    type Body = ();

    const NAME: &'static str = "SourceFileDownloadUrl";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        EndpointScope::Account,
        AuthStyle::Query,
        &["id"],
        "Videos/{id}/SourceFile/DownloadUrl",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpClient;
    use crate::config::{AccountId, BaseUrl, IndexerConfig, Location};
    use crate::rest::ResourceRequest;

    fn client() -> HttpClient {
        HttpClient::new(
            &IndexerConfig::builder()
                .base_url(BaseUrl::new("https://vi.example").unwrap())
                .build(),
        )
    }

    #[test]
    fn test_artifact_url_sends_type() {
        let request = ResourceRequest::builder(Location::trial())
            .account(AccountId::new("abc123").unwrap())
            .resource_id("v1")
            .params(ArtifactParams {
                artifact_type: ArtifactType::KeyframesThumbnails,
            })
            .build();

        assert_eq!(
            ArtifactUrl::build_url(&client(), &request).unwrap(),
            "https://vi.example/trial/Accounts/abc123/Videos/v1/ArtifactUrl?type=KeyframesThumbnails"
        );
    }

    #[test]
    fn test_source_file_url() {
        let request = ResourceRequest::builder(Location::trial())
            .account(AccountId::new("abc123").unwrap())
            .resource_id("v1")
            .build();

        assert_eq!(
            SourceFileDownloadUrl::build_url(&client(), &request).unwrap(),
            "https://vi.example/trial/Accounts/abc123/Videos/v1/SourceFile/DownloadUrl"
        );
    }

    #[test]
    fn test_download_url_payload_is_bare_string() {
        let url = SourceFileDownloadUrl::parse_json(r#""https://media.example/v1.mp4?sig=abc""#)
            .unwrap();
        assert_eq!(url, "https://media.example/v1.mp4?sig=abc");

        assert!(ArtifactUrl::parse_json(r#"{"url":"x"}"#).is_err());
    }
}
