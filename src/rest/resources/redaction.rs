//! Face redaction.
//!
//! POST `.../Videos/{id}/redact` starts a redaction job that produces a copy
//! of the video with faces blurred. The response is the created [`Job`];
//! poll it with [`Job::get`](crate::rest::Resource::get).
//!
//! # Example
//!
//! ```rust,ignore
//! use video_indexer::rest::Resource;
//! use video_indexer::rest::resources::{BlurringKind, FaceRedaction, Redact, RedactionRequest};
//!
//! let request = ResourceRequest::builder(Location::trial())
//!     .account(account_id)
//!     .resource_id("e7a2b1")
//!     .access_token(token)
//!     .body(RedactionRequest {
//!         faces: Some(FaceRedaction {
//!             blurring_kind: BlurringKind::HighBlur,
//!             filter: None,
//!         }),
//!     })
//!     .build();
//!
//! let job = Redact::get(&client, &request).await?;
//! ```

use serde::{Deserialize, Serialize};

use super::job::Job;
use crate::clients::{AuthStyle, HttpMethod};
use crate::rest::{EndpointScope, Resource, ResourcePath};

/// How redacted faces are rendered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub enum BlurringKind {
    #[default]
    MediumBlur,
    HighBlur,
    LowBlur,
    BoundingBox,
    Black,
}

/// Which set of face ids a [`FaceFilter`] refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
pub enum FilterScope {
    /// Faces recognized as known people.
    #[default]
    Classified,
    /// Faces that were detected but not recognized.
    Unknown,
}

/// Restricts redaction to specific faces.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FaceFilter {
    /// Face ids from the video index.
    pub ids: Vec<i64>,

    /// Which face list the ids come from.
    pub scope: FilterScope,
}

/// Face redaction settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FaceRedaction {
    /// How faces are blurred.
    pub blurring_kind: BlurringKind,

    /// Only these faces; all faces when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FaceFilter>,
}

/// The body of a redaction request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RedactionRequest {
    /// Face redaction settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faces: Option<FaceRedaction>,
}

/// Starts a redaction job for a video.
pub struct Redact;

impl Resource for Redact {
    type Payload = Job;
    type Params = ();
    type Body = RedactionRequest;

    const NAME: &'static str = "Redact";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Post,
        EndpointScope::Account,
        AuthStyle::Bearer,
        &["id"],
        "Videos/{id}/redact",
    );
}
