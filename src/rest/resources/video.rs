//! Video resources.
//!
//! - [`VideoIndex`]: GET `.../Videos/{id}/Index`, the full insights of one video
//! - [`VideoList`]: GET `.../Videos`, a page of videos in the account
//! - [`VideoSearch`]: GET `.../Videos/Search`, a filtered page of videos
//!
//! List and search return a [`Page`] of [`VideoSummary`]. Search filters
//! that take several values are sent as repeated query parameters.
//!
//! # Example
//!
//! ```rust,ignore
//! use video_indexer::rest::Resource;
//! use video_indexer::rest::resources::{VideoSearch, VideoSearchParams, VideoState};
//!
//! let request = ResourceRequest::builder(Location::trial())
//!     .account(AccountId::new("abc123")?)
//!     .access_token(token)
//!     .params(VideoSearchParams {
//!         state: vec![VideoState::Processed, VideoState::Failed],
//!         page_size: Some(50),
//!         ..Default::default()
//!     })
//!     .build();
//!
//! let page = VideoSearch::get(&client, &request).await?;
//! for video in &page {
//!     println!("{} {:?}", video.id, video.state);
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Page;
use crate::clients::{AuthStyle, HttpMethod};
use crate::rest::{EndpointScope, Resource, ResourcePath};

service_enum! {
    /// Processing state of a video.
    pub enum VideoState {
        /// Uploaded, not yet processing.
        Uploaded,
        /// Being indexed.
        Processing,
        /// Indexing finished.
        Processed,
        /// Indexing failed.
        Failed,
        /// Held back by content moderation.
        Quarantined,
    }
}

service_enum! {
    /// Visibility of a video.
    pub enum PrivacyMode {
        /// Visible to account members only.
        Private,
        /// Visible to anyone with the link.
        Public,
    }
}

/// A video as it appears in lists and search results.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    /// The video id.
    pub id: String,

    /// The owning account id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// The partition the video was uploaded to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,

    /// The caller-supplied external id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Caller-supplied metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,

    /// The video name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The video description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the video was uploaded.
    #[serde(
        default,
        with = "crate::rest::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,

    /// When the video was last modified.
    #[serde(
        default,
        with = "crate::rest::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_modified: Option<DateTime<Utc>>,

    /// When the video was last indexed.
    #[serde(
        default,
        with = "crate::rest::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_indexed: Option<DateTime<Utc>>,

    /// The privacy mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_mode: Option<PrivacyMode>,

    /// The name of the uploading user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// Whether the caller owns the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owned: Option<bool>,

    /// Whether this is a base (non-project) video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_base: Option<bool>,

    /// Whether the source file is still stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_source_video_file: Option<bool>,

    /// The processing state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<VideoState>,

    /// Processing progress (e.g., "42%").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_progress: Option<String>,

    /// The duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_seconds: Option<u64>,

    /// The id of the video holding the thumbnail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_video_id: Option<String>,

    /// The thumbnail id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_id: Option<String>,

    /// The source language of the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,

    /// The indexing preset used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexing_preset: Option<String>,
}

/// The full index of a video: metadata plus per-video insights.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoIndex {
    /// The video id.
    pub id: String,

    /// The owning account id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// The partition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition: Option<String>,

    /// The video name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The video description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The name of the uploading user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// When the video was uploaded.
    #[serde(
        default,
        with = "crate::rest::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<DateTime<Utc>>,

    /// The privacy mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_mode: Option<PrivacyMode>,

    /// The processing state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<VideoState>,

    /// Whether the caller owns the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owned: Option<bool>,

    /// Whether the caller may edit the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_editable: Option<bool>,

    /// Whether this is a base (non-project) video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_base: Option<bool>,

    /// The duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_seconds: Option<u64>,

    /// Aggregated insights across all videos of the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summarized_insights: Option<serde_json::Value>,

    /// The per-video breakdown.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<VideoDetails>,
}

/// Processing details and insights of one video in an index.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    /// The video id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The processing state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<VideoState>,

    /// Processing progress (e.g., "100%").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_progress: Option<String>,

    /// Failure code, when `state` is `Failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_code: Option<String>,

    /// Failure message, when `state` is `Failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,

    /// The language the insights are in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// The source language of the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,

    /// The thumbnail id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_id: Option<String>,

    /// The frame width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// The frame height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// The indexing preset used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexing_preset: Option<String>,

    /// The raw insights document (transcript, faces, labels, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<serde_json::Value>,
}

impl VideoIndex {
    /// Returns `true` once indexing has finished, successfully or not.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, Some(VideoState::Processed | VideoState::Failed))
    }
}

impl Resource for VideoIndex {
    type Payload = Self;
    type Params = VideoIndexParams;
    type Body = ();

    const NAME: &'static str = "VideoIndex";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        EndpointScope::Account,
        AuthStyle::Query,
        &["id"],
        "Videos/{id}/Index",
    );
}

/// Parameters for fetching a video index.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoIndexParams {
    /// Translate the insights into this language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Force re-translation instead of using a cached translation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub re_translate: Option<bool>,

    /// Include streaming URLs in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_streaming_urls: Option<bool>,

    /// Include summarized insights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_summarized_insights: Option<bool>,
}

/// A page of the videos in an account.
pub struct VideoList;

impl Resource for VideoList {
    type Payload = Page<VideoSummary>;
    type Params = VideoListParams;
    type Body = ();

    const NAME: &'static str = "VideoList";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        EndpointScope::Account,
        AuthStyle::Query,
        &[],
        "Videos",
    );
}

/// Parameters for listing videos.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoListParams {
    /// Only videos uploaded after this instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime<Utc>>,

    /// Only videos uploaded before this instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateTime<Utc>>,

    /// Maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Only videos in these partitions (repeated parameter).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub partitions: Vec<String>,

    /// Number of results to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

/// A filtered page of the videos in an account.
pub struct VideoSearch;

impl Resource for VideoSearch {
    type Payload = Page<VideoSummary>;
    type Params = VideoSearchParams;
    type Body = ();

    const NAME: &'static str = "VideoSearch";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        EndpointScope::Account,
        AuthStyle::Query,
        &[],
        "Videos/Search",
    );
}

/// Parameters for searching videos.
///
/// Every `Vec` field is sent as a repeated parameter and omitted when empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoSearchParams {
    /// Only these video ids.
    #[serde(rename = "id", skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,

    /// Insights language to search in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Only videos owned by these users.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owner: Vec<String>,

    /// Maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Only videos in these partitions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub partition: Vec<String>,

    /// Only videos with these privacy modes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub privacy: Vec<PrivacyMode>,

    /// Free-text query over names and insights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Number of results to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,

    /// Only videos with this source language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,

    /// Only videos in these states.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub state: Vec<VideoState>,
}
