//! Video Indexer resource catalogue.
//!
//! Every type here that implements [`Resource`](crate::rest::Resource) is one
//! endpoint. Models whose endpoint returns the model itself (such as
//! [`VideoIndex`] or [`Job`]) implement the trait directly; list and action
//! endpoints use a unit marker type (such as [`VideoSearch`] or [`Redact`])
//! whose `Payload` is the model, a `Vec`, a [`Page`], or a `String`.
//!
//! | Resource | Method | Path (after `/{location}[/Accounts/{accountId}]`) | Credential |
//! |---|---|---|---|
//! | [`SupportedLanguages`] | GET | `/SupportedLanguages` | query |
//! | [`TrialAccounts`] | GET | `/Accounts` | query |
//! | [`Account`] | GET | (none) | query |
//! | [`VideoIndex`] | GET | `/Videos/{id}/Index` | query |
//! | [`VideoList`] | GET | `/Videos` | query |
//! | [`VideoSearch`] | GET | `/Videos/Search` | query |
//! | [`ArtifactUrl`] | GET | `/Videos/{id}/ArtifactUrl` | query |
//! | [`SourceFileDownloadUrl`] | GET | `/Videos/{id}/SourceFile/DownloadUrl` | query |
//! | [`PromptContent`] | GET | `/Videos/{id}/PromptContent` | query |
//! | [`CreatePromptContent`] | POST | `/Videos/{id}/PromptContent` | query |
//! | [`Redact`] | POST | `/Videos/{id}/redact` | bearer |
//! | [`Job`] | GET | `/Jobs/{id}` | bearer |
//! | [`AccountMigration`] | GET | `/AccountMigrationStatus` | bearer |
//! | [`ProjectMigrations`] | GET | `/ProjectsMigrations` | bearer |
//! | [`ProjectMigration`] | GET | `/ProjectsMigrations/{id}` | bearer |
//! | [`VideoMigrations`] | GET | `/VideosMigrations` | bearer |
//! | [`VideoMigration`] | GET | `/VideosMigrations/{id}` | bearer |
//!
//! # Example
//!
//! ```rust,ignore
//! use video_indexer::rest::{Resource, ResourceRequest};
//! use video_indexer::rest::resources::SupportedLanguages;
//!
//! let request = ResourceRequest::builder(Location::trial()).build();
//! let languages = SupportedLanguages::get(&client, &request).await?;
//! ```

mod account;
mod artifact;
#[macro_use]
mod common;
mod job;
mod language;
mod migration;
mod prompt_content;
mod redaction;
mod video;

pub use account::{Account, AccountParams, QuotaUsage, TrialAccountParams, TrialAccounts};
pub use artifact::{ArtifactParams, ArtifactType, ArtifactUrl, SourceFileDownloadUrl};
pub use common::{Page, Paging};
pub use job::{Job, JobError, JobState};
pub use language::{SupportedLanguage, SupportedLanguages};
pub use migration::{
    AccountMigration, MigrationListParams, MigrationState, ProjectMigration, ProjectMigrations,
    VideoMigration, VideoMigrations,
};
pub use prompt_content::{
    CreatePromptContent, PromptContent, PromptContentRequest, PromptSection, PromptStyle,
};
pub use redaction::{
    BlurringKind, FaceFilter, FaceRedaction, FilterScope, Redact, RedactionRequest,
};
pub use video::{
    PrivacyMode, VideoDetails, VideoIndex, VideoIndexParams, VideoList, VideoListParams,
    VideoSearch, VideoSearchParams, VideoState, VideoSummary,
};
