//! Job resource.
//!
//! Long-running operations (redaction, prompt content generation) return a
//! [`Job`] immediately. GET `.../Jobs/{id}` polls its progress. Jobs use the
//! bearer credential convention.
//!
//! # Example
//!
//! ```rust,ignore
//! use video_indexer::rest::Resource;
//! use video_indexer::rest::resources::Job;
//!
//! let request = ResourceRequest::builder(Location::trial())
//!     .account(account_id)
//!     .resource_id(&job.id)
//!     .access_token(token)
//!     .build();
//!
//! loop {
//!     let job = Job::get(&client, &request).await?;
//!     if job.is_terminal() {
//!         break;
//!     }
//!     tokio::time::sleep(Duration::from_secs(10)).await;
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{AuthStyle, HttpMethod};
use crate::rest::{EndpointScope, Resource, ResourcePath};

service_enum! {
    /// Lifecycle state of a job.
    pub enum JobState {
        Pending,
        Running,
        Succeeded,
        Failed,
        Canceled,
    }
}

/// A long-running operation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// The job id.
    pub id: String,

    /// The job name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// What the job does (e.g., "Redaction").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,

    /// The current state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<JobState>,

    /// Completion percentage, 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,

    /// When the job was created.
    #[serde(
        default,
        with = "crate::rest::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// When the job last changed.
    #[serde(
        default,
        with = "crate::rest::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,

    /// The failure, when `state` is `Failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JobError>,

    /// Where to fetch the result once the job succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,
}

/// Why a job failed.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Job {
    /// Returns `true` once the job can no longer change state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            Some(JobState::Succeeded | JobState::Failed | JobState::Canceled)
        )
    }
}

impl Resource for Job {
    type Payload = Self;
    type Params = ();
    type Body = ();

    const NAME: &'static str = "Job";
    const PATH: ResourcePath = ResourcePath::new(
        HttpMethod::Get,
        EndpointScope::Account,
        AuthStyle::Bearer,
        &["id"],
        "Jobs/{id}",
    );
}
