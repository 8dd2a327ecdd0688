// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The outbound fetch collaborator.
//!
//! [`IssueSource`] is the seam between the model-construction pipeline
//! and the tracker: the HTTP client implements it for real, tests
//! implement it in memory. All methods are read-only; one roadmap build
//! drives several rounds of calls and shares nothing across requests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::raw::RawIssue;

/// Error type for tracker calls.
///
/// Transient variants are retried by the client before they ever reach
/// the pipeline; by the time a `SourceError` surfaces from a build,
/// retries have been exhausted.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("tracker authentication failed\n  hint: check the email and API token in the config")]
    Auth,

    #[error("rate limited by the tracker")]
    RateLimited,

    #[error("cannot reach the tracker: {0}")]
    Connection(String),

    #[error("tracker request timed out")]
    Timeout,

    #[error("invalid query: {0}\n  hint: check the query syntax")]
    InvalidQuery(String),

    #[error("tracker returned server error {0}")]
    Server(u16),

    #[error("malformed tracker response: {0}")]
    Protocol(String),
}

impl SourceError {
    /// True for failures worth retrying: timeouts, connection drops,
    /// rate limits, and 5xx responses.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            SourceError::RateLimited
                | SourceError::Timeout
                | SourceError::Connection(_)
                | SourceError::Server(_)
        )
    }
}

/// Read-only tracker collaborator.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Run a search query, requesting the given custom date fields
    /// alongside the standard roadmap fields.
    async fn search(&self, query: &str, date_fields: &[String]) -> Result<Vec<RawIssue>, SourceError>;

    /// Fetch full issue data for a key set. Implementations chunk the
    /// key list into bounded batches; callers may pass any number of keys.
    async fn bulk_fetch(
        &self,
        keys: &[String],
        date_fields: &[String],
    ) -> Result<Vec<RawIssue>, SourceError>;

    /// Fetch all issues whose parent field points at one of the given
    /// keys. Chunked like [`bulk_fetch`](IssueSource::bulk_fetch).
    async fn bulk_children_of(
        &self,
        keys: &[String],
        date_fields: &[String],
    ) -> Result<Vec<RawIssue>, SourceError>;

    /// Names of the link types the tracker knows about.
    async fn list_link_types(&self) -> Result<Vec<String>, SourceError>;

    /// Resolve project keys to display names. The map may be partial;
    /// callers fall back to the raw key for missing entries.
    async fn project_names(&self, keys: &[String]) -> Result<BTreeMap<String, String>, SourceError>;
}
