// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The reqwest-based tracker client.
//!
//! Implements [`IssueSource`] against a Jira-compatible HTTP API. Every
//! call runs under the retry policy; bulk lookups are chunked into
//! bounded batches. The client holds no mutable state and is safe to
//! share across requests.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use tr_core::{IssueSource, RawIssue, SourceError};

use crate::config::Config;
use crate::error::ConfigError;
use crate::retry::RetryPolicy;

/// Keys per `in (...)` batch. Chunking bounds request size; callers may
/// pass any number of keys.
const BULK_CHUNK_SIZE: usize = 100;
/// Issues requested per search page.
const PAGE_SIZE: u32 = 200;
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Standard fields requested alongside the configured date fields.
const ROADMAP_FIELDS: [&str; 6] = [
    "summary",
    "issuetype",
    "status",
    "issuelinks",
    "subtasks",
    "parent",
];

/// Client for a Jira-compatible tracker API.
pub struct JiraClient {
    http: reqwest::Client,
    base_url: String,
    email: String,
    api_token: String,
    retry: RetryPolicy,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    issues: Vec<RawIssue>,
    #[serde(rename = "nextPageToken", default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProjectBody {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct LinkTypesBody {
    #[serde(rename = "issueLinkTypes", default)]
    issue_link_types: Vec<LinkTypeBody>,
}

#[derive(Debug, Deserialize)]
struct LinkTypeBody {
    #[serde(default)]
    name: String,
}

impl JiraClient {
    /// Build a client from validated configuration.
    pub fn new(config: &Config) -> Result<JiraClient, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ConfigError::Invalid(format!("failed to build http client: {}", e)))?;
        Ok(JiraClient {
            http,
            base_url: config.tracker.url.trim_end_matches('/').to_string(),
            email: config.tracker.email.clone(),
            api_token: config.tracker.api_token.clone(),
            retry: RetryPolicy::default(),
        })
    }

    /// Replace the default retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> JiraClient {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn field_list(date_fields: &[String]) -> Vec<String> {
        ROADMAP_FIELDS
            .iter()
            .map(|f| f.to_string())
            .chain(date_fields.iter().cloned())
            .collect()
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .basic_auth(&self.email, Some(&self.api_token))
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(response).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .basic_auth(&self.email, Some(&self.api_token))
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(response).await
    }

    async fn search_page(
        &self,
        jql: &str,
        fields: &[String],
        page_token: Option<&str>,
    ) -> Result<SearchPage, SourceError> {
        let mut body = json!({
            "jql": jql,
            "fields": fields,
            "maxResults": PAGE_SIZE,
        });
        if let Some(token) = page_token {
            body["nextPageToken"] = json!(token);
        }
        self.post_json("/rest/api/3/search/jql", &body).await
    }

    /// Run a search to exhaustion, following page tokens. Each page is
    /// retried independently under the policy.
    async fn search_all(
        &self,
        jql: &str,
        date_fields: &[String],
    ) -> Result<Vec<RawIssue>, SourceError> {
        let fields = Self::field_list(date_fields);
        let mut issues: Vec<RawIssue> = Vec::new();
        let mut token: Option<String> = None;
        loop {
            let page = self
                .retry
                .run(|| self.search_page(jql, &fields, token.as_deref()))
                .await?;
            issues.extend(page.issues);
            match page.next_page_token {
                Some(next) if !next.is_empty() => token = Some(next),
                _ => break,
            }
        }
        tracing::debug!(jql, count = issues.len(), "search complete");
        Ok(issues)
    }

    /// Membership search over a key set, one batched query per chunk.
    /// No concurrency across chunks: they run in sequence.
    async fn search_membership(
        &self,
        clause: &str,
        keys: &[String],
        date_fields: &[String],
    ) -> Result<Vec<RawIssue>, SourceError> {
        let mut all: Vec<RawIssue> = Vec::new();
        for chunk in keys.chunks(BULK_CHUNK_SIZE) {
            let jql = membership_jql(clause, chunk);
            all.extend(self.search_all(&jql, date_fields).await?);
        }
        Ok(all)
    }
}

/// `key in (A, B, ...)` / `parent in (A, B, ...)` for one chunk.
fn membership_jql(clause: &str, keys: &[String]) -> String {
    format!("{} in ({})", clause, keys.join(", "))
}

fn map_transport_error(e: reqwest::Error) -> SourceError {
    if e.is_timeout() {
        SourceError::Timeout
    } else {
        SourceError::Connection(e.to_string())
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, SourceError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json()
            .await
            .map_err(|e| SourceError::Protocol(e.to_string()));
    }
    Err(match status.as_u16() {
        401 | 403 => SourceError::Auth,
        429 => SourceError::RateLimited,
        400 => {
            let body = response.text().await.unwrap_or_default();
            SourceError::InvalidQuery(truncate_reason(&body))
        }
        code if code >= 500 => SourceError::Server(code),
        code => SourceError::Protocol(format!("unexpected status {}", code)),
    })
}

fn truncate_reason(body: &str) -> String {
    const MAX: usize = 200;
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "tracker rejected the query".to_string();
    }
    match trimmed.char_indices().nth(MAX) {
        Some((index, _)) => format!("{}...", &trimmed[..index]),
        None => trimmed.to_string(),
    }
}

#[async_trait]
impl IssueSource for JiraClient {
    async fn search(
        &self,
        query: &str,
        date_fields: &[String],
    ) -> Result<Vec<RawIssue>, SourceError> {
        self.search_all(query, date_fields).await
    }

    async fn bulk_fetch(
        &self,
        keys: &[String],
        date_fields: &[String],
    ) -> Result<Vec<RawIssue>, SourceError> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        self.search_membership("key", keys, date_fields).await
    }

    async fn bulk_children_of(
        &self,
        keys: &[String],
        date_fields: &[String],
    ) -> Result<Vec<RawIssue>, SourceError> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        self.search_membership("parent", keys, date_fields).await
    }

    async fn list_link_types(&self) -> Result<Vec<String>, SourceError> {
        let body: LinkTypesBody = self
            .retry
            .run(|| self.get_json("/rest/api/3/issueLinkType"))
            .await?;
        Ok(body.issue_link_types.into_iter().map(|t| t.name).collect())
    }

    async fn project_names(
        &self,
        keys: &[String],
    ) -> Result<BTreeMap<String, String>, SourceError> {
        let mut names = BTreeMap::new();
        for key in keys {
            let path = format!("/rest/api/3/project/{}", key);
            match self.retry.run(|| self.get_json::<ProjectBody>(&path)).await {
                Ok(project) if !project.name.is_empty() => {
                    names.insert(key.clone(), project.name);
                }
                Ok(_) => {}
                Err(e) => {
                    // Per-key failures degrade to the raw key downstream.
                    tracing::debug!("project lookup failed for {}: {}", key, e);
                }
            }
        }
        Ok(names)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
