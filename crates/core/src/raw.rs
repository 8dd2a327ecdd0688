// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raw tracker payload types.
//!
//! These mirror the wire shape of the tracker's search results closely
//! enough to deserialize the fields the pipeline needs: summary, type,
//! status, issue links, subtasks, the parent pointer, and the two
//! configured custom date fields (captured through the flattened map).
//! Everything is lenient: absent fields default rather than fail.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::category::StatusCategory;

/// Issue type name the tracker uses for epics.
pub const EPIC_TYPE_NAME: &str = "Epic";

/// A raw issue as returned by a tracker search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawIssue {
    pub key: String,
    #[serde(default)]
    pub fields: RawFields,
}

/// The subset of issue fields the pipeline consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub issuetype: Option<RawIssueType>,
    #[serde(default)]
    pub status: Option<RawStatus>,
    #[serde(default)]
    pub issuelinks: Vec<RawLink>,
    #[serde(default)]
    pub subtasks: Vec<RawIssueRef>,
    #[serde(default)]
    pub parent: Option<RawIssueRef>,
    /// Custom fields, including the configured start/end date fields.
    #[serde(flatten)]
    pub custom: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawIssueType {
    #[serde(default)]
    pub name: String,
}

/// A raw status field with its tracker-assigned category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawStatus {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "statusCategory", default)]
    pub category: Option<RawStatusCategory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawStatusCategory {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
}

/// A directional issue link. The subject issue is the origin of the
/// `outward` side; the `inward` side is the mirror held by the other issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLink {
    #[serde(rename = "type", default)]
    pub link_type: Option<RawLinkType>,
    #[serde(rename = "inwardIssue", default)]
    pub inward: Option<RawIssueRef>,
    #[serde(rename = "outwardIssue", default)]
    pub outward: Option<RawIssueRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawLinkType {
    #[serde(default)]
    pub name: String,
}

/// A shallow reference to another issue (link target, subtask, parent).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawIssueRef {
    pub key: String,
    #[serde(default)]
    pub fields: RawRefFields,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRefFields {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub issuetype: Option<RawIssueType>,
}

impl RawIssue {
    /// The raw status name, empty when the field is absent.
    pub fn status_name(&self) -> &str {
        self.fields
            .status
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or("")
    }

    /// Refined status category, defaulting to `new` when absent.
    pub fn status_category(&self) -> StatusCategory {
        self.fields
            .status
            .as_ref()
            .map(StatusCategory::from_status)
            .unwrap_or(StatusCategory::New)
    }

    /// Key of the parent issue, if the parent field is set.
    pub fn parent_key(&self) -> Option<&str> {
        self.fields.parent.as_ref().map(|p| p.key.as_str())
    }

    /// True when this issue's type is the epic type.
    pub fn is_epic(&self) -> bool {
        self.fields
            .issuetype
            .as_ref()
            .map(|t| t.name == EPIC_TYPE_NAME)
            .unwrap_or(false)
    }

    /// Parse a custom date field value to a calendar date.
    ///
    /// Tracker date fields are `YYYY-MM-DD`, but datetime strings appear in
    /// some setups; those are truncated to the date part. Anything
    /// unparseable degrades to `None`.
    pub fn date_field(&self, field_id: &str) -> Option<NaiveDate> {
        let value = self.fields.custom.get(field_id)?;
        let text = value.as_str()?;
        let date_part = text.get(..10).unwrap_or(text);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }
}

impl RawIssueRef {
    /// True when the referenced issue's type is the epic type.
    pub fn is_epic(&self) -> bool {
        self.fields
            .issuetype
            .as_ref()
            .map(|t| t.name == EPIC_TYPE_NAME)
            .unwrap_or(false)
    }
}

#[cfg(test)]
#[path = "raw_tests.rs"]
mod tests;
