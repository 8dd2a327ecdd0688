// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The roadmap document model.
//!
//! A [`RoadmapDocument`] is built fresh per request, held only for the
//! duration of one render, and never mutated after construction. Dates
//! serialize as `YYYY-MM-DD` with no time component.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::category::StatusCategory;

/// Extract the project key from an issue key: the prefix before the first
/// `-`. A key without a separator is its own project key.
pub fn project_key(issue_key: &str) -> &str {
    issue_key.split('-').next().unwrap_or(issue_key)
}

/// An epic on the roadmap timeline. Epics carry the authoritative
/// start/end dates; either boundary may independently be unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Epic {
    pub key: String,
    pub title: String,
    pub url: String,
    pub status: String,
    pub status_category: StatusCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Child-item counts by refined category. The to-do count is derived,
    /// not stored: total minus the three counted categories.
    #[serde(default)]
    pub total_stories: u32,
    #[serde(default)]
    pub done_stories: u32,
    #[serde(default)]
    pub cancelled_stories: u32,
    #[serde(default)]
    pub inprogress_stories: u32,
}

impl Epic {
    /// Stories not yet started: whatever the counted categories leave over.
    pub fn todo_stories(&self) -> u32 {
        self.total_stories
            .saturating_sub(self.done_stories + self.cancelled_stories + self.inprogress_stories)
    }
}

/// A top-level initiative. Its timeline span is derived from its epics,
/// not stored; the epic list is an association, not ownership — one epic
/// may appear under more than one initiative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Initiative {
    pub key: String,
    pub title: String,
    pub url: String,
    pub status: String,
    pub status_category: StatusCategory,
    /// Min of defined epic start dates; unset iff no epic has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Max of defined epic end dates; unset iff no epic has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub epics: Vec<Epic>,
}

/// Complete result of one roadmap build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct RoadmapDocument {
    /// Month-aligned lower bound, padded one month before the data.
    pub timeline_start: NaiveDate,
    /// Month-aligned upper bound, padded one month after the data.
    pub timeline_end: NaiveDate,
    /// Project key → display name for every project present in the result.
    pub project_names: BTreeMap<String, String>,
    pub initiatives: Vec<Initiative>,
    /// Initiative→initiative dependency edges as ordered key pairs.
    pub initiative_deps: Vec<(String, String)>,
    /// Epic→epic dependency edges as ordered key pairs.
    pub epic_deps: Vec<(String, String)>,
}

impl RoadmapDocument {
    /// All epics across all initiatives, in document order. A shared epic
    /// appears once per initiative that carries it.
    pub fn epics(&self) -> impl Iterator<Item = &Epic> {
        self.initiatives.iter().flat_map(|i| i.epics.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.initiatives.is_empty()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
