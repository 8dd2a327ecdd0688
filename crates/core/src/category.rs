// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status-category refinement.
//!
//! The tracker only knows three status categories (new, indeterminate,
//! done). Cancelled statuses share the "done" category upstream, so a
//! fourth local category is carved out by inspecting the status name.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::raw::RawStatus;

/// Refined status category of a tracked item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    /// Not yet started ("To Do" in most trackers).
    New,
    /// Currently being worked on.
    Indeterminate,
    /// Successfully completed.
    Done,
    /// Closed without completion. Local refinement of "done", detected by
    /// status-name inspection, never by the category code alone.
    Cancelled,
}

impl StatusCategory {
    /// Returns the string representation used in the document and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::New => "new",
            StatusCategory::Indeterminate => "indeterminate",
            StatusCategory::Done => "done",
            StatusCategory::Cancelled => "cancelled",
        }
    }

    /// Parse a category name. Unknown values fall back to [`New`] so a
    /// malformed document renders with the default appearance instead of
    /// failing.
    ///
    /// [`New`]: StatusCategory::New
    pub fn from_name(name: &str) -> StatusCategory {
        match name {
            "indeterminate" => StatusCategory::Indeterminate,
            "done" => StatusCategory::Done,
            "cancelled" => StatusCategory::Cancelled,
            _ => StatusCategory::New,
        }
    }

    /// Refine a raw tracker status field into a category.
    ///
    /// A status whose name mentions cancellation is [`Cancelled`]
    /// regardless of its category code. Otherwise the category key decides;
    /// unknown keys fall back to category-name inspection, and anything
    /// still unrecognized is [`New`].
    ///
    /// [`Cancelled`]: StatusCategory::Cancelled
    /// [`New`]: StatusCategory::New
    pub fn from_status(status: &RawStatus) -> StatusCategory {
        if status.name.to_lowercase().contains("cancel") {
            return StatusCategory::Cancelled;
        }
        let category = match &status.category {
            Some(c) => c,
            None => return StatusCategory::New,
        };
        match category.key.to_lowercase().as_str() {
            "new" => StatusCategory::New,
            "indeterminate" => StatusCategory::Indeterminate,
            "done" => StatusCategory::Done,
            _ => {
                let name = category.name.to_lowercase();
                if name.contains("done") {
                    StatusCategory::Done
                } else if name.contains("progress") || name.contains("indeterminate") {
                    StatusCategory::Indeterminate
                } else {
                    StatusCategory::New
                }
            }
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatusCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(StatusCategory::from_name(&name))
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
