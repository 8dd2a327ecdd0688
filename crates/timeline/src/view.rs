// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Serializable view-state.
//!
//! The combination of expand/collapse flags and the two filter scopes is
//! an explicit value threaded into every layout/filter recomputation, so
//! the engines stay pure functions of their inputs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use tr_core::StatusCategory;

/// Hidden-sets for one filter scope (Initiative or Epic).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeFilter {
    /// Status categories hidden in this scope.
    #[serde(default)]
    pub hidden_categories: BTreeSet<StatusCategory>,
    /// Project keys hidden in this scope.
    #[serde(default)]
    pub hidden_projects: BTreeSet<String>,
}

impl Default for ScopeFilter {
    /// Only cancelled items start hidden; no project is hidden.
    fn default() -> Self {
        ScopeFilter {
            hidden_categories: BTreeSet::from([StatusCategory::Cancelled]),
            hidden_projects: BTreeSet::new(),
        }
    }
}

impl ScopeFilter {
    /// True when an item with this category/project is not hidden.
    pub fn passes(&self, category: StatusCategory, project: &str) -> bool {
        !self.hidden_categories.contains(&category) && !self.hidden_projects.contains(project)
    }

    pub fn hide_category(&mut self, category: StatusCategory) {
        self.hidden_categories.insert(category);
    }

    pub fn show_category(&mut self, category: StatusCategory) {
        self.hidden_categories.remove(&category);
    }

    pub fn hide_project(&mut self, project: &str) {
        self.hidden_projects.insert(project.to_string());
    }

    pub fn show_project(&mut self, project: &str) {
        self.hidden_projects.remove(project);
    }
}

/// The complete view-state governing current visibility.
///
/// Expand/collapse is orthogonal to the filters and persists
/// independently of them: toggling a filter never touches `collapsed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Initiatives the user collapsed; everything else renders expanded.
    #[serde(default)]
    pub collapsed: BTreeSet<String>,
    #[serde(default)]
    pub initiative_filter: ScopeFilter,
    #[serde(default)]
    pub epic_filter: ScopeFilter,
    #[serde(default = "default_show_arrows")]
    pub show_arrows: bool,
}

fn default_show_arrows() -> bool {
    true
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            collapsed: BTreeSet::new(),
            initiative_filter: ScopeFilter::default(),
            epic_filter: ScopeFilter::default(),
            show_arrows: true,
        }
    }
}

impl ViewState {
    pub fn is_expanded(&self, initiative_key: &str) -> bool {
        !self.collapsed.contains(initiative_key)
    }

    pub fn toggle_expanded(&mut self, initiative_key: &str) {
        if !self.collapsed.remove(initiative_key) {
            self.collapsed.insert(initiative_key.to_string());
        }
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
