// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cascading row visibility.
//!
//! The hierarchy is fixed at two levels, so visibility is a fixed
//! two-pass fold rather than a graph traversal: compute each epic's own
//! pass/fail first, fold that into initiative visibility, then finalize
//! epic visibility as a function of both.

use tr_core::{project_key, RoadmapDocument};

use crate::view::ViewState;

/// Visibility of every row in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility {
    initiatives: Vec<bool>,
    epics: Vec<Vec<bool>>,
}

impl Visibility {
    pub fn initiative(&self, index: usize) -> bool {
        self.initiatives.get(index).copied().unwrap_or(false)
    }

    pub fn epic(&self, initiative_index: usize, epic_index: usize) -> bool {
        self.epics
            .get(initiative_index)
            .and_then(|row| row.get(epic_index))
            .copied()
            .unwrap_or(false)
    }

    pub fn any_visible(&self) -> bool {
        self.initiatives.iter().any(|v| *v)
    }
}

/// Recompute visibility for the whole document.
///
/// An epic row is visible iff its initiative is visible AND expanded AND
/// the epic's own category/project pass the Epic scope. An initiative
/// row is visible iff its own category/project pass the Initiative scope
/// AND (it has zero epics OR at least one epic passes the Epic scope on
/// its own — evaluated without regard to expand state). Filtering away
/// every child therefore hides the parent, while a childless initiative
/// is never hidden for that reason.
pub fn compute_visibility(doc: &RoadmapDocument, view: &ViewState) -> Visibility {
    // Pass 1: each epic against the Epic scope alone.
    let epic_pass: Vec<Vec<bool>> = doc
        .initiatives
        .iter()
        .map(|init| {
            init.epics
                .iter()
                .map(|e| view.epic_filter.passes(e.status_category, project_key(&e.key)))
                .collect()
        })
        .collect();

    // Pass 2: initiatives, folding in their epics' own results.
    let initiatives: Vec<bool> = doc
        .initiatives
        .iter()
        .zip(&epic_pass)
        .map(|(init, passes)| {
            let own = view
                .initiative_filter
                .passes(init.status_category, project_key(&init.key));
            own && (init.epics.is_empty() || passes.iter().any(|p| *p))
        })
        .collect();

    // Pass 3: final epic visibility under the parent and expand state.
    let epics: Vec<Vec<bool>> = doc
        .initiatives
        .iter()
        .enumerate()
        .zip(epic_pass)
        .map(|((index, init), passes)| {
            let parent_open = initiatives[index] && view.is_expanded(&init.key);
            passes.into_iter().map(|p| p && parent_open).collect()
        })
        .collect();

    Visibility { initiatives, epics }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
