// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency-arrow routing.
//!
//! Arrows are cubic bezier curves between bars of visible rows. The
//! router is recomputed fully — not incrementally — after every
//! expand/collapse, filter change, or arrow-visibility toggle; edges
//! with any endpoint that is not currently visible (or renders as a
//! placeholder without a bar) are silently skipped.

use tr_core::RoadmapDocument;

use crate::layout::{RowKind, TimelineLayout};
use crate::view::ViewState;

/// Lower bound on the control-point offset, so near-adjacent bars still
/// get a readable curve instead of a degenerate one.
const MIN_CONTROL_OFFSET: f64 = 32.0;
/// Fraction of the endpoint distance used as the control-point offset:
/// wider gaps get gentler curves.
const CONTROL_SCALE: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One routed dependency edge: a cubic bezier from the right edge of the
/// source bar to the left edge of the target bar, both at vertical
/// center.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    pub from_key: String,
    pub to_key: String,
    pub start: Point,
    pub ctrl_start: Point,
    pub ctrl_end: Point,
    pub end: Point,
}

/// Route every dependency edge whose endpoints both resolve to visible
/// rows with bar geometry.
pub fn route_arrows(
    doc: &RoadmapDocument,
    layout: &TimelineLayout,
    view: &ViewState,
) -> Vec<Arrow> {
    if !view.show_arrows || layout.is_empty() {
        return Vec::new();
    }

    let mut arrows = Vec::new();
    let edge_sets = [
        (&doc.initiative_deps, RowKind::Initiative),
        (&doc.epic_deps, RowKind::Epic),
    ];
    for (edges, kind) in edge_sets {
        for (from_key, to_key) in edges.iter() {
            let source = match layout.row_of(from_key, kind) {
                Some(row) => row,
                None => continue,
            };
            let target = match layout.row_of(to_key, kind) {
                Some(row) => row,
                None => continue,
            };
            let source_bar = match &source.bar {
                Some(bar) => bar,
                None => continue,
            };
            let target_bar = match &target.bar {
                Some(bar) => bar,
                None => continue,
            };

            let start = Point {
                x: source_bar.right(),
                y: source.center_y(),
            };
            let end = Point {
                x: target_bar.left,
                y: target.center_y(),
            };
            let control_offset = ((end.x - start.x).abs() * CONTROL_SCALE).max(MIN_CONTROL_OFFSET);
            arrows.push(Arrow {
                from_key: from_key.clone(),
                to_key: to_key.clone(),
                start,
                ctrl_start: Point {
                    x: start.x + control_offset,
                    y: start.y,
                },
                ctrl_end: Point {
                    x: end.x - control_offset,
                    y: end.y,
                },
                end,
            });
        }
    }
    arrows
}

#[cfg(test)]
#[path = "arrows_tests.rs"]
mod tests;
