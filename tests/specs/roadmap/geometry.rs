// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Geometry specs for the layout engine over the bundled sample
//! document: determinism, projection, segments, paging.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use chrono::NaiveDate;

use tr_core::{sample_document, RoadmapDocument};
use tr_timeline::{compute_layout, segments, RowKind, ViewState, Viewport};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
}

fn doc() -> RoadmapDocument {
    sample_document(today())
}

#[test]
fn identical_inputs_yield_identical_geometry() {
    let doc = doc();
    let view = ViewState::default();
    let first = compute_layout(&doc, &view, Viewport::new(1440.0), today());
    let second = compute_layout(&doc, &view, Viewport::new(1440.0), today());
    similar_asserts::assert_eq!(first, second);
}

#[test]
fn every_visible_bar_stays_inside_the_timeline() {
    let doc = doc();
    let layout = compute_layout(&doc, &ViewState::default(), Viewport::new(1440.0), today());
    for row in &layout.rows {
        if let Some(bar) = &row.bar {
            assert!(bar.left >= 0.0, "row {} starts before the grid", row.key);
            assert!(
                bar.left <= layout.total_width,
                "row {} starts past the grid",
                row.key
            );
        }
    }
}

#[test]
fn month_offsets_are_strictly_increasing() {
    let doc = doc();
    let layout = compute_layout(&doc, &ViewState::default(), Viewport::new(1440.0), today());
    let offsets: Vec<f64> = layout.months.iter().map(|m| m.offset).collect();
    assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(layout.months[0].date, doc.timeline_start);
}

#[test]
fn epic_rows_sit_under_their_initiative_rows() {
    let doc = doc();
    let layout = compute_layout(&doc, &ViewState::default(), Viewport::new(1440.0), today());
    let mut last_initiative_y = f64::MIN;
    for row in &layout.rows {
        match row.kind {
            RowKind::Initiative => last_initiative_y = row.y,
            RowKind::Epic => assert!(row.y > last_initiative_y),
        }
    }
}

#[test]
fn segment_sums_are_preserved_for_arbitrary_counts() {
    for done in [0u32, 1, 5, 97] {
        for cancelled in [0u32, 2, 13] {
            for inprogress in [0u32, 3, 41] {
                for todo in [0u32, 1, 7, 101] {
                    let segs = segments(done, cancelled, inprogress, todo);
                    if done + cancelled + inprogress + todo == 0 {
                        assert!(segs.is_empty());
                        continue;
                    }
                    let mut previous = 0;
                    for seg in &segs {
                        assert_eq!(seg.from_pct, previous, "boundaries must chain");
                        assert!(seg.to_pct >= seg.from_pct, "boundaries must not decrease");
                        previous = seg.to_pct;
                    }
                    assert_eq!(previous, 100, "final boundary must be exactly 100");
                }
            }
        }
    }
}

#[test]
fn paging_round_trip_returns_to_the_left_edge() {
    let doc = doc();
    let mut layout = compute_layout(&doc, &ViewState::default(), Viewport::new(600.0), today());
    // Today sits late in the sample range, so the initial anchor leaves
    // room to page back but not forward.
    assert!(layout.can_page_back());
    assert!(!layout.can_page_forward());

    let mut back_steps = 0;
    while layout.can_page_back() && back_steps < 100 {
        layout.page_back();
        back_steps += 1;
    }
    assert!(!layout.can_page_back());
    assert!(layout.scroll().abs() < 1e-9);
    assert!(layout.can_page_forward());

    let mut forward_steps = 0;
    while layout.can_page_forward() && forward_steps < 100 {
        layout.page_forward();
        forward_steps += 1;
    }
    assert!(!layout.can_page_forward());
    assert!(layout.scroll() > 0.0);
}

#[test]
fn viewport_width_changes_only_rescale_the_geometry() {
    let doc = doc();
    let view = ViewState::default();
    let narrow = compute_layout(&doc, &view, Viewport::new(700.0), today());
    let wide = compute_layout(&doc, &view, Viewport::new(1400.0), today());
    // Same rows, same months, double the scale.
    assert_eq!(narrow.rows.len(), wide.rows.len());
    assert_eq!(narrow.months.len(), wide.months.len());
    assert!((wide.px_per_day - 2.0 * narrow.px_per_day).abs() < 1e-9);
}
