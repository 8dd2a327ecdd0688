// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario specs for cascading visibility and arrow routing over the
//! bundled sample document.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use chrono::NaiveDate;

use tr_core::{sample_document, RoadmapDocument, StatusCategory};
use tr_timeline::{compute_layout, compute_visibility, route_arrows, ViewState, Viewport};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
}

fn doc() -> RoadmapDocument {
    sample_document(today())
}

fn arrow_count(doc: &RoadmapDocument, view: &ViewState) -> usize {
    let layout = compute_layout(doc, view, Viewport::new(1300.0), today());
    route_arrows(doc, &layout, view).len()
}

#[test]
fn filtering_away_every_child_category_hides_the_initiative() {
    let doc = doc();
    // PLAT-1's epics occupy new and indeterminate.
    let mut view = ViewState::default();
    view.epic_filter.hide_category(StatusCategory::New);
    view.epic_filter.hide_category(StatusCategory::Indeterminate);

    let vis = compute_visibility(&doc, &view);
    let plat = doc.initiatives.iter().position(|i| i.key == "PLAT-1").unwrap();
    assert!(!vis.initiative(plat));

    // Restoring one occupied category reveals it again.
    view.epic_filter.show_category(StatusCategory::Indeterminate);
    assert!(compute_visibility(&doc, &view).initiative(plat));
}

#[test]
fn hiding_a_project_removes_its_arrows_until_unhidden() {
    let doc = doc();
    let view = ViewState::default();
    let baseline = arrow_count(&doc, &view);
    assert!(baseline > 0);

    // DATA-7 → DATA-8 crosses the DATA project; hide it in both scopes.
    let mut filtered = view.clone();
    filtered.initiative_filter.hide_project("DATA");
    filtered.epic_filter.hide_project("DATA");
    let hidden = arrow_count(&doc, &filtered);
    assert!(hidden < baseline);

    // Un-hiding restores the arrows with no other state change.
    filtered.initiative_filter.show_project("DATA");
    filtered.epic_filter.show_project("DATA");
    assert_eq!(arrow_count(&doc, &filtered), baseline);
}

#[test]
fn collapse_drops_epic_arrows_but_keeps_initiative_arrows() {
    let doc = doc();
    let mut view = ViewState::default();
    for init in &doc.initiatives {
        view.toggle_expanded(&init.key);
    }
    let layout = compute_layout(&doc, &view, Viewport::new(1300.0), today());
    let arrows = route_arrows(&doc, &layout, &view);
    let epic_keys: Vec<&str> = doc
        .initiatives
        .iter()
        .flat_map(|i| i.epics.iter())
        .map(|e| e.key.as_str())
        .collect();
    assert!(arrows.iter().all(|a| !epic_keys.contains(&a.from_key.as_str())));
}

#[test]
fn cancelled_items_are_hidden_by_default() {
    let doc = doc();
    let vis = compute_visibility(&doc, &ViewState::default());
    let leg = doc.initiatives.iter().position(|i| i.key == "LEG-1").unwrap();
    assert!(!vis.initiative(leg));
}

#[test]
fn zero_initiatives_renders_the_empty_state_without_layout_math() {
    let empty = RoadmapDocument {
        initiatives: vec![],
        initiative_deps: vec![],
        epic_deps: vec![],
        ..doc()
    };
    let view = ViewState::default();
    let layout = compute_layout(&empty, &view, Viewport::new(1300.0), today());
    assert!(layout.is_empty());
    assert!(route_arrows(&empty, &layout, &view).is_empty());
    assert!(!compute_visibility(&empty, &view).any_visible());
}
