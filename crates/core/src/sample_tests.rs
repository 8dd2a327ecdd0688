// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::dates::padded_bounds;
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
}

#[test]
fn sample_has_initiatives_and_dependencies() {
    let doc = sample_document(today());
    assert!(!doc.initiatives.is_empty());
    assert!(!doc.initiative_deps.is_empty());
    assert!(!doc.epic_deps.is_empty());
}

#[test]
fn sample_bounds_satisfy_the_padding_invariant() {
    let doc = sample_document(today());
    let dates = doc
        .epics()
        .flat_map(|e| [e.start_date, e.end_date])
        .flatten();
    assert_eq!(
        padded_bounds(dates),
        Some((doc.timeline_start, doc.timeline_end))
    );
}

#[test]
fn sample_derived_spans_match_their_epics() {
    let doc = sample_document(today());
    for init in &doc.initiatives {
        let (start, end) = crate::dates::derive_span(&init.epics);
        assert_eq!(init.start_date, start, "initiative {}", init.key);
        assert_eq!(init.end_date, end, "initiative {}", init.key);
    }
}

#[test]
fn sample_dependency_endpoints_exist_and_share_kind() {
    let doc = sample_document(today());
    let init_keys: Vec<&str> = doc.initiatives.iter().map(|i| i.key.as_str()).collect();
    for (from, to) in &doc.initiative_deps {
        assert!(init_keys.contains(&from.as_str()));
        assert!(init_keys.contains(&to.as_str()));
        assert_ne!(from, to);
    }
    let epic_keys: Vec<&str> = doc.epics().map(|e| e.key.as_str()).collect();
    for (from, to) in &doc.epic_deps {
        assert!(epic_keys.contains(&from.as_str()));
        assert!(epic_keys.contains(&to.as_str()));
        assert_ne!(from, to);
    }
}

#[test]
fn sample_exercises_open_ended_and_undated_bars() {
    let doc = sample_document(today());
    let missing_start = doc.epics().any(|e| e.start_date.is_none() && e.end_date.is_some());
    let missing_end = doc.epics().any(|e| e.start_date.is_some() && e.end_date.is_none());
    let missing_both = doc.epics().any(|e| e.start_date.is_none() && e.end_date.is_none());
    assert!(missing_start && missing_end && missing_both);
}

#[test]
fn sample_round_trips_through_json() {
    let doc = sample_document(today());
    let json = serde_json::to_string(&doc).unwrap();
    let back: RoadmapDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(back.initiatives.len(), doc.initiatives.len());
    assert_eq!(back.timeline_start, doc.timeline_start);
}
