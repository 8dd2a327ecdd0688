// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;
use std::collections::BTreeSet;

fn issue(key: &str, outward: &[&str]) -> RawIssue {
    let links: Vec<serde_json::Value> = outward
        .iter()
        .map(|k| json!({ "type": { "name": "Blocks" }, "outwardIssue": { "key": k } }))
        .collect();
    serde_json::from_value(json!({ "key": key, "fields": { "issuelinks": links } })).unwrap()
}

fn members(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

#[test]
fn edges_require_both_endpoints_in_the_set() {
    let issues = vec![issue("A-1", &["A-2", "B-9"])];
    let edges = extract_deps(issues.iter(), &members(&["A-1", "A-2"]));
    assert_eq!(edges, vec![("A-1".to_string(), "A-2".to_string())]);
}

#[test]
fn self_loops_are_excluded() {
    let issues = vec![issue("A-1", &["A-1"])];
    assert!(extract_deps(issues.iter(), &members(&["A-1"])).is_empty());
}

#[test]
fn duplicate_links_collapse_to_one_edge() {
    let issues = vec![issue("A-1", &["A-2", "A-2"])];
    let edges = extract_deps(issues.iter(), &members(&["A-1", "A-2"]));
    assert_eq!(edges.len(), 1);
}

#[test]
fn first_seen_order_is_preserved() {
    let issues = vec![issue("A-1", &["A-3", "A-2"]), issue("A-2", &["A-3"])];
    let edges = extract_deps(issues.iter(), &members(&["A-1", "A-2", "A-3"]));
    assert_eq!(
        edges,
        vec![
            ("A-1".to_string(), "A-3".to_string()),
            ("A-1".to_string(), "A-2".to_string()),
            ("A-2".to_string(), "A-3".to_string()),
        ]
    );
}

#[test]
fn inward_links_contribute_nothing() {
    let raw: RawIssue = serde_json::from_value(json!({
        "key": "A-1",
        "fields": {
            "issuelinks": [
                { "type": { "name": "Blocks" }, "inwardIssue": { "key": "A-2" } },
            ],
        },
    }))
    .unwrap();
    assert!(extract_deps([&raw], &members(&["A-1", "A-2"])).is_empty());
}
