// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end specs for the model-construction pipeline: an in-memory
//! tracker source driven through `build_roadmap`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;

use tr_core::{
    build_roadmap, BuildError, DateFields, IssueSource, RawIssue, SourceError,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn fields() -> DateFields {
    DateFields {
        start: "cf_start".to_string(),
        end: "cf_end".to_string(),
    }
}

fn init_issue(key: &str, epic_keys: &[&str]) -> RawIssue {
    let links: Vec<serde_json::Value> = epic_keys
        .iter()
        .map(|epic_key| {
            json!({
                "type": { "name": "Relates" },
                "outwardIssue": {
                    "key": epic_key,
                    "fields": { "issuetype": { "name": "Epic" } },
                },
            })
        })
        .collect();
    serde_json::from_value(json!({
        "key": key,
        "fields": {
            "summary": format!("Initiative {}", key),
            "issuetype": { "name": "Initiative" },
            "status": {
                "name": "In Progress",
                "statusCategory": { "key": "indeterminate", "name": "In Progress" },
            },
            "issuelinks": links,
        },
    }))
    .unwrap()
}

fn epic_issue(key: &str, start: Option<&str>, end: Option<&str>) -> RawIssue {
    serde_json::from_value(json!({
        "key": key,
        "fields": {
            "summary": format!("Epic {}", key),
            "issuetype": { "name": "Epic" },
            "status": {
                "name": "To Do",
                "statusCategory": { "key": "new", "name": "To Do" },
            },
            "cf_start": start,
            "cf_end": end,
        },
    }))
    .unwrap()
}

struct MemorySource {
    initiatives: Vec<RawIssue>,
    epics: Vec<RawIssue>,
}

#[async_trait]
impl IssueSource for MemorySource {
    async fn search(
        &self,
        _query: &str,
        _date_fields: &[String],
    ) -> Result<Vec<RawIssue>, SourceError> {
        Ok(self.initiatives.clone())
    }

    async fn bulk_fetch(
        &self,
        keys: &[String],
        _date_fields: &[String],
    ) -> Result<Vec<RawIssue>, SourceError> {
        Ok(self
            .epics
            .iter()
            .filter(|e| keys.contains(&e.key))
            .cloned()
            .collect())
    }

    async fn bulk_children_of(
        &self,
        _keys: &[String],
        _date_fields: &[String],
    ) -> Result<Vec<RawIssue>, SourceError> {
        Ok(Vec::new())
    }

    async fn list_link_types(&self) -> Result<Vec<String>, SourceError> {
        Ok(vec!["Relates".to_string()])
    }

    async fn project_names(
        &self,
        keys: &[String],
    ) -> Result<BTreeMap<String, String>, SourceError> {
        Ok(keys.iter().map(|k| (k.clone(), format!("{} project", k))).collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenario: partially dated epics
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn partially_dated_epics_derive_independent_boundaries() {
    // Initiative X has epics A (2024-01-01 .. 2024-03-01) and B (no
    // start, ends 2024-06-01): X derives 2024-01-01 .. 2024-06-01 and
    // the document bounds land at 2023-12-01 .. 2024-07-01.
    let source = MemorySource {
        initiatives: vec![init_issue("X-1", &["A-1", "B-1"])],
        epics: vec![
            epic_issue("A-1", Some("2024-01-01"), Some("2024-03-01")),
            epic_issue("B-1", None, Some("2024-06-01")),
        ],
    };

    let doc = build_roadmap(&source, "type = Initiative", &[], &fields(), "https://t.example.net")
        .await
        .unwrap();

    let init = &doc.initiatives[0];
    assert_eq!(init.start_date, Some(d(2024, 1, 1)));
    assert_eq!(init.end_date, Some(d(2024, 6, 1)));
    assert_eq!(doc.timeline_start, d(2023, 12, 1));
    assert_eq!(doc.timeline_end, d(2024, 7, 1));
}

#[tokio::test]
async fn derived_boundary_is_undefined_iff_no_epic_has_it() {
    let source = MemorySource {
        initiatives: vec![init_issue("X-1", &["A-1", "B-1"])],
        epics: vec![
            epic_issue("A-1", None, Some("2024-03-01")),
            epic_issue("B-1", None, Some("2024-06-01")),
        ],
    };

    let doc = build_roadmap(&source, "q", &[], &fields(), "https://t.example.net")
        .await
        .unwrap();
    assert_eq!(doc.initiatives[0].start_date, None);
    assert_eq!(doc.initiatives[0].end_date, Some(d(2024, 6, 1)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Document shape
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn document_serializes_to_the_wire_shape() {
    let source = MemorySource {
        initiatives: vec![init_issue("X-1", &["A-1"])],
        epics: vec![epic_issue("A-1", Some("2024-01-01"), Some("2024-03-01"))],
    };

    let doc = build_roadmap(&source, "q", &[], &fields(), "https://t.example.net")
        .await
        .unwrap();
    let value = serde_json::to_value(&doc).unwrap();

    for field in [
        "timeline_start",
        "timeline_end",
        "project_names",
        "initiatives",
        "initiative_deps",
        "epic_deps",
    ] {
        assert!(value.get(field).is_some(), "missing field {}", field);
    }
    let epic = &value["initiatives"][0]["epics"][0];
    for field in [
        "key",
        "title",
        "url",
        "status",
        "status_category",
        "start_date",
        "end_date",
        "total_stories",
        "done_stories",
        "cancelled_stories",
        "inprogress_stories",
    ] {
        assert!(epic.get(field).is_some(), "missing epic field {}", field);
    }
    assert_eq!(epic["url"], "https://t.example.net/browse/A-1");
    assert_eq!(value["project_names"]["A"], "A project");
}

#[tokio::test]
async fn dependency_edges_are_same_kind_without_self_loops() {
    let mut init_a = init_issue("X-1", &["A-1"]);
    init_a.fields.issuelinks.push(
        serde_json::from_value(json!({
            "type": { "name": "Blocks" },
            "outwardIssue": { "key": "X-2" },
        }))
        .unwrap(),
    );
    // A self link must never become an edge.
    init_a.fields.issuelinks.push(
        serde_json::from_value(json!({
            "type": { "name": "Blocks" },
            "outwardIssue": { "key": "X-1" },
        }))
        .unwrap(),
    );

    let source = MemorySource {
        initiatives: vec![init_a, init_issue("X-2", &["B-1"])],
        epics: vec![
            epic_issue("A-1", Some("2024-01-01"), Some("2024-02-01")),
            epic_issue("B-1", Some("2024-02-01"), Some("2024-03-01")),
        ],
    };

    let doc = build_roadmap(&source, "q", &[], &fields(), "https://t.example.net")
        .await
        .unwrap();
    assert_eq!(doc.initiative_deps, vec![("X-1".to_string(), "X-2".to_string())]);
    assert!(doc.epic_deps.is_empty());

    let init_keys: Vec<&str> = doc.initiatives.iter().map(|i| i.key.as_str()).collect();
    for (from, to) in &doc.initiative_deps {
        assert!(init_keys.contains(&from.as_str()));
        assert!(init_keys.contains(&to.as_str()));
        assert_ne!(from, to);
    }
}

#[tokio::test]
async fn empty_result_surfaces_no_issues() {
    let source = MemorySource {
        initiatives: vec![],
        epics: vec![],
    };
    let result = build_roadmap(&source, "q", &[], &fields(), "https://t.example.net").await;
    assert!(matches!(result, Err(BuildError::NoIssues)));
}
