// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bundled sample document.
//!
//! A credential-free roadmap conforming to the exact document shape, so
//! the timeline engines can be exercised without live tracker access.
//! Dates are laid out relative to `today` to keep the sample centered on
//! the current window.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

use crate::category::StatusCategory;
use crate::dates::{derive_span, padded_bounds};
use crate::model::{Epic, Initiative, RoadmapDocument};

const SAMPLE_URL: &str = "https://demo.example.net";

struct SampleEpic {
    key: &'static str,
    title: &'static str,
    status: &'static str,
    category: StatusCategory,
    start_offset: Option<i64>,
    end_offset: Option<i64>,
    stories: (u32, u32, u32, u32),
}

impl SampleEpic {
    fn build(&self, today: NaiveDate) -> Epic {
        let (total, done, cancelled, inprogress) = self.stories;
        Epic {
            key: self.key.to_string(),
            title: self.title.to_string(),
            url: format!("{}/browse/{}", SAMPLE_URL, self.key),
            status: self.status.to_string(),
            status_category: self.category,
            start_date: self.start_offset.map(|d| today + Duration::days(d)),
            end_date: self.end_offset.map(|d| today + Duration::days(d)),
            total_stories: total,
            done_stories: done,
            cancelled_stories: cancelled,
            inprogress_stories: inprogress,
        }
    }
}

fn initiative(
    key: &str,
    title: &str,
    status: &str,
    category: StatusCategory,
    epics: Vec<Epic>,
) -> Initiative {
    let (start_date, end_date) = derive_span(&epics);
    Initiative {
        key: key.to_string(),
        title: title.to_string(),
        url: format!("{}/browse/{}", SAMPLE_URL, key),
        status: status.to_string(),
        status_category: category,
        start_date,
        end_date,
        epics,
    }
}

/// Build the sample roadmap, anchored on `today`.
pub fn sample_document(today: NaiveDate) -> RoadmapDocument {
    use StatusCategory::{Cancelled, Done, Indeterminate, New};

    let platform = vec![
        SampleEpic {
            key: "PLAT-101",
            title: "API gateway migration",
            status: "In Progress",
            category: Indeterminate,
            start_offset: Some(-45),
            end_offset: Some(45),
            stories: (12, 7, 1, 3),
        },
        SampleEpic {
            key: "PLAT-102",
            title: "Service mesh rollout",
            status: "To Do",
            category: New,
            start_offset: Some(30),
            end_offset: Some(120),
            stories: (8, 0, 0, 1),
        },
        SampleEpic {
            key: "PLAT-103",
            title: "Observability uplift",
            status: "In Progress",
            category: Indeterminate,
            start_offset: None,
            end_offset: Some(180),
            stories: (6, 1, 0, 2),
        },
    ];
    let mobile = vec![
        SampleEpic {
            key: "MOB-11",
            title: "iOS MVP",
            status: "In Progress",
            category: Indeterminate,
            start_offset: Some(-20),
            end_offset: Some(60),
            stories: (10, 4, 0, 4),
        },
        SampleEpic {
            key: "MOB-12",
            title: "Android MVP",
            status: "To Do",
            category: New,
            start_offset: Some(50),
            end_offset: Some(120),
            stories: (9, 0, 0, 0),
        },
        SampleEpic {
            key: "MOB-13",
            title: "Push notifications",
            status: "To Do",
            category: New,
            start_offset: Some(100),
            end_offset: None,
            stories: (4, 0, 0, 0),
        },
    ];
    let analytics = vec![
        SampleEpic {
            key: "DATA-7",
            title: "Ingestion pipeline",
            status: "To Do",
            category: New,
            start_offset: Some(60),
            end_offset: Some(150),
            stories: (7, 0, 1, 0),
        },
        SampleEpic {
            key: "DATA-8",
            title: "Dashboard UI",
            status: "To Do",
            category: New,
            start_offset: None,
            end_offset: None,
            stories: (5, 0, 0, 0),
        },
    ];
    let legacy = vec![
        SampleEpic {
            key: "LEG-21",
            title: "Data extraction",
            status: "Done",
            category: Done,
            start_offset: Some(-150),
            end_offset: Some(-80),
            stories: (11, 11, 0, 0),
        },
        SampleEpic {
            key: "LEG-22",
            title: "Cutover and decommission",
            status: "Cancelled",
            category: Cancelled,
            start_offset: Some(-80),
            end_offset: Some(-10),
            stories: (6, 2, 4, 0),
        },
    ];

    let initiatives = vec![
        initiative(
            "PLAT-1",
            "Platform modernisation",
            "In Progress",
            Indeterminate,
            platform.iter().map(|e| e.build(today)).collect(),
        ),
        initiative(
            "MOB-1",
            "Mobile app launch",
            "In Progress",
            Indeterminate,
            mobile.iter().map(|e| e.build(today)).collect(),
        ),
        initiative(
            "DATA-1",
            "Analytics dashboard",
            "To Do",
            New,
            analytics.iter().map(|e| e.build(today)).collect(),
        ),
        initiative(
            "LEG-1",
            "Legacy system migration",
            "Cancelled",
            Cancelled,
            legacy.iter().map(|e| e.build(today)).collect(),
        ),
    ];

    let all_dates = initiatives
        .iter()
        .flat_map(|i| i.epics.iter())
        .flat_map(|e| [e.start_date, e.end_date])
        .flatten();
    let (timeline_start, timeline_end) = padded_bounds(all_dates).unwrap_or((today, today));

    let mut project_names = BTreeMap::new();
    project_names.insert("PLAT".to_string(), "Platform".to_string());
    project_names.insert("MOB".to_string(), "Mobile".to_string());
    project_names.insert("DATA".to_string(), "Analytics".to_string());
    project_names.insert("LEG".to_string(), "Legacy".to_string());

    RoadmapDocument {
        timeline_start,
        timeline_end,
        project_names,
        initiatives,
        initiative_deps: vec![
            ("PLAT-1".to_string(), "DATA-1".to_string()),
            ("LEG-1".to_string(), "PLAT-1".to_string()),
        ],
        epic_deps: vec![
            ("PLAT-101".to_string(), "PLAT-102".to_string()),
            ("MOB-11".to_string(), "MOB-12".to_string()),
            ("DATA-7".to_string(), "DATA-8".to_string()),
        ],
    }
}

#[cfg(test)]
#[path = "sample_tests.rs"]
mod tests;
