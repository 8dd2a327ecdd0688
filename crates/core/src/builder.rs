// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Roadmap model construction.
//!
//! [`build_roadmap`] drives the fetch collaborator through the rounds a
//! roadmap needs — initiative search, child-epic discovery, bulk epic
//! detail, story counting, project names — and assembles the final
//! [`RoadmapDocument`]. The document is built fresh per request; nothing
//! is shared or cached across builds.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::category::StatusCategory;
use crate::dates::{derive_span, padded_bounds};
use crate::deps::extract_deps;
use crate::error::{BuildError, Result};
use crate::model::{project_key, Epic, Initiative, RoadmapDocument};
use crate::raw::RawIssue;
use crate::resolve::resolve_epics;
use crate::source::IssueSource;

/// The two configured custom-field identifiers carrying epic dates.
#[derive(Debug, Clone)]
pub struct DateFields {
    pub start: String,
    pub end: String,
}

impl DateFields {
    fn as_vec(&self) -> Vec<String> {
        vec![self.start.clone(), self.end.clone()]
    }
}

/// Per-epic child-item counts, folded from a parent-membership query.
#[derive(Debug, Clone, Copy, Default)]
struct StoryCounts {
    total: u32,
    done: u32,
    cancelled: u32,
    inprogress: u32,
}

/// Build a roadmap document for one query.
///
/// Fails with [`BuildError::NoIssues`] when the search matches nothing
/// and [`BuildError::NoUsableDates`] when no epic anywhere carries a
/// date to anchor the timeline on. Supplementary fetch rounds
/// (parent-field children, epic detail, story counts, project names)
/// degrade on failure instead of aborting; only the initial search
/// propagates collaborator errors.
pub async fn build_roadmap(
    source: &dyn IssueSource,
    query: &str,
    followed_link_types: &[String],
    fields: &DateFields,
    base_url: &str,
) -> Result<RoadmapDocument> {
    let date_fields = fields.as_vec();
    let base = base_url.trim_end_matches('/');

    let raw_initiatives = source.search(query, &date_fields).await?;
    if raw_initiatives.is_empty() {
        return Err(BuildError::NoIssues);
    }
    tracing::debug!(count = raw_initiatives.len(), "fetched initiatives");

    let initiative_keys: Vec<String> = raw_initiatives.iter().map(|i| i.key.clone()).collect();
    let initiative_key_set: BTreeSet<String> = initiative_keys.iter().cloned().collect();

    // Company-managed trackers attach child epics through the parent
    // field without surfacing them in issuelinks or subtasks; discover
    // those in a separate membership round.
    let parent_children = fetch_parent_children(source, &initiative_keys, &date_fields).await;

    let mut epic_keys_per_initiative: Vec<Vec<String>> = Vec::with_capacity(raw_initiatives.len());
    let mut epic_key_set: BTreeSet<String> = BTreeSet::new();
    for raw in &raw_initiatives {
        let children = parent_children
            .get(&raw.key)
            .map(|v| v.as_slice())
            .unwrap_or(&[]);
        let keys = resolve_epics(raw, children, followed_link_types);
        epic_key_set.extend(keys.iter().cloned());
        epic_keys_per_initiative.push(keys);
    }

    let epic_keys_sorted: Vec<String> = epic_key_set.iter().cloned().collect();
    let epic_data = fetch_epic_details(source, &epic_keys_sorted, &date_fields).await;
    let story_counts = fetch_story_counts(source, &epic_keys_sorted, &epic_key_set).await;

    let initiative_deps = extract_deps(raw_initiatives.iter(), &initiative_key_set);
    let epic_deps = extract_deps(epic_data.values(), &epic_key_set);

    let mut initiatives: Vec<Initiative> = Vec::with_capacity(raw_initiatives.len());
    let mut all_dates: Vec<NaiveDate> = Vec::new();

    for (raw, keys) in raw_initiatives.iter().zip(&epic_keys_per_initiative) {
        let mut epics: Vec<Epic> = Vec::with_capacity(keys.len());
        for key in keys {
            // Epics without fetched detail are dropped, never invented.
            let detail = match epic_data.get(key) {
                Some(d) => d,
                None => continue,
            };
            let start_date = detail.date_field(&fields.start);
            let end_date = detail.date_field(&fields.end);
            if let Some(date) = start_date {
                all_dates.push(date);
            }
            if let Some(date) = end_date {
                all_dates.push(date);
            }
            let counts = story_counts.get(key).copied().unwrap_or_default();
            epics.push(Epic {
                key: key.clone(),
                title: detail.fields.summary.clone(),
                url: format!("{}/browse/{}", base, key),
                status: detail.status_name().to_string(),
                status_category: detail.status_category(),
                start_date,
                end_date,
                total_stories: counts.total,
                done_stories: counts.done,
                cancelled_stories: counts.cancelled,
                inprogress_stories: counts.inprogress,
            });
        }

        let (start_date, end_date) = derive_span(&epics);
        initiatives.push(Initiative {
            key: raw.key.clone(),
            title: raw.fields.summary.clone(),
            url: format!("{}/browse/{}", base, raw.key),
            status: raw.status_name().to_string(),
            status_category: raw.status_category(),
            start_date,
            end_date,
            epics,
        });
    }

    let (timeline_start, timeline_end) =
        padded_bounds(all_dates.iter().copied()).ok_or(BuildError::NoUsableDates)?;

    let project_names = resolve_project_names(source, &initiatives).await;

    Ok(RoadmapDocument {
        timeline_start,
        timeline_end,
        project_names,
        initiatives,
        initiative_deps,
        epic_deps,
    })
}

/// Map initiative key → child epic keys found via the parent field.
/// Failure on this supplementary path degrades to "no extra children".
async fn fetch_parent_children(
    source: &dyn IssueSource,
    initiative_keys: &[String],
    date_fields: &[String],
) -> BTreeMap<String, Vec<String>> {
    let raw = match source.bulk_children_of(initiative_keys, date_fields).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("child-epic discovery failed, continuing without: {}", e);
            return BTreeMap::new();
        }
    };

    let mut children: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for child in &raw {
        if !child.is_epic() {
            continue;
        }
        let parent = match child.parent_key() {
            Some(p) => p.to_string(),
            None => continue,
        };
        children.entry(parent).or_default().push(child.key.clone());
    }
    children
}

/// Fetch full epic records keyed by issue key. A failed fetch degrades to
/// an empty map: the affected epics disappear from the document rather
/// than appearing with fabricated fields.
async fn fetch_epic_details(
    source: &dyn IssueSource,
    epic_keys: &[String],
    date_fields: &[String],
) -> BTreeMap<String, RawIssue> {
    if epic_keys.is_empty() {
        return BTreeMap::new();
    }
    match source.bulk_fetch(epic_keys, date_fields).await {
        Ok(raw) => raw.into_iter().map(|i| (i.key.clone(), i)).collect(),
        Err(e) => {
            tracing::warn!("epic detail fetch failed, continuing without: {}", e);
            BTreeMap::new()
        }
    }
}

/// Count each epic's child stories by refined category. The subtask field
/// only captures sub-task type issues, so children are found through the
/// parent field instead. Failure degrades to zero counts.
async fn fetch_story_counts(
    source: &dyn IssueSource,
    epic_keys: &[String],
    epic_key_set: &BTreeSet<String>,
) -> BTreeMap<String, StoryCounts> {
    if epic_keys.is_empty() {
        return BTreeMap::new();
    }
    let raw = match source.bulk_children_of(epic_keys, &[]).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("story count fetch failed, continuing without: {}", e);
            return BTreeMap::new();
        }
    };

    let mut counts: BTreeMap<String, StoryCounts> = BTreeMap::new();
    for story in &raw {
        let parent = match story.parent_key() {
            Some(p) if epic_key_set.contains(p) => p.to_string(),
            _ => continue,
        };
        let entry = counts.entry(parent).or_default();
        entry.total += 1;
        match story.status_category() {
            StatusCategory::Done => entry.done += 1,
            StatusCategory::Cancelled => entry.cancelled += 1,
            StatusCategory::Indeterminate => entry.inprogress += 1,
            StatusCategory::New => {}
        }
    }
    counts
}

/// Resolve display names for every project key in the result. Lookup
/// failures — per key or wholesale — fall back to the raw key and never
/// abort the build.
async fn resolve_project_names(
    source: &dyn IssueSource,
    initiatives: &[Initiative],
) -> BTreeMap<String, String> {
    let mut project_keys: BTreeSet<String> = BTreeSet::new();
    for initiative in initiatives {
        project_keys.insert(project_key(&initiative.key).to_string());
        for epic in &initiative.epics {
            project_keys.insert(project_key(&epic.key).to_string());
        }
    }
    let keys: Vec<String> = project_keys.iter().cloned().collect();

    let mut names = match source.project_names(&keys).await {
        Ok(names) => names,
        Err(e) => {
            tracing::warn!("project name lookup failed, using raw keys: {}", e);
            BTreeMap::new()
        }
    };
    for key in &keys {
        names.entry(key.clone()).or_insert_with(|| key.clone());
    }
    names
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
