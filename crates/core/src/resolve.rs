// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Epic membership resolution.

use crate::raw::RawIssue;

/// Resolve which epics belong to one initiative.
///
/// The result is the ordered, de-duplicated union of three paths:
/// 1. epics reached via an outward issue link of a followed type — an
///    empty `followed_link_types` set means every outward link type
///    counts;
/// 2. epics reached via the subtask hierarchy;
/// 3. epics reached via the parent field (`parent_children`, discovered
///    through a separate membership query).
///
/// The link-type filter scopes only path 1; hierarchy membership is
/// always included. Zero epics is a valid result: the initiative then
/// carries an empty list and both derived dates stay undefined.
pub fn resolve_epics(
    initiative: &RawIssue,
    parent_children: &[String],
    followed_link_types: &[String],
) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();

    for link in &initiative.fields.issuelinks {
        if !followed_link_types.is_empty() {
            let type_name = link
                .link_type
                .as_ref()
                .map(|t| t.name.as_str())
                .unwrap_or("");
            if !followed_link_types.iter().any(|t| t == type_name) {
                continue;
            }
        }
        let outward = match &link.outward {
            Some(o) => o,
            None => continue,
        };
        if outward.is_epic() {
            push_unique(&mut keys, &outward.key);
        }
    }

    for subtask in &initiative.fields.subtasks {
        if subtask.is_epic() {
            push_unique(&mut keys, &subtask.key);
        }
    }

    for child in parent_children {
        push_unique(&mut keys, child);
    }

    keys
}

fn push_unique(keys: &mut Vec<String>, key: &str) {
    if !key.is_empty() && !keys.iter().any(|k| k == key) {
        keys.push(key.to_string());
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
