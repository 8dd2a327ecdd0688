// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency-edge extraction.

use std::collections::BTreeSet;

use crate::raw::RawIssue;

/// Collect same-kind dependency edges from outward links.
///
/// An edge (A→B) exists when A holds an outward link to B and both keys
/// are members of the given set, so initiative edges and epic edges are
/// extracted independently and never mix kinds. Outward-only avoids
/// double counting: the inward side is the mirror held by the other
/// issue. Self-loops are excluded, duplicates collapsed, first-seen
/// order preserved. Edges mirror the raw link graph exactly; there is no
/// transitive closure.
pub fn extract_deps<'a, I>(issues: I, members: &BTreeSet<String>) -> Vec<(String, String)>
where
    I: IntoIterator<Item = &'a RawIssue>,
{
    let mut seen: BTreeSet<(String, String)> = BTreeSet::new();
    let mut edges = Vec::new();
    for issue in issues {
        for link in &issue.fields.issuelinks {
            let outward = match &link.outward {
                Some(o) => o,
                None => continue,
            };
            if outward.key.is_empty() || outward.key == issue.key {
                continue;
            }
            if !members.contains(&outward.key) {
                continue;
            }
            let pair = (issue.key.clone(), outward.key.clone());
            if seen.insert(pair.clone()) {
                edges.push(pair);
            }
        }
    }
    edges
}

#[cfg(test)]
#[path = "deps_tests.rs"]
mod tests;
