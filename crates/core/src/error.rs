// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::source::SourceError;

/// Errors raised while constructing a roadmap document.
///
/// Collaborator failures propagate as [`BuildError::Source`]; the build
/// itself only fails outright when the result is empty or carries no date
/// to anchor the timeline on. Project-name lookups are not represented
/// here because they degrade to the raw key instead of failing the build.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("no issues found matching the query")]
    NoIssues,

    #[error("no epic has a usable start or end date\n  hint: populate the configured date fields on at least one epic")]
    NoUsableDates,

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// A specialized Result type for roadmap construction.
pub type Result<T> = std::result::Result<T, BuildError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
