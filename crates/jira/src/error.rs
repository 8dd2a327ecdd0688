// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Configuration errors, all fatal and all raised before any fetch.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration not found at {0}\n  hint: create ~/.trellis/config.toml to set up")]
    NotFound(String),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("roadmap date fields are not configured\n  hint: add start_date_field and end_date_field to the [roadmap] section of ~/.trellis/config.toml")]
    MissingDateFields,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for configuration handling.
pub type Result<T> = std::result::Result<T, ConfigError>;
