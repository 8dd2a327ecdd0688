// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracker configuration management.
//!
//! Configuration is stored in `~/.trellis/config.toml` and includes:
//! - `[tracker]`: base URL, account email, API token
//! - `[roadmap]`: the two custom-field ids carrying epic start/end dates

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tr_core::DateFields;

use crate::error::{ConfigError, Result};

const CONFIG_DIR_NAME: &str = ".trellis";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration for the tracker connection and roadmap settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub roadmap: RoadmapConfig,
}

/// Connection settings for the tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Base URL, e.g. `https://example.atlassian.net`.
    pub url: String,
    /// Account email used for basic auth.
    pub email: String,
    /// API token used for basic auth.
    pub api_token: String,
}

/// Roadmap-specific settings: the custom date-field identifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadmapConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_field: Option<String>,
}

impl Config {
    /// Default location: `~/.trellis/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads and validates configuration from the given file.
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::Invalid(format!("failed to parse config: {}", e)))?;

        let problems = config.validate();
        if !problems.is_empty() {
            return Err(ConfigError::Invalid(problems.join("; ")));
        }
        Ok(config)
    }

    /// Saves configuration, creating the directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Invalid(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate connection values. Returns human-readable problems;
    /// empty means valid.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.tracker.url.is_empty() {
            problems.push("tracker URL is required".to_string());
        } else {
            let rest = self
                .tracker
                .url
                .strip_prefix("https://")
                .or_else(|| self.tracker.url.strip_prefix("http://"));
            match rest {
                Some(host) if !host.is_empty() => {}
                Some(_) => problems.push("tracker URL must include a domain".to_string()),
                None => {
                    problems.push("tracker URL must start with http:// or https://".to_string())
                }
            }
        }

        if self.tracker.email.is_empty() {
            problems.push("tracker email is required".to_string());
        } else if !self.tracker.email.contains('@') {
            problems.push("tracker email must be a valid email address".to_string());
        }

        if self.tracker.api_token.is_empty() {
            problems.push("tracker API token is required".to_string());
        }

        problems
    }

    /// The two configured date-field ids, required before any fetch.
    pub fn date_fields(&self) -> Result<DateFields> {
        match (&self.roadmap.start_date_field, &self.roadmap.end_date_field) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => Ok(DateFields {
                start: start.clone(),
                end: end.clone(),
            }),
            _ => Err(ConfigError::MissingDateFields),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
