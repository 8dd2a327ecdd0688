// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tr-jira: Tracker client for the trellis roadmap service.
//!
//! Provides the TOML configuration at `~/.trellis/config.toml`, a
//! reqwest-based client implementing the core [`IssueSource`] trait, and
//! the retry policy wrapped around every outbound call.
//!
//! [`IssueSource`]: tr_core::IssueSource

pub mod client;
pub mod config;
pub mod error;
pub mod retry;

pub use client::JiraClient;
pub use config::Config;
pub use error::ConfigError;
pub use retry::RetryPolicy;
