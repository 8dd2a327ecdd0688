// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP route handlers.
//!
//! The surface is JSON only: the roadmap build, the tracker's link-type
//! catalogue, a health probe, and the bundled sample document. Every
//! failure maps to a status code from the error taxonomy; no partial
//! document is ever returned.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

use tr_core::{build_roadmap, sample_document, BuildError, IssueSource, SourceError};
use tr_jira::{Config, ConfigError, JiraClient};

#[derive(Clone)]
pub struct AppState {
    pub config_path: Arc<PathBuf>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/roadmap", post(roadmap))
        .route("/api/link-types", get(link_types))
        .route("/api/demo", get(demo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Request body for a roadmap build.
#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub query: String,
    /// Link-type names to follow for epic discovery; empty follows all.
    #[serde(default)]
    pub link_types: Vec<String>,
}

async fn health(State(state): State<AppState>) -> Response {
    match Config::load(&state.config_path) {
        Ok(_) => Json(json!({ "status": "ok", "config_loaded": true })).into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "error",
                "config_loaded": false,
                "message": e.to_string(),
            })),
        )
            .into_response(),
    }
}

async fn roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Response {
    let query = request.query.trim();
    if query.is_empty() {
        return error_body(StatusCode::BAD_REQUEST, "query is required");
    }

    let config = match Config::load(&state.config_path) {
        Ok(config) => config,
        Err(e) => return config_failure(&e),
    };
    let fields = match config.date_fields() {
        Ok(fields) => fields,
        Err(e) => return config_failure(&e),
    };
    let client = match JiraClient::new(&config) {
        Ok(client) => client,
        Err(e) => return config_failure(&e),
    };
    let base_url = client.base_url().to_string();

    match build_roadmap(&client, query, &request.link_types, &fields, &base_url).await {
        Ok(doc) => Json(doc).into_response(),
        Err(BuildError::NoIssues) => {
            Json(json!({ "warning": BuildError::NoIssues.to_string() })).into_response()
        }
        Err(e) => error_body(build_failure_status(&e), &e.to_string()),
    }
}

async fn link_types(State(state): State<AppState>) -> Response {
    let config = match Config::load(&state.config_path) {
        Ok(config) => config,
        Err(e) => return config_failure(&e),
    };
    let client = match JiraClient::new(&config) {
        Ok(client) => client,
        Err(e) => return config_failure(&e),
    };
    match client.list_link_types().await {
        Ok(names) => Json(names).into_response(),
        Err(e) => error_body(source_failure_status(&e), &e.to_string()),
    }
}

/// The bundled sample document: no credentials, no tracker.
async fn demo() -> Response {
    let today = chrono::Utc::now().date_naive();
    Json(sample_document(today)).into_response()
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

/// Configuration problems are all service-not-ready.
fn config_failure(e: &ConfigError) -> Response {
    error_body(StatusCode::SERVICE_UNAVAILABLE, &e.to_string())
}

fn build_failure_status(e: &BuildError) -> StatusCode {
    match e {
        BuildError::NoIssues => StatusCode::OK,
        BuildError::NoUsableDates => StatusCode::UNPROCESSABLE_ENTITY,
        BuildError::Source(source) => source_failure_status(source),
    }
}

fn source_failure_status(e: &SourceError) -> StatusCode {
    match e {
        SourceError::Auth => StatusCode::UNAUTHORIZED,
        SourceError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        SourceError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        SourceError::Connection(_) | SourceError::Timeout | SourceError::Server(_) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        SourceError::Protocol(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
