// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! trellis - Roadmap timeline server.
//!
//! Serves the roadmap document as JSON for a Jira-compatible tracker:
//! one document build per request, nothing shared across requests.
//!
//! Usage:
//!   trellis [--addr 127.0.0.1:8787] [--config <path>]

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use tr_jira::Config;

mod routes;

#[derive(Debug, Parser)]
#[command(name = "trellis", about = "Roadmap timeline server for a Jira-compatible tracker")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8787")]
    addr: SocketAddr,

    /// Config file path (default: ~/.trellis/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();
    let config_path = args
        .config
        .or_else(Config::default_path)
        .unwrap_or_else(|| PathBuf::from("config.toml"));
    tracing::info!("trellis starting, config={}", config_path.display());

    let app = routes::router(routes::AppState {
        config_path: Arc::new(config_path),
    });

    let listener = match tokio::net::TcpListener::bind(args.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", args.addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("listening on {}", args.addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", e);
        std::process::exit(1);
    }
}

fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
