// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wellness-Hub API Server
//!
//! Backend for the agency wellness community: registration and logins,
//! activity points, progress logs, and the shared community feed.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wellness_hub::{
    config::Config,
    db::JsonStore,
    services::{CommunityService, ProgressService, UserService},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Wellness-Hub API");

    // Open the JSON document store
    let store = JsonStore::open(&config.data_dir).expect("Failed to open data directory");
    tracing::info!(data_dir = %config.data_dir.display(), "Record store ready");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        users: UserService::new(store.clone()),
        progress: ProgressService::new(store.clone()),
        community: CommunityService::new(store),
    });

    // Build router
    let app = wellness_hub::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wellness_hub=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
