// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Progress log routes.

use crate::error::Result;
use crate::models::ProgressEntry;
use crate::routes::MessageResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/user/{username}/progress",
        get(list_progress).post(log_progress),
    )
}

/// Progress submission; at least one of the two measures is required.
#[derive(Deserialize)]
pub struct LogProgressRequest {
    steps: Option<i64>,
    minutes: Option<i64>,
}

/// Append a progress entry for the user in the URL.
async fn log_progress(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Json(payload): Json<LogProgressRequest>,
) -> Result<Json<MessageResponse>> {
    state
        .progress
        .log(&username, payload.steps, payload.minutes)
        .await?;

    Ok(Json(MessageResponse {
        message: "Progress logged.".to_string(),
    }))
}

/// List the user's progress entries, oldest first. Unknown usernames
/// yield an empty list rather than an error.
async fn list_progress(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Json<Vec<ProgressEntry>> {
    Json(state.progress.for_user(&username).await)
}
