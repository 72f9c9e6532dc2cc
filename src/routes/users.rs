// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User account routes: registration, login, profiles, and points.

use crate::error::{AppError, Result};
use crate::models::{Profile, UserProfile};
use crate::routes::MessageResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/user/{username}", get(get_user))
        .route("/api/user/{username}/points", post(add_points))
}

// ─────────────────────── Registration and login ───────────────────────

/// Registration request: credentials plus the optional wellness profile,
/// submitted flat in a single body.
#[derive(Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(max = 64, message = "Username too long (max 64 characters)."))]
    username: String,
    #[serde(default)]
    #[validate(length(max = 128, message = "Password too long (max 128 characters)."))]
    password: String,
    #[serde(flatten)]
    profile: Profile,
}

/// Register a new user.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>> {
    payload.validate()?;

    state
        .users
        .register(&payload.username, &payload.password, payload.profile)
        .await?;

    Ok(Json(MessageResponse {
        message: "User registered successfully.".to_string(),
    }))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// Authenticate a user and return the stored profile with the credential
/// fields stripped.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserProfile>> {
    let profile = state
        .users
        .authenticate(&payload.username, &payload.password)
        .await?;

    Ok(Json(profile))
}

// ─────────────────────── Profiles and points ───────────────────────

/// Fetch a user's profile by username.
async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<UserProfile>> {
    let profile = state.users.profile(&username).await?;
    Ok(Json(profile))
}

/// Point award request. `points` stays a raw JSON value so a non-numeric
/// submission maps to the documented validation error instead of a bare
/// deserialization rejection.
#[derive(Deserialize)]
pub struct AddPointsRequest {
    #[serde(default)]
    points: Option<serde_json::Value>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PointsResponse {
    pub points: i64,
}

/// Add points (positive or negative) to a user's running total.
async fn add_points(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Json(payload): Json<AddPointsRequest>,
) -> Result<Json<PointsResponse>> {
    let delta = parse_points(payload.points.as_ref())?;
    let points = state.users.add_points(&username, delta).await?;

    Ok(Json(PointsResponse { points }))
}

/// Extract an integer point delta from the submitted value.
fn parse_points(value: Option<&serde_json::Value>) -> Result<i64> {
    value
        .and_then(|v| v.as_i64())
        .ok_or_else(|| AppError::Validation("Points must be a number.".to_string()))
}
