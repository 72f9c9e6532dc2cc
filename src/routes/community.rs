// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community feed routes.

use crate::error::Result;
use crate::models::{CommunityPost, NewPost};
use crate::routes::MessageResponse;
use crate::AppState;
use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/community", get(list_posts).post(create_post))
}

/// New post submission. `username` and `description` are required; the
/// rest is optional decoration.
#[derive(Deserialize, Validate)]
pub struct CreatePostRequest {
    #[serde(default)]
    #[validate(length(max = 64, message = "Username too long (max 64 characters)."))]
    username: String,
    #[validate(length(max = 200, message = "Title too long (max 200 characters)."))]
    title: Option<String>,
    #[serde(default)]
    #[validate(length(max = 2000, message = "Description too long (max 2000 characters)."))]
    description: String,
    image: Option<String>,
    duration: Option<String>,
    activity_type: Option<String>,
}

/// List every community post, oldest first.
async fn list_posts(State(state): State<Arc<AppState>>) -> Json<Vec<CommunityPost>> {
    Json(state.community.list().await)
}

/// Create a community post.
async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<Json<MessageResponse>> {
    payload.validate()?;

    state
        .community
        .create(NewPost {
            username: payload.username,
            title: payload.title,
            description: payload.description,
            image: payload.image,
            duration: payload.duration,
            activity_type: payload.activity_type,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Post created.".to_string(),
    }))
}
