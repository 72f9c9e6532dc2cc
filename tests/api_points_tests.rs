// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity point accumulation tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;
use wellness_hub::models::Profile;

mod common;

async fn post_points(
    app: axum::Router,
    username: &str,
    payload: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/user/{}/points", username))
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_points_accumulate_and_allow_deductions() {
    let (app, state) = common::create_test_app();
    state
        .users
        .register("alice", "pw", Profile::default())
        .await
        .unwrap();

    let (status, reply) = post_points(app.clone(), "alice", json!({ "points": 5 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["points"], 5);

    let (status, reply) = post_points(app, "alice", json!({ "points": -2 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply["points"], 3);

    assert_eq!(state.users.profile("alice").await.unwrap().points, 3);
}

#[tokio::test]
async fn test_points_must_be_numeric() {
    let (app, state) = common::create_test_app();
    state
        .users
        .register("alice", "pw", Profile::default())
        .await
        .unwrap();

    for payload in [json!({ "points": "abc" }), json!({ "points": null }), json!({})] {
        let (status, reply) = post_points(app.clone(), "alice", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(reply["error"], "Points must be a number.");
    }

    // Rejected awards leave the total untouched
    assert_eq!(state.users.profile("alice").await.unwrap().points, 0);
}

#[tokio::test]
async fn test_points_for_unknown_user() {
    let (app, _state) = common::create_test_app();

    let (status, reply) = post_points(app, "ghost", json!({ "points": 5 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(reply["error"], "User ghost not found");
}

#[tokio::test]
async fn test_profile_includes_running_total() {
    let (app, state) = common::create_test_app();
    state
        .users
        .register("alice", "pw", Profile::default())
        .await
        .unwrap();
    state.users.add_points("alice", 7).await.unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/user/alice")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    let profile: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(profile["points"], 7);
    assert!(profile.get("password_hash").is_none());
}

#[tokio::test]
async fn test_profile_for_unknown_user() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/user/ghost")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
