// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;

use wellness_hub::config::Config;
use wellness_hub::db::JsonStore;
use wellness_hub::routes::create_router;
use wellness_hub::services::{CommunityService, ProgressService, UserService};
use wellness_hub::AppState;

/// Create a test app backed by the given store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app_with_store(store: JsonStore) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        users: UserService::new(store.clone()),
        progress: ProgressService::new(store.clone()),
        community: CommunityService::new(store),
    });

    (create_router(state.clone()), state)
}

/// Create a test app with an in-memory store.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_store(JsonStore::in_memory())
}
