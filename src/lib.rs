// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Wellness-Hub: community fitness tracking for agency wellness programs
//!
//! This crate provides the backend API for user accounts, activity
//! points, progress logs, and the shared community feed.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::{CommunityService, ProgressService, UserService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub users: UserService,
    pub progress: ProgressService,
    pub community: CommunityService,
}
