// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod community;
pub mod credential;
pub mod progress;
pub mod user;

pub use community::CommunityService;
pub use progress::ProgressService;
pub use user::UserService;
