// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod community;
pub mod progress;
pub mod user;

pub use community::{CommunityPost, NewPost};
pub use progress::ProgressEntry;
pub use user::{Profile, User, UserProfile};
