// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community feed posts.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Stored community post. Posts are append-only and listed in the order
/// they were created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CommunityPost {
    /// Author username, stored as submitted
    pub username: String,
    pub title: Option<String>,
    pub description: String,
    /// Optional image, typically a data URL or an external link
    pub image: Option<String>,
    pub duration: Option<String>,
    pub activity_type: Option<String>,
    /// Server-assigned RFC 3339 creation time
    pub timestamp: String,
}

/// Input for a new post; the service stamps the creation time.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub username: String,
    pub title: Option<String>,
    pub description: String,
    pub image: Option<String>,
    pub duration: Option<String>,
    pub activity_type: Option<String>,
}
