// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Progress log entries.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One logged activity entry, immutable once appended.
///
/// `steps` and `minutes` serialize as explicit nulls when absent so the
/// stored document mirrors the shape clients submit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProgressEntry {
    /// Owning username, taken from the URL and not checked against the
    /// user records
    pub username: String,
    /// Steps walked, if reported
    pub steps: Option<i64>,
    /// Active minutes, if reported
    pub minutes: Option<i64>,
    /// Server-assigned RFC 3339 creation time
    pub timestamp: String,
}
