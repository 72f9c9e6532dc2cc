// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Append-only per-user progress log.

use crate::db::{JsonStore, RecordKind};
use crate::error::AppError;
use crate::models::ProgressEntry;

/// Service for progress log entries.
#[derive(Clone)]
pub struct ProgressService {
    store: JsonStore,
}

impl ProgressService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Append an entry stamped with the current wall-clock time.
    ///
    /// At least one of `steps` and `minutes` must be present. The
    /// username is taken as given and not checked against the user
    /// records.
    pub async fn log(
        &self,
        username: &str,
        steps: Option<i64>,
        minutes: Option<i64>,
    ) -> Result<(), AppError> {
        if steps.is_none() && minutes.is_none() {
            return Err(AppError::Validation(
                "Steps or minutes are required.".to_string(),
            ));
        }

        let entry = ProgressEntry {
            username: username.to_string(),
            steps,
            minutes,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        self.store
            .update(RecordKind::Progress, |entries: &mut Vec<ProgressEntry>| {
                entries.push(entry);
                Ok(())
            })
            .await?;

        tracing::debug!(username, "Progress entry logged");
        Ok(())
    }

    /// All entries for `username`, oldest first.
    pub async fn for_user(&self, username: &str) -> Vec<ProgressEntry> {
        self.store
            .load::<ProgressEntry>(RecordKind::Progress)
            .await
            .into_iter()
            .filter(|entry| entry.username == username)
            .collect()
    }
}
