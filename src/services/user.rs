// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User registration, authentication, and activity points.

use crate::db::{JsonStore, RecordKind};
use crate::error::AppError;
use crate::models::{Profile, User, UserProfile};
use crate::services::credential;

/// Service for user records.
#[derive(Clone)]
pub struct UserService {
    store: JsonStore,
}

impl UserService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Register a new user with a freshly derived credential.
    ///
    /// Usernames are unique by exact, case-sensitive match. The uniqueness
    /// check and the insert run under the users document lock, so two
    /// concurrent registrations of the same name cannot both win.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        profile: Profile,
    ) -> Result<(), AppError> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Username and password are required.".to_string(),
            ));
        }

        let credential = credential::derive(password)?;
        let record = User {
            username: username.to_string(),
            password_hash: credential.hash,
            salt: credential.salt,
            profile,
            points: 0,
        };

        self.store
            .update(RecordKind::Users, |users: &mut Vec<User>| {
                if users.iter().any(|u| u.username == record.username) {
                    return Err(AppError::Conflict("Username already exists.".to_string()));
                }
                users.push(record);
                Ok(())
            })
            .await?;

        tracing::info!(username, "User registered");
        Ok(())
    }

    /// Authenticate a user and return the credential-stripped profile.
    ///
    /// Unknown usernames and wrong passwords fail identically, so the
    /// response does not reveal which usernames exist.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserProfile, AppError> {
        let users: Vec<User> = self.store.load(RecordKind::Users).await;
        let user = users
            .into_iter()
            .find(|u| u.username == username)
            .ok_or(AppError::InvalidCredentials)?;

        if !credential::verify(password, &user.password_hash, &user.salt) {
            tracing::debug!(username, "Password verification failed");
            return Err(AppError::InvalidCredentials);
        }

        Ok(UserProfile::from(user))
    }

    /// Fetch a profile by username.
    pub async fn profile(&self, username: &str) -> Result<UserProfile, AppError> {
        let users: Vec<User> = self.store.load(RecordKind::Users).await;
        users
            .into_iter()
            .find(|u| u.username == username)
            .map(UserProfile::from)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", username)))
    }

    /// Add `delta` (possibly negative) to a user's points and return the
    /// new total. Totals saturate at the `i64` extremes.
    pub async fn add_points(&self, username: &str, delta: i64) -> Result<i64, AppError> {
        let total = self
            .store
            .update(RecordKind::Users, |users: &mut Vec<User>| {
                let user = users
                    .iter_mut()
                    .find(|u| u.username == username)
                    .ok_or_else(|| AppError::NotFound(format!("User {} not found", username)))?;
                user.points = user.points.saturating_add(delta);
                Ok(user.points)
            })
            .await?;

        tracing::debug!(username, delta, total, "Points updated");
        Ok(total)
    }
}
