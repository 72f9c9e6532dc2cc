// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Community feed of shared activity posts.

use crate::db::{JsonStore, RecordKind};
use crate::error::AppError;
use crate::models::{CommunityPost, NewPost};

/// Service for community posts.
#[derive(Clone)]
pub struct CommunityService {
    store: JsonStore,
}

impl CommunityService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// All posts, oldest first.
    pub async fn list(&self) -> Vec<CommunityPost> {
        self.store.load(RecordKind::Community).await
    }

    /// Append a post stamped with the current wall-clock time.
    ///
    /// The author name is stored as submitted and not checked against the
    /// user records.
    pub async fn create(&self, post: NewPost) -> Result<(), AppError> {
        if post.username.is_empty() || post.description.is_empty() {
            return Err(AppError::Validation(
                "Username and description are required.".to_string(),
            ));
        }

        let record = CommunityPost {
            username: post.username,
            title: post.title,
            description: post.description,
            image: post.image,
            duration: post.duration,
            activity_type: post.activity_type,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        self.store
            .update(RecordKind::Community, |posts: &mut Vec<CommunityPost>| {
                posts.push(record);
                Ok(())
            })
            .await?;

        tracing::debug!("Community post created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(username: &str, description: &str) -> NewPost {
        NewPost {
            username: username.to_string(),
            title: None,
            description: description.to_string(),
            image: None,
            duration: None,
            activity_type: None,
        }
    }

    #[tokio::test]
    async fn test_posts_listed_in_creation_order() {
        let community = CommunityService::new(JsonStore::in_memory());
        community.create(post("alice", "Morning run")).await.unwrap();
        community.create(post("bob", "Lunch walk")).await.unwrap();

        let posts = community.list().await;
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].description, "Morning run");
        assert_eq!(posts[1].description, "Lunch walk");
    }

    #[tokio::test]
    async fn test_create_requires_username_and_description() {
        let community = CommunityService::new(JsonStore::in_memory());

        let err = community.create(post("", "text")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = community.create(post("alice", "")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        assert!(community.list().await.is_empty());
    }
}
