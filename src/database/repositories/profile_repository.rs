// ABOUTME: Profile repository implementation
// ABOUTME: Handles profile creation at sign-up, lookup, and explicit edits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ProfileRepository;
use crate::database::{Database, DatabaseError};
use crate::models::{Profile, ProfileUpdate};
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

/// `SQLite` implementation of `ProfileRepository`
pub struct ProfileRepositoryImpl {
    db: Database,
}

impl ProfileRepositoryImpl {
    /// Create a new `ProfileRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryImpl {
    async fn create_if_missing(&self, user_id: Uuid) -> Result<Profile, DatabaseError> {
        self.db
            .insert_profile_if_missing(&Profile::empty(user_id, Utc::now()))
            .await?;
        self.db
            .get_profile(user_id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound {
                entity_type: "profile",
                entity_id: user_id.to_string(),
            })
    }

    async fn get(&self, user_id: Uuid) -> Result<Option<Profile>, DatabaseError> {
        self.db.get_profile(user_id).await
    }

    async fn update(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<Profile, DatabaseError> {
        let mut profile =
            self.db
                .get_profile(user_id)
                .await?
                .ok_or_else(|| DatabaseError::NotFound {
                    entity_type: "profile",
                    entity_id: user_id.to_string(),
                })?;
        profile.apply(update, Utc::now());
        self.db.save_profile(&profile).await?;
        Ok(profile)
    }
}
