// ABOUTME: Weight repository implementation
// ABOUTME: Appends samples and lists an identity's history newest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WeightRepository;
use crate::database::{Database, DatabaseError};
use crate::models::WeightSample;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// `SQLite` implementation of `WeightRepository`
pub struct WeightRepositoryImpl {
    db: Database,
}

impl WeightRepositoryImpl {
    /// Create a new `WeightRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WeightRepository for WeightRepositoryImpl {
    async fn append(
        &self,
        user_id: Uuid,
        weight_kg: f64,
        recorded_at: DateTime<Utc>,
    ) -> Result<WeightSample, DatabaseError> {
        let sample = WeightSample::new(user_id, weight_kg, recorded_at);
        self.db.insert_weight_sample(&sample).await?;
        Ok(sample)
    }

    async fn list_descending(
        &self,
        user_id: Uuid,
        limit: u32,
    ) -> Result<Vec<WeightSample>, DatabaseError> {
        self.db.list_weight_samples(user_id, limit).await
    }
}
