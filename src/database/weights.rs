// ABOUTME: Weight sample storage: append-only timestamped measurements per identity
// ABOUTME: Retrieval is newest first, matching what the chart builder expects as input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use sqlx::Row;
use uuid::Uuid;

use super::{parse_uuid, Database, DatabaseError};
use crate::models::WeightSample;

impl Database {
    /// Create the weight samples table and its per-identity index
    pub(super) async fn migrate_weights(&self) -> Result<(), DatabaseError> {
        self.run_migration(
            r"
            CREATE TABLE IF NOT EXISTS weight_samples (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                weight_kg REAL NOT NULL CHECK (weight_kg > 0),
                recorded_at TEXT NOT NULL
            )
            ",
        )
        .await?;

        self.run_migration(
            r"
            CREATE INDEX IF NOT EXISTS idx_weight_samples_user_recorded
            ON weight_samples (user_id, recorded_at DESC)
            ",
        )
        .await
    }

    /// Append a weight sample
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn insert_weight_sample(&self, sample: &WeightSample) -> Result<(), DatabaseError> {
        sqlx::query(
            r"
            INSERT INTO weight_samples (id, user_id, weight_kg, recorded_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(sample.id.to_string())
        .bind(sample.user_id.to_string())
        .bind(sample.weight_kg)
        .bind(&sample.recorded_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Newest-first weight samples for `user_id`, at most `limit` rows
    ///
    /// Rows are ordered by the instant `recorded_at` denotes, so RFC 3339 and
    /// naive `YYYY-MM-DD HH:MM:SS` rows interleave correctly. Rows whose
    /// timestamp `SQLite` cannot read sort last. Ties fall back to insertion
    /// order, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn list_weight_samples(
        &self,
        user_id: Uuid,
        limit: u32,
    ) -> Result<Vec<WeightSample>, DatabaseError> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, weight_kg, recorded_at
            FROM weight_samples
            WHERE user_id = $1
            ORDER BY julianday(recorded_at) DESC, rowid DESC
            LIMIT $2
            ",
        )
        .bind(user_id.to_string())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<WeightSample, DatabaseError> {
                let id: String = row.try_get("id")?;
                let owner: String = row.try_get("user_id")?;
                Ok(WeightSample {
                    id: parse_uuid("weight_samples.id", &id)?,
                    user_id: parse_uuid("weight_samples.user_id", &owner)?,
                    weight_kg: row.try_get("weight_kg")?,
                    recorded_at: row.try_get("recorded_at")?,
                })
            })
            .collect()
    }
}
