// ABOUTME: Profile storage: one row per identity with name, age, and height
// ABOUTME: Created empty at sign-up and only changed by an explicit save
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use super::{parse_uuid, Database, DatabaseError};
use crate::models::Profile;

impl Database {
    /// Create the profiles table
    pub(super) async fn migrate_profiles(&self) -> Result<(), DatabaseError> {
        self.run_migration(
            r"
            CREATE TABLE IF NOT EXISTS profiles (
                user_id TEXT PRIMARY KEY,
                name TEXT NOT NULL DEFAULT '',
                age INTEGER NOT NULL DEFAULT 0 CHECK (age >= 0),
                height_cm REAL NOT NULL DEFAULT 0 CHECK (height_cm >= 0),
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .await
    }

    /// Insert a profile unless one already exists for its identity
    ///
    /// Returns `true` if a row was inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn insert_profile_if_missing(&self, profile: &Profile) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            r"
            INSERT INTO profiles (user_id, name, age, height_cm, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT(user_id) DO NOTHING
            ",
        )
        .bind(profile.user_id.to_string())
        .bind(&profile.name)
        .bind(i64::from(profile.age))
        .bind(profile.height_cm)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get the profile owned by `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is malformed
    pub async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>, DatabaseError> {
        let row = sqlx::query(
            r"
            SELECT user_id, name, age, height_cm, created_at, updated_at
            FROM profiles WHERE user_id = $1
            ",
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_profile).transpose()
    }

    /// Overwrite the editable fields of an existing profile
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the identity has no profile
    pub async fn save_profile(&self, profile: &Profile) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            r"
            UPDATE profiles
            SET name = $1, age = $2, height_cm = $3, updated_at = $4
            WHERE user_id = $5
            ",
        )
        .bind(&profile.name)
        .bind(i64::from(profile.age))
        .bind(profile.height_cm)
        .bind(profile.updated_at)
        .bind(profile.user_id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound {
                entity_type: "profile",
                entity_id: profile.user_id.to_string(),
            });
        }
        Ok(())
    }
}

fn row_to_profile(row: &SqliteRow) -> Result<Profile, DatabaseError> {
    let user_id: String = row.try_get("user_id")?;
    let age: i64 = row.try_get("age")?;
    Ok(Profile {
        user_id: parse_uuid("profiles.user_id", &user_id)?,
        name: row.try_get("name")?,
        age: u32::try_from(age).map_err(|e| DatabaseError::InvalidData {
            context: format!("profiles.age: {e}"),
        })?,
        height_cm: row.try_get("height_cm")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
