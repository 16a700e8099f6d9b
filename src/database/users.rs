// ABOUTME: Identity storage for the local identity provider
// ABOUTME: Handles account creation, lookup by email, and sign-in bookkeeping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use super::{parse_uuid, Database, DatabaseError};

/// Stored account row
///
/// Only the identity provider reads this; everything else sees an
/// [`Identity`](crate::models::Identity).
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Identity reference
    pub id: Uuid,
    /// Sign-in email (unique, case-insensitive)
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    /// Most recent successful sign-in
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

impl Database {
    /// Create the users table
    pub(super) async fn migrate_users(&self) -> Result<(), DatabaseError> {
        self.run_migration(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                email TEXT NOT NULL UNIQUE COLLATE NOCASE,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL,
                last_sign_in_at TEXT
            )
            ",
        )
        .await
    }

    /// Insert a new account
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Duplicate` if the email is already registered,
    /// or a query error otherwise
    pub async fn create_user(&self, user: &UserRecord) -> Result<(), DatabaseError> {
        sqlx::query(
            r"
            INSERT INTO users (id, email, password_hash, created_at, last_sign_in_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.last_sign_in_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                DatabaseError::Duplicate {
                    entity_type: "user",
                    field: "email",
                }
            }
            other => other.into(),
        })?;

        Ok(())
    }

    /// Look up an account by email (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, DatabaseError> {
        let row = sqlx::query(
            r"
            SELECT id, email, password_hash, created_at, last_sign_in_at
            FROM users WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| -> Result<UserRecord, DatabaseError> {
            let id: String = row.try_get("id")?;
            Ok(UserRecord {
                id: parse_uuid("users.id", &id)?,
                email: row.try_get("email")?,
                password_hash: row.try_get("password_hash")?,
                created_at: row.try_get("created_at")?,
                last_sign_in_at: row.try_get("last_sign_in_at")?,
            })
        })
        .transpose()
    }

    /// Record a successful sign-in
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails
    pub async fn touch_last_sign_in(
        &self,
        user_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), DatabaseError> {
        sqlx::query("UPDATE users SET last_sign_in_at = $1 WHERE id = $2")
            .bind(at)
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
