// ABOUTME: SQLite document store for identities, profiles, and weight samples
// ABOUTME: Owns the connection pool and runs idempotent schema migrations on startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! Every record carries an owning `user_id` used as the filter key. The
//! [`repositories`] traits are the seam the services depend on; the
//! `Database` methods in the submodules are the `SQLite` implementation.

mod errors;
mod profiles;
/// Repository traits and their `SQLite` implementations
pub mod repositories;
/// In-memory database helpers for tests
pub mod test_utils;
mod users;
mod weights;

pub use errors::DatabaseError;
pub use users::UserRecord;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::{debug, info};

use crate::errors::AppResult;

/// Database manager for identities, profiles, and weight samples
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// `sqlite::memory:` is supported; the pool is pinned to one connection
    /// in that case so every query sees the same in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, the database cannot be
    /// opened, or a migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| DatabaseError::ConnectionError {
                context: format!("invalid database URL '{database_url}': {e}"),
            })?
            .create_if_missing(true);

        let is_memory = database_url.contains(":memory:");
        let pool = SqlitePoolOptions::new()
            .max_connections(if is_memory { 1 } else { 5 })
            .connect_with(options)
            .await
            .map_err(|e| DatabaseError::ConnectionError {
                context: e.to_string(),
            })?;

        let db = Self { pool };
        db.migrate().await?;

        info!(in_memory = is_memory, "Database initialized");
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index creation fails
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        self.migrate_users().await?;
        self.migrate_profiles().await?;
        self.migrate_weights().await?;
        debug!("Database migrations complete");
        Ok(())
    }

    async fn run_migration(&self, statement: &str) -> Result<(), DatabaseError> {
        sqlx::query(statement)
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| DatabaseError::MigrationError {
                context: e.to_string(),
            })
    }
}

fn parse_uuid(column: &str, raw: &str) -> Result<uuid::Uuid, DatabaseError> {
    uuid::Uuid::parse_str(raw).map_err(|e| DatabaseError::InvalidData {
        context: format!("{column}: {e}"),
    })
}
