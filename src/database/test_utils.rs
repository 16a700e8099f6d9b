// ABOUTME: Test utilities for database operations and in-memory test database creation
// ABOUTME: Provides helper functions for creating isolated test database instances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use crate::errors::AppResult;

/// Create a test database instance
///
/// Each call returns a fresh, isolated in-memory database.
///
/// # Errors
///
/// Returns an error if database initialization fails
pub async fn create_test_db() -> AppResult<Database> {
    Database::new("sqlite::memory:").await
}
