// ABOUTME: Structured error types for document store operations
// ABOUTME: Domain-specific database errors with context, plus sqlx conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised by the storage layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Could not open or reach the database
    #[error("Database connection failed: {context}")]
    ConnectionError {
        /// What was being attempted
        context: String,
    },

    /// A query failed to execute
    #[error("Database query failed: {context}")]
    QueryError {
        /// What was being attempted
        context: String,
    },

    /// Schema migration failed
    #[error("Database migration failed: {context}")]
    MigrationError {
        /// What was being attempted
        context: String,
    },

    /// A record that must exist was missing
    #[error("{entity_type} '{entity_id}' not found")]
    NotFound {
        /// Kind of record
        entity_type: &'static str,
        /// Key that was looked up
        entity_id: String,
    },

    /// A unique constraint was violated
    #[error("{entity_type} with this {field} already exists")]
    Duplicate {
        /// Kind of record
        entity_type: &'static str,
        /// Field carrying the unique constraint
        field: &'static str,
    },

    /// A stored row could not be decoded into its model
    #[error("Invalid stored data: {context}")]
    InvalidData {
        /// Which column or value was malformed
        context: String,
    },
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::NotFound {
                entity_type: "row",
                entity_id: String::new(),
            },
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::ConnectionError {
                    context: error.to_string(),
                }
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => Self::InvalidData {
                context: error.to_string(),
            },
            other => Self::QueryError {
                context: other.to_string(),
            },
        }
    }
}
