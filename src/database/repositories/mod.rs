// ABOUTME: Repository traits for profile and weight-sample storage
// ABOUTME: The seam between services and the document store, keyed by owning identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Repository pattern for the document store
//!
//! Services hold `Arc<dyn ProfileRepository>` / `Arc<dyn WeightRepository>`
//! so a different backend (or a failing one in tests) can be swapped in
//! without touching the services.

mod profile_repository;
mod weight_repository;

pub use profile_repository::ProfileRepositoryImpl;
pub use weight_repository::WeightRepositoryImpl;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::DatabaseError;
use crate::models::{Profile, ProfileUpdate, WeightSample};

/// Profile storage keyed by owning identity
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Return the identity's profile, creating an empty one if none exists
    async fn create_if_missing(&self, user_id: Uuid) -> Result<Profile, DatabaseError>;

    /// Fetch the identity's profile
    async fn get(&self, user_id: Uuid) -> Result<Option<Profile>, DatabaseError>;

    /// Apply a validated edit to an existing profile and return the result
    async fn update(&self, user_id: Uuid, update: &ProfileUpdate)
        -> Result<Profile, DatabaseError>;
}

/// Append-only weight history keyed by owning identity
#[async_trait]
pub trait WeightRepository: Send + Sync {
    /// Append a sample captured at `recorded_at`
    async fn append(
        &self,
        user_id: Uuid,
        weight_kg: f64,
        recorded_at: DateTime<Utc>,
    ) -> Result<WeightSample, DatabaseError>;

    /// Newest-first samples, at most `limit`
    async fn list_descending(
        &self,
        user_id: Uuid,
        limit: u32,
    ) -> Result<Vec<WeightSample>, DatabaseError>;
}
