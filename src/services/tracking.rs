// ABOUTME: Tracking service for registration, weight entry, and profile edits
// ABOUTME: Validates user-entered text before anything is written to the document store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::auth::IdentityProvider;
use crate::database::repositories::{
    ProfileRepository, ProfileRepositoryImpl, WeightRepository, WeightRepositoryImpl,
};
use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{Credentials, Identity, Profile, WeightSample};
use crate::validation::{parse_weight_entry, ProfileForm};

/// Write-side operations for a signed-in identity
#[derive(Clone)]
pub struct TrackingService {
    profiles: Arc<dyn ProfileRepository>,
    weights: Arc<dyn WeightRepository>,
}

impl TrackingService {
    /// Service backed by the `SQLite` repositories
    #[must_use]
    pub fn new(database: Database) -> Self {
        Self::with_repositories(
            Arc::new(ProfileRepositoryImpl::new(database.clone())),
            Arc::new(WeightRepositoryImpl::new(database)),
        )
    }

    /// Service over arbitrary repository implementations
    #[must_use]
    pub fn with_repositories(
        profiles: Arc<dyn ProfileRepository>,
        weights: Arc<dyn WeightRepository>,
    ) -> Self {
        Self { profiles, weights }
    }

    /// Create an account, sign it in, and give it an empty profile
    ///
    /// # Errors
    ///
    /// Returns the provider's error for invalid or already-used credentials,
    /// or a database error if the profile cannot be created
    pub async fn register(
        &self,
        provider: &dyn IdentityProvider,
        credentials: &Credentials,
    ) -> AppResult<Identity> {
        let identity = provider.sign_up(credentials).await?;
        self.profiles.create_if_missing(identity.user_id).await?;
        info!(user.id = %identity.user_id, "Registered new account");
        Ok(identity)
    }

    /// Record a weight typed by the user, stamped with the current time
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty, non-numeric, or non-positive
    /// input, or a database error if the append fails
    pub async fn add_today_weight(
        &self,
        identity: &Identity,
        text: &str,
    ) -> AppResult<WeightSample> {
        self.add_weight_at(identity, text, Utc::now()).await
    }

    /// Record a weight typed by the user at an explicit time
    ///
    /// # Errors
    ///
    /// Same as [`Self::add_today_weight`]
    pub async fn add_weight_at(
        &self,
        identity: &Identity,
        text: &str,
        recorded_at: DateTime<Utc>,
    ) -> AppResult<WeightSample> {
        let weight_kg = parse_weight_entry(text)?;

        let start = Instant::now();
        let result = self
            .weights
            .append(identity.user_id, weight_kg, recorded_at)
            .await;
        AppLogger::log_database_operation(
            "append",
            "weight_samples",
            result.is_ok(),
            elapsed_ms(start),
        );

        let sample = result.map_err(|e| {
            AppError::from(e)
                .with_user_id(identity.user_id)
                .with_resource_id("weight_samples")
        })?;
        debug!(user.id = %identity.user_id, sample.id = %sample.id, "Weight sample recorded");
        Ok(sample)
    }

    /// Validate and save the profile form
    ///
    /// The profile is created first if the identity has none yet.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad form, or a database error if the
    /// profile cannot be read or written
    pub async fn save_profile(&self, identity: &Identity, form: &ProfileForm) -> AppResult<Profile> {
        let update = form.validate()?;
        self.profiles.create_if_missing(identity.user_id).await?;

        let start = Instant::now();
        let result = self.profiles.update(identity.user_id, &update).await;
        AppLogger::log_database_operation("update", "profiles", result.is_ok(), elapsed_ms(start));
        result.map_err(|e| {
            AppError::from(e)
                .with_user_id(identity.user_id)
                .with_resource_id("profiles")
        })
    }

    /// Stored profile, if any
    ///
    /// # Errors
    ///
    /// Returns a database error if the lookup fails
    pub async fn profile(&self, identity: &Identity) -> AppResult<Option<Profile>> {
        Ok(self.profiles.get(identity.user_id).await?)
    }

    /// Newest-first weight history, at most `limit` samples
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails
    pub async fn weight_history(
        &self,
        identity: &Identity,
        limit: u32,
    ) -> AppResult<Vec<WeightSample>> {
        Ok(self
            .weights
            .list_descending(identity.user_id, limit)
            .await?)
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
