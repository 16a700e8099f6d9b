// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory databases, and signed-in identities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `fitter`

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use fitter::{
    auth::LocalIdentityProvider,
    database::{test_utils::create_test_db, Database},
    models::{Credentials, Identity, WeightSample},
    services::TrackingService,
};
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Password used by every registered test account
pub const TEST_PASSWORD: &str = "correct-horse";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(create_test_db().await?)
}

/// Database, provider, and tracking service sharing one in-memory store
pub async fn create_test_stack() -> Result<(Database, LocalIdentityProvider, TrackingService)> {
    let database = create_test_database().await?;
    let provider = LocalIdentityProvider::new(database.clone());
    let tracking = TrackingService::new(database.clone());
    Ok((database, provider, tracking))
}

/// Register `email` with [`TEST_PASSWORD`] and return the signed-in identity
pub async fn register_user(
    tracking: &TrackingService,
    provider: &LocalIdentityProvider,
    email: &str,
) -> Result<Identity> {
    Ok(tracking
        .register(provider, &Credentials::new(email, TEST_PASSWORD))
        .await?)
}

/// Noon UTC on the given day
pub fn noon_utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Sample with an arbitrary stored timestamp string
pub fn raw_sample(weight_kg: f64, recorded_at: &str) -> WeightSample {
    WeightSample {
        id: Uuid::new_v4(),
        user_id: Uuid::nil(),
        weight_kg,
        recorded_at: recorded_at.to_owned(),
    }
}
