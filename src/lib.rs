// ABOUTME: Main library entry point for the Fitter body-metrics client
// ABOUTME: Wires storage, identity, derivation, and dashboard modules together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitter
//!
//! Client core for a body-metrics tracker. Users authenticate, keep a profile
//! (name, age, height), log their weight over time, and get back a derived
//! BMI and a chart-ready weight history.
//!
//! ## Features
//!
//! - **Metric derivation**: pure BMI and chart-series functions that never fail
//! - **Document store**: `SQLite` storage behind repository traits keyed by identity
//! - **Identity provider**: sign-in, sign-up, sign-out, and change subscription
//! - **Dashboard refresh**: one entry point for focus, identity, and write triggers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fitter::auth::LocalIdentityProvider;
//! use fitter::database::Database;
//! use fitter::models::Credentials;
//! use fitter::services::{DashboardService, RefreshTrigger, TrackingService};
//!
//! # async fn example() -> fitter::errors::AppResult<()> {
//! let database = Database::new("sqlite::memory:").await?;
//! let provider = LocalIdentityProvider::new(database.clone());
//! let tracking = TrackingService::new(database.clone());
//!
//! let identity = tracking
//!     .register(&provider, &Credentials::new("ada@example.com", "hunter22"))
//!     .await?;
//! tracking.add_today_weight(&identity, "68.5").await?;
//!
//! let dashboard = DashboardService::new(database, 50)
//!     .refresh(Some(&identity), RefreshTrigger::WeightWritten)
//!     .await;
//! println!("BMI: {}", dashboard.bmi);
//! # Ok(())
//! # }
//! ```

/// Identity provider abstraction, local implementation, and session persistence
pub mod auth;

/// Environment-based configuration
pub mod config;

/// Application constants (re-exported from `fitter-core`)
pub mod constants;

/// Document store: database handle, migrations, and repositories
pub mod database;

/// Unified error handling (re-exported from `fitter-core`)
pub mod errors;

/// Pure body-metric derivations (BMI, chart series)
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Domain models (re-exported from `fitter-core`)
pub mod models;

/// Tracking and dashboard services
pub mod services;

/// User input parsing and validation
pub mod validation;
