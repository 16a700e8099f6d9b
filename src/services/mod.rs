// ABOUTME: Domain service layer composing identity, storage, and metric derivation
// ABOUTME: Provides front-end agnostic services reused by the CLI and by embedding applications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services take the signed-in [`Identity`](crate::models::Identity) as an
//! explicit parameter and talk to storage only through the repository traits.

/// Dashboard snapshot assembly and refresh triggers
pub mod dashboard;

/// Registration, weight entry, and profile editing
pub mod tracking;

pub use dashboard::{Dashboard, DashboardService, RefreshTrigger};
pub use tracking::TrackingService;
