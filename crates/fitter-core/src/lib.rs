// ABOUTME: Core types and constants for the Fitter body-metrics client
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitter Core
//!
//! Foundation crate providing shared types and constants for the Fitter
//! client. It has no I/O of its own so the main crate, the CLI, and tests can
//! all depend on it without pulling in the storage stack.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `DatabaseError`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Profile, weight sample, identity, and chart series types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, `WeightSample`, Identity, `ChartSeries`)
pub mod models;
