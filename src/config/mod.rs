// ABOUTME: Configuration management module for client settings
// ABOUTME: Environment-variable driven; no config files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Fitter
//!
//! - **Environment**: database location, session file, history limit, log level

/// Environment-based configuration
pub mod environment;

pub use environment::{DatabaseUrl, Environment, FitterConfig, LogLevel};
