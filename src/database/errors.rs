// ABOUTME: Structured error types for database operations re-exported from fitter-core
// ABOUTME: Provides domain-specific errors with context for better error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fitter_core::errors::database::*;
