// ABOUTME: Unified error types re-exported from fitter-core
// ABOUTME: AppError, AppResult, ErrorCode, and DatabaseError for the main crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fitter_core::errors::*;
