// ABOUTME: Application constants re-exported from fitter-core
// ABOUTME: Keeps `crate::constants::*` paths stable for the main crate and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fitter_core::constants::*;
