// ABOUTME: Domain models re-exported from fitter-core
// ABOUTME: Identity, Credentials, Profile, ProfileUpdate, WeightSample, ChartSeries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use fitter_core::models::*;
