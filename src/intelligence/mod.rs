// ABOUTME: Intelligence module for derived body metrics
// ABOUTME: Re-exports the pure BMI and weight-history chart derivations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Turns stored records into display-ready metrics. Nothing in here touches
//! storage or the identity provider; callers fetch first and derive second.

/// BMI and chart-series derivation
pub mod body_metrics;

pub use body_metrics::{
    bmi_value, build_chart_series, build_chart_series_in, compute_bmi, latest_weight,
};
