// ABOUTME: Core data models for identities, profiles, weight samples, and charts
// ABOUTME: Re-exports the domain types shared by storage, services, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod chart;
mod identity;
mod profile;
mod weight;

pub use chart::ChartSeries;
pub use identity::{Credentials, Identity};
pub use profile::{Profile, ProfileUpdate};
pub use weight::WeightSample;
