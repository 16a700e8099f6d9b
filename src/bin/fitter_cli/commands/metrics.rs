// ABOUTME: Profile, weight, and dashboard commands for fitter-cli
// ABOUTME: Every write is followed by the same dashboard refresh the interactive client performs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use fitter::{
    auth::IdentityProvider,
    errors::{AppError, AppResult},
    services::{DashboardService, RefreshTrigger, TrackingService},
    validation::ProfileForm,
};

use super::CliContext;
use crate::helpers::display::{display_dashboard, display_profile, display_weights};

/// Validate and save the profile form
pub async fn save_profile(
    ctx: &CliContext,
    name: String,
    age: String,
    height_cm: String,
) -> AppResult<()> {
    let identity = ctx.require_identity()?;
    let form = ProfileForm {
        name,
        age,
        height_cm,
    };
    let profile = TrackingService::new(ctx.database.clone())
        .save_profile(&identity, &form)
        .await?;

    println!("Profile saved.");
    display_profile(&profile);
    Ok(())
}

/// Record a weight, then show the refreshed BMI
pub async fn add_weight(ctx: &CliContext, value: &str, at: Option<&str>) -> AppResult<()> {
    let identity = ctx.require_identity()?;
    let tracking = TrackingService::new(ctx.database.clone());

    let sample = match at {
        Some(raw) => {
            let recorded_at = DateTime::parse_from_rfc3339(raw)
                .map_err(|e| AppError::invalid_format(format!("Invalid --at timestamp: {e}")))?
                .with_timezone(&Utc);
            tracking.add_weight_at(&identity, value, recorded_at).await?
        }
        None => tracking.add_today_weight(&identity, value).await?,
    };
    println!("Recorded {} kg at {}.", sample.weight_kg, sample.recorded_at);

    let dashboard = DashboardService::new(ctx.database.clone(), ctx.history_limit)
        .refresh(Some(&identity), RefreshTrigger::WeightWritten)
        .await;
    println!("BMI: {}", dashboard.bmi);
    Ok(())
}

/// Print weight history, newest first
pub async fn list_weights(ctx: &CliContext, limit: u32) -> AppResult<()> {
    let identity = ctx.require_identity()?;
    let samples = TrackingService::new(ctx.database.clone())
        .weight_history(&identity, limit)
        .await?;
    display_weights(&samples);
    Ok(())
}

/// Print the dashboard for whoever is signed in (or a guest)
pub async fn dashboard(ctx: &CliContext, json: bool) -> AppResult<()> {
    let identity = ctx.provider.current();
    let dashboard = DashboardService::new(ctx.database.clone(), ctx.history_limit)
        .refresh(identity.as_ref(), RefreshTrigger::Focus)
        .await;

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        display_dashboard(&dashboard);
    }
    Ok(())
}
