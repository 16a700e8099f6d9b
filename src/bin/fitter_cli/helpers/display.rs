// ABOUTME: Output formatting helpers for fitter-cli
// ABOUTME: Provides consistent display functions for identities, profiles, weights, and dashboards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitter::{
    models::{Identity, Profile, WeightSample},
    services::Dashboard,
};

/// Display the signed-in identity, or say nobody is
pub fn display_identity(identity: Option<&Identity>) {
    match identity {
        Some(identity) => {
            println!("Signed in as {}", identity.email);
            println!("   User ID: {}", identity.user_id);
        }
        None => println!("Not signed in."),
    }
}

/// Display a saved profile
pub fn display_profile(profile: &Profile) {
    println!("   Name: {}", profile.name);
    println!(
        "   Age: {}",
        profile
            .age_years()
            .map_or_else(|| "not set".to_owned(), |age| age.to_string())
    );
    println!(
        "   Height: {}",
        profile
            .height()
            .map_or_else(|| "not set".to_owned(), |cm| format!("{cm} cm"))
    );
}

/// Display weight samples as a table
pub fn display_weights(samples: &[WeightSample]) {
    if samples.is_empty() {
        println!("No weights recorded yet.");
        return;
    }
    println!("{:<28} {:>10}", "Recorded at", "Weight (kg)");
    println!("{}", "=".repeat(40));
    for sample in samples {
        println!("{:<28} {:>10.1}", sample.recorded_at, sample.weight_kg);
    }
}

/// Display the dashboard with a simple text chart
pub fn display_dashboard(dashboard: &Dashboard) {
    println!("{}", dashboard.greeting);
    println!("{}", "=".repeat(50));

    if let Some(profile) = &dashboard.profile {
        display_profile(profile);
    }
    if let Some(weight_kg) = dashboard.latest_weight_kg {
        println!("   Latest weight: {weight_kg} kg");
    }
    println!("   BMI: {}", dashboard.bmi);

    match &dashboard.chart {
        Some(chart) => {
            println!("\nWeight trend:");
            for (label, weight_kg) in chart.points() {
                println!("   {label:>5}  {weight_kg:>6.1}  {}", bar(weight_kg, chart.values.as_slice()));
            }
        }
        None if dashboard.email.is_some() => println!("\nNo weight data yet."),
        None => {}
    }

    if let Some(notice) = &dashboard.notice {
        println!("\nNote: {notice}");
    }
}

/// Bar scaled between the smallest and largest plotted weight
fn bar(value: f64, values: &[f64]) -> String {
    const WIDTH: f64 = 30.0;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let fraction = if span > 0.0 { (value - min) / span } else { 1.0 };
    let len = (fraction * WIDTH).round().max(1.0) as usize;
    "#".repeat(len)
}
