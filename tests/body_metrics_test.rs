// ABOUTME: Integration tests for BMI derivation and weight chart series construction
// ABOUTME: Covers no-data outputs, rounding, ten-point windowing, ordering, and bad timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Datelike, Duration, Local, Utc};
use common::{noon_utc, raw_sample};
use fitter::intelligence::{
    bmi_value, build_chart_series, build_chart_series_in, compute_bmi, latest_weight,
};
use fitter::models::WeightSample;
use uuid::Uuid;

/// `count` samples one day apart, newest first, weights 60.0, 61.0, ... oldest to newest
fn descending_daily_samples(count: usize) -> Vec<WeightSample> {
    let start = noon_utc(2024, 1, 1);
    let mut samples: Vec<WeightSample> = (0..count)
        .map(|i| {
            let day = i64::try_from(i).unwrap();
            WeightSample::new(
                Uuid::nil(),
                60.0 + f64::from(u32::try_from(i).unwrap()),
                start + Duration::days(day),
            )
        })
        .collect();
    samples.reverse();
    samples
}

#[test]
fn test_bmi_not_applicable_without_data() {
    assert_eq!(compute_bmi(None, 180.0), "N/A");
    assert_eq!(compute_bmi(Some(70.0), 0.0), "N/A");
    assert_eq!(compute_bmi(Some(70.0), -170.0), "N/A");
    assert_eq!(compute_bmi(Some(f64::NAN), 170.0), "N/A");
    assert_eq!(compute_bmi(Some(70.0), f64::INFINITY), "N/A");
}

#[test]
fn test_bmi_reference_value() {
    assert_eq!(compute_bmi(Some(70.0), 175.0), "22.9");
    assert_eq!(compute_bmi(Some(68.5), 170.0), "23.7");
}

#[test]
fn test_bmi_output_shape_for_positive_inputs() {
    let weights = [0.5, 3.2, 45.0, 70.0, 99.9, 150.25, 400.0];
    let heights = [30.0, 99.5, 150.0, 175.0, 212.3, 300.0];

    for &weight in &weights {
        for &height in &heights {
            let text = compute_bmi(Some(weight), height);
            let parsed: f64 = text.parse().unwrap_or_else(|_| panic!("'{text}' is not a number"));
            assert!(parsed.is_finite() && parsed >= 0.0, "{text}");

            let (_, fraction) = text.split_once('.').unwrap();
            assert_eq!(fraction.len(), 1, "{text} should have one fractional digit");
        }
    }
}

#[test]
fn test_bmi_value_matches_formatted_string() {
    let value = bmi_value(Some(80.0), 180.0).unwrap();
    assert_eq!(format!("{value:.1}"), compute_bmi(Some(80.0), 180.0));
    assert_eq!(bmi_value(None, 180.0), None);
}

#[test]
fn test_latest_weight_is_newest_sample() {
    let samples = descending_daily_samples(3);
    assert_eq!(latest_weight(&samples), Some(62.0));
    assert_eq!(latest_weight(&[]), None);
}

#[test]
fn test_chart_empty_input() {
    assert_eq!(build_chart_series(&[]), None);
}

#[test]
fn test_chart_keeps_latest_ten_in_ascending_order() {
    let samples = descending_daily_samples(12);
    let chart = build_chart_series_in(&samples, &Utc).unwrap();

    assert_eq!(chart.len(), 10);
    assert_eq!(
        chart.values,
        vec![62.0, 63.0, 64.0, 65.0, 66.0, 67.0, 68.0, 69.0, 70.0, 71.0]
    );
    assert_eq!(chart.labels.first().map(String::as_str), Some("1/3"));
    assert_eq!(chart.labels.last().map(String::as_str), Some("1/12"));
}

#[test]
fn test_chart_labels_follow_local_calendar() {
    let samples = descending_daily_samples(12);
    let chart = build_chart_series(&samples).unwrap();

    let expected: Vec<String> = samples
        .iter()
        .rev()
        .skip(2)
        .map(|s| {
            let local = s.timestamp().unwrap().with_timezone(&Local);
            format!("{}/{}", local.month(), local.day())
        })
        .collect();
    assert_eq!(chart.labels, expected);
}

#[test]
fn test_chart_fewer_than_ten_samples() {
    let samples = descending_daily_samples(4);
    let chart = build_chart_series_in(&samples, &Utc).unwrap();
    assert_eq!(chart.labels, vec!["1/1", "1/2", "1/3", "1/4"]);
    assert_eq!(chart.values, vec![60.0, 61.0, 62.0, 63.0]);
}

#[test]
fn test_chart_skips_unparseable_timestamp() {
    let samples = vec![
        raw_sample(72.0, "2024-03-05T08:00:00.000Z"),
        raw_sample(99.0, "garbage"),
        raw_sample(71.0, "2024-03-04T08:00:00.000Z"),
    ];
    let chart = build_chart_series_in(&samples, &Utc).unwrap();
    assert_eq!(chart.labels, vec!["3/4", "3/5"]);
    assert_eq!(chart.values, vec![71.0, 72.0]);
}

#[test]
fn test_chart_all_timestamps_invalid() {
    let samples = vec![raw_sample(70.0, ""), raw_sample(71.0, "not a date")];
    assert_eq!(build_chart_series(&samples), None);
}

#[test]
fn test_chart_invalid_timestamps_do_not_shrink_window() {
    let mut samples = descending_daily_samples(10);
    samples.insert(3, raw_sample(1.0, "bad"));
    samples.insert(7, raw_sample(2.0, "also bad"));

    let chart = build_chart_series_in(&samples, &Utc).unwrap();
    assert_eq!(chart.len(), 10);
    assert!(!chart.values.contains(&1.0));
    assert!(!chart.values.contains(&2.0));
}

#[test]
fn test_chart_is_idempotent() {
    let samples = descending_daily_samples(12);
    assert_eq!(build_chart_series(&samples), build_chart_series(&samples));
}
