// ABOUTME: Pure body-metric derivations: BMI from latest weight and height, weight chart series
// ABOUTME: Total functions that map every missing or malformed input to a defined no-data value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Metrics
//!
//! BMI is `weight_kg / height_m^2` (Quetelet index), computed from the single
//! most recent weight sample and the profile height. The chart series is the
//! ten chronologically latest samples, oldest first, each reduced to a
//! `month/day` label and its weight.
//!
//! Neither function can fail. Missing data, zero height, and unparseable
//! timestamps all map to the documented "no data" output.

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};

use crate::constants::metrics::{BMI_NOT_APPLICABLE, CHART_MAX_POINTS, CM_PER_METER};
use crate::models::{ChartSeries, WeightSample};

/// Numeric BMI, or `None` when it cannot be derived
///
/// Returns `None` for absent weight, non-positive height, or any non-finite
/// input. The quotient itself is also checked: finite inputs that overflow
/// (`Some(1e308)` kg at 1 cm) or underflow a tiny height into infinity give
/// `None` rather than `inf`. Zero and negative weights are not rejected here;
/// validation keeps them out of storage, and this function must not panic on
/// them.
#[must_use]
pub fn bmi_value(latest_weight_kg: Option<f64>, height_cm: f64) -> Option<f64> {
    let weight_kg = latest_weight_kg?;
    if !weight_kg.is_finite() || !height_cm.is_finite() || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / CM_PER_METER;
    let bmi = weight_kg / (height_m * height_m);
    bmi.is_finite().then_some(bmi)
}

/// BMI formatted with exactly one decimal digit, or `"N/A"`
///
/// `"N/A"` covers every case where [`bmi_value`] is `None`, including a
/// result that overflows `f64`.
///
/// ```
/// use fitter::intelligence::compute_bmi;
///
/// assert_eq!(compute_bmi(Some(70.0), 175.0), "22.9");
/// assert_eq!(compute_bmi(None, 180.0), "N/A");
/// assert_eq!(compute_bmi(Some(70.0), 0.0), "N/A");
/// assert_eq!(compute_bmi(Some(1e308), 1.0), "N/A");
/// ```
#[must_use]
pub fn compute_bmi(latest_weight_kg: Option<f64>, height_cm: f64) -> String {
    bmi_value(latest_weight_kg, height_cm)
        .map_or_else(|| BMI_NOT_APPLICABLE.to_owned(), |bmi| format!("{bmi:.1}"))
}

/// Weight of the sample with the latest parseable timestamp
///
/// Chronology is decided by [`WeightSample::timestamp`], not by position or
/// by the stored text, so mixed timestamp formats compare correctly. Samples
/// whose timestamp cannot be parsed are ignored. When several samples share
/// the latest timestamp the earliest one in `samples_descending` wins, which
/// is the same sample [`build_chart_series_in`] places last.
#[must_use]
pub fn latest_weight(samples_descending: &[WeightSample]) -> Option<f64> {
    samples_descending
        .iter()
        .filter_map(|sample| sample.timestamp().map(|at| (at, sample.weight_kg)))
        .fold(None, |latest: Option<(DateTime<Utc>, f64)>, (at, weight_kg)| {
            match latest {
                Some((latest_at, _)) if latest_at >= at => latest,
                _ => Some((at, weight_kg)),
            }
        })
        .map(|(_, weight_kg)| weight_kg)
}

/// Chart series labelled in the local calendar
///
/// See [`build_chart_series_in`].
#[must_use]
pub fn build_chart_series(samples_descending: &[WeightSample]) -> Option<ChartSeries> {
    build_chart_series_in(samples_descending, &Local)
}

/// Chart series labelled in the calendar of `tz`
///
/// `samples_descending` is the store's retrieval order (newest first). The
/// result is oldest to newest, holds at most ten points, and is `None` when
/// no sample has a parseable timestamp. Samples with unparseable timestamps
/// are dropped before the ten-point window is taken, so they never push a
/// valid sample out of the window.
///
/// The output is sorted by timestamp even if the input was not strictly
/// descending; samples sharing a timestamp keep their reversed input order.
#[must_use]
pub fn build_chart_series_in<Tz: TimeZone>(
    samples_descending: &[WeightSample],
    tz: &Tz,
) -> Option<ChartSeries> {
    let mut points: Vec<(DateTime<Utc>, f64)> = samples_descending
        .iter()
        .rev()
        .filter_map(|sample| sample.timestamp().map(|at| (at, sample.weight_kg)))
        .collect();
    points.sort_by_key(|(at, _)| *at);

    let window = &points[points.len().saturating_sub(CHART_MAX_POINTS)..];
    if window.is_empty() {
        return None;
    }

    let (labels, values) = window
        .iter()
        .map(|(at, weight_kg)| (month_day_label(&at.with_timezone(tz)), *weight_kg))
        .unzip();

    Some(ChartSeries { labels, values })
}

/// `month/day` with 1-indexed month and no zero padding
fn month_day_label<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format!("{}/{}", at.month(), at.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn sample_at(at: DateTime<Utc>, weight_kg: f64) -> WeightSample {
        WeightSample::new(Uuid::nil(), weight_kg, at)
    }

    #[test]
    fn test_bmi_rounds_to_one_decimal() {
        assert_eq!(compute_bmi(Some(70.0), 175.0), "22.9");
        assert_eq!(compute_bmi(Some(80.0), 200.0), "20.0");
    }

    #[test]
    fn test_bmi_not_applicable_cases() {
        assert_eq!(compute_bmi(None, 180.0), "N/A");
        assert_eq!(compute_bmi(Some(70.0), 0.0), "N/A");
        assert_eq!(compute_bmi(Some(70.0), -170.0), "N/A");
        assert_eq!(compute_bmi(Some(f64::NAN), 170.0), "N/A");
        assert_eq!(compute_bmi(Some(70.0), f64::INFINITY), "N/A");
    }

    #[test]
    fn test_bmi_overflow_is_not_applicable() {
        assert_eq!(bmi_value(Some(1e308), 1.0), None);
        assert_eq!(compute_bmi(Some(1e308), 1.0), "N/A");
        assert_eq!(compute_bmi(Some(70.0), f64::MIN_POSITIVE), "N/A");
    }

    #[test]
    fn test_bmi_tolerates_non_positive_weight() {
        assert_eq!(compute_bmi(Some(0.0), 170.0), "0.0");
        assert_eq!(compute_bmi(Some(-70.0), 175.0), "-22.9");
    }

    #[test]
    fn test_chart_uses_given_calendar() {
        // 23:30 UTC on Jan 31 is already Feb 1 two hours east
        let at = chrono::TimeZone::with_ymd_and_hms(&Utc, 2025, 1, 31, 23, 30, 0).unwrap();
        let samples = vec![sample_at(at, 70.0)];

        let utc = build_chart_series_in(&samples, &Utc).unwrap();
        assert_eq!(utc.labels, vec!["1/31"]);

        let east = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        let shifted = build_chart_series_in(&samples, &east).unwrap();
        assert_eq!(shifted.labels, vec!["2/1"]);
    }

    #[test]
    fn test_latest_weight_follows_parsed_time() {
        let base = Utc::now();
        let mut naive = sample_at(base, 80.0);
        naive.recorded_at = "2025-01-02 03:00:00".into();
        let mut rfc3339 = sample_at(base, 60.0);
        rfc3339.recorded_at = "2025-01-02T01:00:00.000Z".into();
        let mut garbage = sample_at(base, 140.0);
        garbage.recorded_at = "unknown".into();

        // Text order puts the earlier RFC 3339 row first
        let samples = vec![garbage, rfc3339, naive];
        assert_eq!(latest_weight(&samples), Some(80.0));

        let series = build_chart_series_in(&samples, &Utc).unwrap();
        assert_eq!(series.values.last().copied(), latest_weight(&samples));
    }

    #[test]
    fn test_latest_weight_tie_matches_chart() {
        let at = Utc::now();
        let samples = vec![sample_at(at, 70.0), sample_at(at, 71.0)];
        assert_eq!(latest_weight(&samples), Some(70.0));
        let series = build_chart_series_in(&samples, &Utc).unwrap();
        assert_eq!(series.values, vec![71.0, 70.0]);
    }

    #[test]
    fn test_latest_weight_without_parseable_timestamp() {
        let mut sample = sample_at(Utc::now(), 70.0);
        sample.recorded_at = "yesterday".into();
        assert_eq!(latest_weight(&[sample]), None);
        assert_eq!(latest_weight(&[]), None);
    }

    #[test]
    fn test_chart_sorts_out_of_order_input() {
        let base = Utc::now();
        let samples = vec![
            sample_at(base - Duration::days(1), 71.0),
            sample_at(base, 70.0),
            sample_at(base - Duration::days(2), 72.0),
        ];
        let series = build_chart_series_in(&samples, &Utc).unwrap();
        assert_eq!(series.values, vec![72.0, 71.0, 70.0]);
    }
}
