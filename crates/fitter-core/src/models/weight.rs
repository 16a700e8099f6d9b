// ABOUTME: Timestamped weight measurement owned by one identity
// ABOUTME: Keeps the stored timestamp text and parses it leniently on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Formats the document store is known to hand back besides RFC 3339
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// A single weight measurement
///
/// `recorded_at` is kept as the text the store returned. Records written by
/// this crate are always RFC 3339, but rows imported from elsewhere may not
/// be, and the chart builder has to skip those rather than fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    /// Record ID
    pub id: Uuid,
    /// Owning identity
    pub user_id: Uuid,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Capture timestamp as stored
    pub recorded_at: String,
}

impl WeightSample {
    /// New sample captured at `at`
    #[must_use]
    pub fn new(user_id: Uuid, weight_kg: f64, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            weight_kg,
            recorded_at: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Parse the stored timestamp
    ///
    /// Accepts RFC 3339 and the naive `YYYY-MM-DD HH:MM:SS` form (read as
    /// UTC). Anything else yields `None`.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.recorded_at.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        NAIVE_TIMESTAMP_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_round_trips_own_format() {
        let at = Utc.with_ymd_and_hms(2025, 3, 9, 7, 30, 0).unwrap();
        let sample = WeightSample::new(Uuid::new_v4(), 72.4, at);
        assert_eq!(sample.timestamp(), Some(at));
    }

    #[test]
    fn test_timestamp_accepts_sqlite_style() {
        let mut sample = WeightSample::new(Uuid::new_v4(), 72.4, Utc::now());
        sample.recorded_at = "2025-01-02 03:04:05".into();
        assert_eq!(
            sample.timestamp(),
            Some(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap())
        );
    }

    #[test]
    fn test_timestamp_rejects_garbage() {
        let mut sample = WeightSample::new(Uuid::new_v4(), 72.4, Utc::now());
        sample.recorded_at = "yesterday-ish".into();
        assert_eq!(sample.timestamp(), None);

        sample.recorded_at = "2025-02-30T10:00:00Z".into();
        assert_eq!(sample.timestamp(), None);
    }
}
