// ABOUTME: Application-wide constants for body metrics, validation, and configuration
// ABOUTME: Groups limits, sentinels, and environment variable names by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Body metric derivation constants
pub mod metrics {
    /// Sentinel returned when BMI cannot be derived
    pub const BMI_NOT_APPLICABLE: &str = "N/A";

    /// Maximum number of points in a chart series
    pub const CHART_MAX_POINTS: usize = 10;

    /// Centimeters per meter, used to convert stored height for BMI
    pub const CM_PER_METER: f64 = 100.0;
}

/// Input validation limits
pub mod limits {
    /// Minimum password length accepted at sign-up
    pub const MIN_PASSWORD_LENGTH: usize = 6;

    /// Youngest plausible age (years)
    pub const MIN_AGE_YEARS: u32 = 1;

    /// Oldest plausible age (years)
    pub const MAX_AGE_YEARS: u32 = 150;

    /// Shortest plausible height (cm)
    pub const MIN_HEIGHT_CM: f64 = 30.0;

    /// Tallest plausible height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;

    /// Longest accepted display name (characters)
    pub const MAX_NAME_LENGTH: usize = 100;

    /// Samples fetched per dashboard refresh when not configured
    pub const DEFAULT_HISTORY_LIMIT: u32 = 50;
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Database connection URL
    pub const DATABASE_URL: &str = "DATABASE_URL";

    /// Path of the persisted session file
    pub const SESSION_FILE: &str = "FITTER_SESSION_FILE";

    /// Number of weight samples fetched per refresh
    pub const HISTORY_LIMIT: &str = "FITTER_HISTORY_LIMIT";

    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";

    /// Log level directive
    pub const RUST_LOG: &str = "RUST_LOG";

    /// Log output format (pretty, json, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Default values
pub mod defaults {
    /// Default SQLite database location
    pub const DATABASE_URL: &str = "sqlite:./data/fitter.db";

    /// Directory created under the platform data dir
    pub const DATA_DIR_NAME: &str = "fitter";

    /// Session file name inside the data dir
    pub const SESSION_FILE_NAME: &str = "session.json";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the logging layer
    pub const FITTER: &str = "fitter";
}
