// ABOUTME: Logging configuration and structured logging setup for the Fitter client
// ABOUTME: Configures log level, output format, and event helpers on top of tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration

use std::io;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Environment, FitterConfig, LogLevel};
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Most verbose level emitted by the client's own targets
    pub level: LogLevel,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// `JSON` format for machine consumption
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl LogFormat {
    /// Parse a format name, falling back to `Pretty`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            include_location: false,
            service_name: service_names::FITTER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Logging settings derived from the loaded client configuration
    ///
    /// Production builds record source locations. The format defaults to
    /// `Pretty` when `LOG_FORMAT` was not set.
    #[must_use]
    pub fn from_config(config: &FitterConfig) -> Self {
        Self {
            level: config.log_level,
            format: config.log_format.unwrap_or(LogFormat::Pretty),
            include_location: config.environment.is_production(),
            environment: config.environment,
            ..Self::default()
        }
    }

    /// Quiet configuration for the CLI
    ///
    /// `verbose` raises the level to debug. Otherwise the configured level is
    /// capped at warn so command output is not interleaved with routine
    /// events. The format defaults to `Compact`.
    #[must_use]
    pub fn for_cli(config: &FitterConfig, verbose: bool) -> Self {
        Self {
            level: if verbose {
                LogLevel::Debug
            } else {
                config.log_level.min(LogLevel::Warn)
            },
            format: config.log_format.unwrap_or(LogFormat::Compact),
            ..Self::from_config(config)
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(self.level.to_string())
            .add_directive(
                "sqlx=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                "sqlx::query=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                format!("fitter={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| self.level.to_tracing_level().into()),
            )
    }

    /// Initialize the global tracing subscriber
    ///
    /// Logs go to stderr so command output on stdout stays clean.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        result.map_err(|e| AppError::config(format!("Failed to initialize logging: {e}")))?;

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Fitter starting up"
        );
    }
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log sign-in, sign-up, and sign-out events
    pub fn log_auth_event(user_id: &str, event: &str, success: bool, details: Option<&str>) {
        if success {
            info!(
                user.id = %user_id,
                auth.event = %event,
                auth.success = %success,
                "Authentication event"
            );
        } else {
            warn!(
                user.id = %user_id,
                auth.event = %event,
                auth.success = %success,
                auth.details = details.unwrap_or(""),
                "Authentication event"
            );
        }
    }

    /// Log a failed sign-in for an email with no account
    ///
    /// There is no user ID to record, so only a redacted form of the email
    /// is logged, under its own field.
    pub fn log_unknown_account(event: &str, email: &str) {
        warn!(
            user.id = "unknown",
            user.email = %redact_email(email),
            auth.event = %event,
            auth.success = false,
            auth.details = "unknown email",
            "Authentication event"
        );
    }

    /// Log document store operations
    pub fn log_database_operation(operation: &str, table: &str, success: bool, duration_ms: u64) {
        info!(
            db.operation = %operation,
            db.table = %table,
            db.success = %success,
            db.duration_ms = %duration_ms,
            "Database operation"
        );
    }

    /// Log a dashboard refresh
    pub fn log_refresh(user_id: Option<&str>, trigger: &str, samples: usize, duration_ms: u64) {
        info!(
            user.id = user_id.unwrap_or("guest"),
            refresh.trigger = %trigger,
            refresh.samples = %samples,
            refresh.duration_ms = %duration_ms,
            "Dashboard refresh"
        );
    }
}

/// Mask an email for logs: first character of the local part, then the domain
///
/// Input without a usable `@` is masked entirely.
#[must_use]
pub fn redact_email(email: &str) -> String {
    match email.trim().split_once('@') {
        Some((local, domain)) if !domain.is_empty() => local
            .chars()
            .next()
            .map_or_else(|| format!("***@{domain}"), |first| format!("{first}***@{domain}")),
        _ => "***".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(environment: Environment, log_level: LogLevel) -> FitterConfig {
        FitterConfig {
            environment,
            log_level,
            log_format: None,
            database: crate::config::DatabaseUrl::Memory,
            session_file: "session.json".into(),
            history_limit: 50,
        }
    }

    #[test]
    fn test_from_config_follows_environment() {
        let logging = LoggingConfig::from_config(&config(Environment::Production, LogLevel::Debug));
        assert_eq!(logging.level, LogLevel::Debug);
        assert_eq!(logging.format, LogFormat::Pretty);
        assert!(logging.include_location);
        assert_eq!(logging.environment, Environment::Production);

        let logging = LoggingConfig::from_config(&config(Environment::Development, LogLevel::Info));
        assert!(!logging.include_location);
    }

    #[test]
    fn test_for_cli_caps_level_unless_verbose() {
        let base = config(Environment::Development, LogLevel::Info);
        let quiet = LoggingConfig::for_cli(&base, false);
        assert_eq!(quiet.level, LogLevel::Warn);
        assert_eq!(quiet.format, LogFormat::Compact);
        assert_eq!(LoggingConfig::for_cli(&base, true).level, LogLevel::Debug);

        let errors_only = config(Environment::Development, LogLevel::Error);
        assert_eq!(LoggingConfig::for_cli(&errors_only, false).level, LogLevel::Error);

        let json = FitterConfig {
            log_format: Some(LogFormat::Json),
            ..base
        };
        assert_eq!(LoggingConfig::for_cli(&json, false).format, LogFormat::Json);
    }

    #[test]
    fn test_redact_email() {
        assert_eq!(redact_email("ada@example.com"), "a***@example.com");
        assert_eq!(redact_email("@example.com"), "***@example.com");
        assert_eq!(redact_email("not-an-email"), "***");
        assert_eq!(redact_email("ada@"), "***");
    }
}
