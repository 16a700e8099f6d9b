// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, database location, session file, and history limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::auth::SessionFile;
use crate::constants::{defaults, env_config, limits, metrics};
use crate::logging::LogFormat;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Strongly typed log level configuration
///
/// Variants are ordered from least to most verbose.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational events
    #[default]
    Info,
    /// Debug detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// File path
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse a connection string
    ///
    /// Accepts `sqlite::memory:`, `sqlite:<path>`, `sqlite://<path>`, or a
    /// bare file path.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty string or a non-SQLite scheme
    pub fn parse_url(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            bail!("Database URL is empty");
        }
        if let Some(rest) = trimmed.strip_prefix("sqlite:") {
            let path = rest.strip_prefix("//").unwrap_or(rest);
            let path = path.split('?').next().unwrap_or(path);
            return Ok(if path == ":memory:" || path.is_empty() {
                Self::Memory
            } else {
                Self::SQLite {
                    path: PathBuf::from(path),
                }
            });
        }
        if trimmed.contains("://") {
            bail!("Unsupported database scheme in '{trimmed}' (only sqlite is supported)");
        }
        Ok(Self::SQLite {
            path: PathBuf::from(trimmed),
        })
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Directory that must exist before the database can be created
    #[must_use]
    pub fn parent_dir(&self) -> Option<&Path> {
        match self {
            Self::SQLite { path } => path.parent().filter(|p| !p.as_os_str().is_empty()),
            Self::Memory => None,
        }
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/fitter.db"),
        }
    }
}

impl std::fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Complete client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitterConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Log output format, when `LOG_FORMAT` is set
    pub log_format: Option<LogFormat>,
    /// Database location
    pub database: DatabaseUrl,
    /// Where the signed-in identity is persisted
    pub session_file: PathBuf,
    /// Weight samples fetched per dashboard refresh
    pub history_limit: u32,
}

impl FitterConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but malformed, or if no session
    /// file path is configured and the platform has no data directory
    pub fn from_env() -> Result<Self> {
        let database = DatabaseUrl::parse_url(&env_var_or(
            env_config::DATABASE_URL,
            defaults::DATABASE_URL,
        ))
        .context("Invalid DATABASE_URL value")?;

        let session_file = match env::var(env_config::SESSION_FILE) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => SessionFile::default_path()?,
        };

        let history_limit: u32 = env_var_or(
            env_config::HISTORY_LIMIT,
            &limits::DEFAULT_HISTORY_LIMIT.to_string(),
        )
        .parse()
        .context("Invalid FITTER_HISTORY_LIMIT value")?;

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(env_config::RUST_LOG, "info")),
            log_format: env::var(env_config::LOG_FORMAT)
                .ok()
                .map(|value| LogFormat::from_str_or_default(&value)),
            database,
            session_file,
            history_limit,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error if the history limit cannot fill a chart
    pub fn validate(&self) -> Result<()> {
        let min = u32::try_from(metrics::CHART_MAX_POINTS).unwrap_or(u32::MAX);
        if self.history_limit < min {
            bail!(
                "FITTER_HISTORY_LIMIT must be at least {min} (got {})",
                self.history_limit
            );
        }
        Ok(())
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_parsing() {
        assert_eq!(
            DatabaseUrl::parse_url("sqlite::memory:").unwrap(),
            DatabaseUrl::Memory
        );
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:./data/fitter.db").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("./data/fitter.db")
            }
        );
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:///tmp/f.db?mode=rwc").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("/tmp/f.db")
            }
        );
        assert!(DatabaseUrl::parse_url("postgres://localhost/db").is_err());
        assert!(DatabaseUrl::parse_url("  ").is_err());
    }

    #[test]
    fn test_parent_dir() {
        let url = DatabaseUrl::parse_url("sqlite:./data/fitter.db").unwrap();
        assert_eq!(url.parent_dir(), Some(Path::new("./data")));
        assert_eq!(DatabaseUrl::parse_url("fitter.db").unwrap().parent_dir(), None);
        assert_eq!(DatabaseUrl::Memory.parent_dir(), None);
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("weird"), Environment::Development);
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Debug < LogLevel::Trace);
        assert_eq!(LogLevel::Info.min(LogLevel::Warn), LogLevel::Warn);
        assert_eq!(LogLevel::Error.min(LogLevel::Warn), LogLevel::Error);
    }
}
