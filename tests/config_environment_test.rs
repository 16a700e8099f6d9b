// ABOUTME: Unit tests for config environment functionality
// ABOUTME: Validates environment-variable loading, defaults, overrides, and rejected values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitter::config::environment::{DatabaseUrl, Environment, FitterConfig, LogLevel};
use fitter::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const VARS: [&str; 6] = [
    "DATABASE_URL",
    "FITTER_SESSION_FILE",
    "FITTER_HISTORY_LIMIT",
    "ENVIRONMENT",
    "RUST_LOG",
    "LOG_FORMAT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
    assert_eq!(LogLevel::Debug.to_tracing_level(), tracing::Level::DEBUG);
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("production"),
        Environment::Production
    );
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(
        Environment::from_str_or_default("anything"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
    assert_eq!(Environment::Testing.to_string(), "testing");
}

#[test]
fn test_database_url_round_trip() {
    let url = DatabaseUrl::parse_url("sqlite:./data/fitter.db").unwrap();
    assert_eq!(url.to_connection_string(), "sqlite:./data/fitter.db");

    let memory = DatabaseUrl::parse_url("sqlite::memory:").unwrap();
    assert_eq!(memory, DatabaseUrl::Memory);
    assert_eq!(memory.to_string(), "sqlite::memory:");
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();
    env::set_var("FITTER_SESSION_FILE", "/tmp/fitter-test/session.json");

    let config = FitterConfig::from_env().unwrap();
    assert_eq!(config.database, DatabaseUrl::default());
    assert_eq!(config.history_limit, 50);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.log_format, None);
    assert_eq!(
        config.session_file,
        PathBuf::from("/tmp/fitter-test/session.json")
    );
    clear_env();
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_env();
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("FITTER_SESSION_FILE", "/tmp/s.json");
    env::set_var("FITTER_HISTORY_LIMIT", "120");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");

    let config = FitterConfig::from_env().unwrap();
    assert_eq!(config.database, DatabaseUrl::Memory);
    assert_eq!(config.log_format, Some(LogFormat::Json));
    assert_eq!(config.history_limit, 120);
    assert!(config.environment.is_production());
    assert_eq!(config.log_level, LogLevel::Debug);
    clear_env();
}

#[test]
#[serial]
fn test_history_limit_must_fill_a_chart() {
    clear_env();
    env::set_var("FITTER_SESSION_FILE", "/tmp/s.json");

    env::set_var("FITTER_HISTORY_LIMIT", "9");
    assert!(FitterConfig::from_env().is_err());

    env::set_var("FITTER_HISTORY_LIMIT", "lots");
    assert!(FitterConfig::from_env().is_err());

    env::set_var("FITTER_HISTORY_LIMIT", "10");
    assert_eq!(FitterConfig::from_env().unwrap().history_limit, 10);
    clear_env();
}

#[test]
#[serial]
fn test_unsupported_database_scheme() {
    clear_env();
    env::set_var("FITTER_SESSION_FILE", "/tmp/s.json");
    env::set_var("DATABASE_URL", "postgresql://localhost/fitter");

    let err = FitterConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("DATABASE_URL"));
    clear_env();
}

#[test]
#[serial]
fn test_logging_follows_loaded_config() {
    clear_env();
    env::set_var("FITTER_SESSION_FILE", "/tmp/s.json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("RUST_LOG", "error");

    let config = FitterConfig::from_env().unwrap();
    let logging = LoggingConfig::from_config(&config);
    assert_eq!(logging.level, LogLevel::Error);
    assert_eq!(logging.environment, Environment::Production);
    assert!(logging.include_location);
    assert_eq!(logging.level.to_tracing_level(), tracing::Level::ERROR);

    let cli = LoggingConfig::for_cli(&config, false);
    assert_eq!(cli.level, LogLevel::Error);
    assert_eq!(cli.format, LogFormat::Compact);
    clear_env();
}
