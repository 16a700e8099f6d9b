// ABOUTME: Unified error types and standard error codes for the Fitter client
// ABOUTME: AppError with context, constructors, and user-facing message mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. Error codes
//! are grouped by numeric range so a caller can decide whether a failure is the
//! user's to fix (validation, credentials) or a backend problem that should be
//! logged and shown as a non-fatal notice.

/// Database error types
pub mod database;

pub use database::DatabaseError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication & Authorization (1000-1999)
    /// No identity is signed in
    #[serde(rename = "AUTH_REQUIRED")]
    AuthRequired = 1000,
    /// Credentials were rejected
    #[serde(rename = "AUTH_INVALID")]
    AuthInvalid = 1001,

    // Validation (3000-3999)
    /// Required field left empty
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Input could not be parsed
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Parsed value is outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// Record with the same key already exists
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,

    // External Services (5000-5999)
    /// Backend could not be reached
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,

    // Configuration (6000-6999)
    /// Configuration could not be applied
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Database operation failed
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 9001,
    /// Local file storage failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::AuthRequired => "You need to sign in first",
            Self::AuthInvalid => "The email or password is incorrect",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The value could not be understood",
            Self::ValueOutOfRange => "The value is outside the acceptable range",
            Self::ResourceNotFound => "The requested record was not found",
            Self::ResourceAlreadyExists => "A record with this identifier already exists",
            Self::ExternalServiceUnavailable => "A backend service is currently unavailable",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
            Self::DatabaseError => "Database operation failed",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether the user can fix this error by changing their input
    #[must_use]
    pub const fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::AuthRequired
                | Self::AuthInvalid
                | Self::MissingRequiredField
                | Self::InvalidFormat
                | Self::ValueOutOfRange
                | Self::ResourceAlreadyExists
        )
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// User ID if available
    pub user_id: Option<Uuid>,
    /// Resource ID if applicable
    pub resource_id: Option<String>,
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a user ID to the error context
    #[must_use]
    pub fn with_user_id(mut self, user_id: Uuid) -> Self {
        self.context.user_id = Some(user_id);
        self
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Text suitable for showing to the person using the client
    ///
    /// Validation and credential errors carry their own message; backend and
    /// internal errors collapse to the generic code description so storage
    /// details never reach the screen.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.code.is_user_correctable() {
            self.message.clone()
        } else {
            self.code.description().to_owned()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Authentication required
    #[must_use]
    pub fn auth_required() -> Self {
        Self::new(ErrorCode::AuthRequired, "Sign in to continue")
    }

    /// Invalid authentication
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Resource already exists
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceAlreadyExists, message)
    }

    /// Required field missing
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{field} is required"),
        )
    }

    /// Unparseable input
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Value outside the accepted range
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        let code = match &error {
            DatabaseError::NotFound { .. } => ErrorCode::ResourceNotFound,
            DatabaseError::Duplicate { .. } => ErrorCode::ResourceAlreadyExists,
            DatabaseError::ConnectionError { .. } => ErrorCode::ExternalServiceUnavailable,
            _ => ErrorCode::DatabaseError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_creation() {
        let user_id = Uuid::new_v4();
        let error = AppError::auth_required()
            .with_user_id(user_id)
            .with_resource_id("profile");

        assert_eq!(error.code, ErrorCode::AuthRequired);
        assert_eq!(error.context.user_id, Some(user_id));
        assert_eq!(error.context.resource_id.as_deref(), Some("profile"));
    }

    #[test]
    fn test_user_message_hides_backend_details() {
        let error = AppError::database("disk I/O error at page 42");
        assert_eq!(error.user_message(), "Database operation failed");

        let error = AppError::missing_field("Weight");
        assert_eq!(error.user_message(), "Weight is required");
    }

    #[test]
    fn test_database_error_conversion_keeps_meaning() {
        let error: AppError = DatabaseError::NotFound {
            entity_type: "profile",
            entity_id: "abc".into(),
        }
        .into();
        assert_eq!(error.code, ErrorCode::ResourceNotFound);

        let error: AppError = DatabaseError::Duplicate {
            entity_type: "user",
            field: "email",
        }
        .into();
        assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
    }

    #[test]
    fn test_error_code_serializes_as_screaming_name() {
        let json = serde_json::to_string(&ErrorCode::ValueOutOfRange).unwrap();
        assert_eq!(json, "\"VALUE_OUT_OF_RANGE\"");
    }
}
