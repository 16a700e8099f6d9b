// ABOUTME: Parses and validates user-entered weight, profile form fields, and credentials
// ABOUTME: Rejects bad input before any record is created so storage only sees valid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input validation
//!
//! Everything the user types arrives here as text. Each parser either returns
//! a value that satisfies the stored-record invariants or a validation
//! [`AppError`] whose message is safe to show as-is.

use serde::{Deserialize, Serialize};

use crate::constants::limits::{
    MAX_AGE_YEARS, MAX_HEIGHT_CM, MAX_NAME_LENGTH, MIN_AGE_YEARS, MIN_HEIGHT_CM,
    MIN_PASSWORD_LENGTH,
};
use crate::errors::{AppError, AppResult};
use crate::models::{Credentials, ProfileUpdate};

/// Parse the "add today's weight" entry
///
/// # Errors
///
/// Returns a validation error if the entry is empty, not a number, or not a
/// finite positive value.
pub fn parse_weight_entry(text: &str) -> AppResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::missing_field("Weight"));
    }
    let weight_kg: f64 = trimmed
        .parse()
        .map_err(|_| AppError::invalid_format(format!("'{trimmed}' is not a number")))?;
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::out_of_range("Weight must be a positive number"));
    }
    Ok(weight_kg)
}

/// Profile edit form as typed by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileForm {
    /// Display name (required)
    pub name: String,
    /// Age in whole years; empty keeps the stored value
    pub age: String,
    /// Height in centimeters; empty keeps the stored value
    pub height_cm: String,
}

impl ProfileForm {
    /// Validate the form into a [`ProfileUpdate`]
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty or too long, or if a
    /// non-empty age or height does not parse or is implausible.
    pub fn validate(&self) -> AppResult<ProfileUpdate> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::missing_field("Name"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::out_of_range(format!(
                "Name must be at most {MAX_NAME_LENGTH} characters"
            )));
        }

        Ok(ProfileUpdate {
            name: name.to_owned(),
            age: parse_age(&self.age)?,
            height_cm: parse_height(&self.height_cm)?,
        })
    }
}

fn parse_age(text: &str) -> AppResult<Option<u32>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let age: u32 = trimmed
        .parse()
        .map_err(|_| AppError::invalid_format("Age must be a whole number"))?;
    if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&age) {
        return Err(AppError::out_of_range(format!(
            "Age must be between {MIN_AGE_YEARS} and {MAX_AGE_YEARS}"
        )));
    }
    Ok(Some(age))
}

fn parse_height(text: &str) -> AppResult<Option<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let height_cm: f64 = trimmed
        .parse()
        .map_err(|_| AppError::invalid_format("Height must be a number of centimeters"))?;
    if !height_cm.is_finite() || !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&height_cm) {
        return Err(AppError::out_of_range(format!(
            "Height must be between {MIN_HEIGHT_CM} and {MAX_HEIGHT_CM} cm"
        )));
    }
    Ok(Some(height_cm))
}

/// Check credentials before they reach the identity provider
///
/// # Errors
///
/// Returns a validation error for a malformed email or a password shorter
/// than the minimum length.
pub fn validate_credentials(credentials: &Credentials) -> AppResult<()> {
    let email = credentials.email.as_str();
    if email.is_empty() {
        return Err(AppError::missing_field("Email"));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {}
        _ => return Err(AppError::invalid_format("Email address is badly formatted")),
    }
    if credentials.password.is_empty() {
        return Err(AppError::missing_field("Password"));
    }
    if credentials.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::out_of_range(format!(
            "Password should be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}
