// ABOUTME: User profile model with display name, age, and height
// ABOUTME: ProfileUpdate carries a validated edit; empty fields keep stored values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One profile per identity
///
/// `age == 0` and `height_cm == 0.0` mean "not set yet". A freshly signed-up
/// identity gets a profile with an empty name and both values unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Owning identity
    pub user_id: Uuid,
    /// Display name
    pub name: String,
    /// Age in years (0 = unset)
    pub age: u32,
    /// Height in centimeters (0 = unset)
    pub height_cm: f64,
    /// When the profile was created
    pub created_at: DateTime<Utc>,
    /// When the profile was last saved
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Empty profile created on first sign-up
    #[must_use]
    pub fn empty(user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            name: String::new(),
            age: 0,
            height_cm: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Age if one has been recorded
    #[must_use]
    pub const fn age_years(&self) -> Option<u32> {
        if self.age > 0 {
            Some(self.age)
        } else {
            None
        }
    }

    /// Height if one has been recorded
    #[must_use]
    pub fn height(&self) -> Option<f64> {
        (self.height_cm > 0.0).then_some(self.height_cm)
    }

    /// Apply a validated edit
    ///
    /// Age and height are only replaced when the edit carries a value.
    pub fn apply(&mut self, update: &ProfileUpdate, now: DateTime<Utc>) {
        self.name.clone_from(&update.name);
        if let Some(age) = update.age {
            self.age = age;
        }
        if let Some(height_cm) = update.height_cm {
            self.height_cm = height_cm;
        }
        self.updated_at = now;
    }
}

/// A validated edit-and-save action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name (always required)
    pub name: String,
    /// New age, or `None` to keep the stored one
    pub age: Option<u32>,
    /// New height, or `None` to keep the stored one
    pub height_cm: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_unset_fields() {
        let now = Utc::now();
        let mut profile = Profile::empty(Uuid::new_v4(), now);
        profile.apply(
            &ProfileUpdate {
                name: "Ada".into(),
                age: Some(36),
                height_cm: Some(170.0),
            },
            now,
        );

        profile.apply(
            &ProfileUpdate {
                name: "Ada L".into(),
                age: None,
                height_cm: None,
            },
            now,
        );

        assert_eq!(profile.name, "Ada L");
        assert_eq!(profile.age_years(), Some(36));
        assert_eq!(profile.height(), Some(170.0));
    }

    #[test]
    fn test_empty_profile_has_no_metrics() {
        let profile = Profile::empty(Uuid::new_v4(), Utc::now());
        assert_eq!(profile.age_years(), None);
        assert_eq!(profile.height(), None);
    }
}
