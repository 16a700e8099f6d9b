// ABOUTME: Authenticated identity and sign-in credential types
// ABOUTME: Identity is issued by the identity provider and passed explicitly everywhere
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// An authenticated user session reference
///
/// Identities are never looked up from ambient state; every storage and
/// dashboard call takes one as a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// Owning identity reference used as the filter key on every record
    pub user_id: Uuid,
    /// Email the identity signed in with
    pub email: String,
}

impl Identity {
    /// Create an identity from its parts
    pub fn new(user_id: Uuid, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }
}

/// Email and password as typed by the user
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Email address
    pub email: String,
    /// Plain-text password (only ever hashed, never stored)
    pub password: String,
}

impl Credentials {
    /// Build credentials, trimming surrounding whitespace from the email
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_owned(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
