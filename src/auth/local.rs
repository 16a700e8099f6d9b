// ABOUTME: Local identity provider backed by the users table and Argon2id password hashes
// ABOUTME: Publishes identity changes on a watch channel for refresh listeners
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, warn};
use uuid::Uuid;

use super::IdentityProvider;
use crate::database::{Database, DatabaseError, UserRecord};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{Credentials, Identity};
use crate::validation::validate_credentials;

/// Message for every credential failure, so callers cannot probe which emails exist
const INVALID_CREDENTIALS: &str = "The email or password is incorrect";

/// Identity provider over the local database
pub struct LocalIdentityProvider {
    db: Database,
    state: watch::Sender<Option<Identity>>,
}

impl LocalIdentityProvider {
    /// Create a provider with nobody signed in
    #[must_use]
    pub fn new(db: Database) -> Self {
        let (state, _) = watch::channel(None);
        Self { db, state }
    }

    /// Re-establish a previously persisted identity
    ///
    /// Returns `false` (and stays signed out) if the account no longer exists
    /// or its id does not match.
    ///
    /// # Errors
    ///
    /// Returns an error if the account lookup fails
    pub async fn restore(&self, identity: &Identity) -> AppResult<bool> {
        let matches = self
            .db
            .get_user_by_email(&identity.email)
            .await?
            .is_some_and(|user| user.id == identity.user_id);

        if matches {
            self.publish(Some(identity.clone()));
        } else {
            warn!(user.id = %identity.user_id, "Stored session does not match any account");
        }
        Ok(matches)
    }

    fn publish(&self, identity: Option<Identity>) {
        self.state.send_replace(identity);
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> AppResult<Identity> {
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        }

        let Some(user) = self.db.get_user_by_email(&credentials.email).await? else {
            AppLogger::log_unknown_account("sign_in", &credentials.email);
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        };

        let verified = verify_password(credentials.password.clone(), user.password_hash).await?;
        if !verified {
            AppLogger::log_auth_event(&user.id.to_string(), "sign_in", false, Some("bad password"));
            return Err(AppError::auth_invalid(INVALID_CREDENTIALS));
        }

        self.db.touch_last_sign_in(user.id, Utc::now()).await?;

        let identity = Identity::new(user.id, user.email);
        AppLogger::log_auth_event(&identity.user_id.to_string(), "sign_in", true, None);
        self.publish(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_up(&self, credentials: &Credentials) -> AppResult<Identity> {
        validate_credentials(credentials)?;

        let password_hash = hash_password(credentials.password.clone()).await?;
        let now = Utc::now();
        let user = UserRecord {
            id: Uuid::new_v4(),
            email: credentials.email.clone(),
            password_hash,
            created_at: now,
            last_sign_in_at: Some(now),
        };

        self.db.create_user(&user).await.map_err(|e| match e {
            DatabaseError::Duplicate { .. } => {
                AppError::already_exists("The email address is already in use by another account")
            }
            other => other.into(),
        })?;

        let identity = Identity::new(user.id, user.email);
        AppLogger::log_auth_event(&identity.user_id.to_string(), "sign_up", true, None);
        self.publish(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_out(&self) -> AppResult<()> {
        if let Some(identity) = self.current() {
            AppLogger::log_auth_event(&identity.user_id.to_string(), "sign_out", true, None);
        }
        self.publish(None);
        Ok(())
    }

    fn current(&self) -> Option<Identity> {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.state.subscribe()
    }
}

/// Hash a password with Argon2id and a random salt off the async runtime
async fn hash_password(password: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Argon2 password hashing failed: {e}")))
    })
    .await
    .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
}

/// Check a password against a stored Argon2 PHC string off the async runtime
async fn verify_password(password: String, stored_hash: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&stored_hash).map_err(|e| {
            AppError::internal(format!("Failed to parse stored password hash: {e}"))
        })?;
        let ok = Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok();
        debug!(verified = ok, "Password verification complete");
        Ok(ok)
    })
    .await
    .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
}
