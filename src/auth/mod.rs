// ABOUTME: Identity provider abstraction with sign-in, sign-up, sign-out, and change subscription
// ABOUTME: Identities are handed out explicitly; nothing reads a global "current user"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Identity Provider
//!
//! [`IdentityProvider`] is the contract the rest of the crate consumes.
//! [`LocalIdentityProvider`] implements it over the local database with
//! Argon2id password hashes. [`SessionFile`] persists the signed-in identity
//! between CLI invocations.

mod local;
mod session;

pub use local::LocalIdentityProvider;
pub use session::SessionFile;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::errors::AppResult;
use crate::models::{Credentials, Identity};

/// Authentication provider contract
///
/// Every successful state change is published to subscribers, which is how
/// the dashboard learns it has to refresh after sign-in or sign-out.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authenticate an existing account
    async fn sign_in(&self, credentials: &Credentials) -> AppResult<Identity>;

    /// Register a new account and sign it in
    async fn sign_up(&self, credentials: &Credentials) -> AppResult<Identity>;

    /// Drop the current identity
    async fn sign_out(&self) -> AppResult<()>;

    /// Identity currently signed in, if any
    fn current(&self) -> Option<Identity>;

    /// Receiver that observes every identity change (`None` = signed out)
    fn subscribe(&self) -> watch::Receiver<Option<Identity>>;
}
