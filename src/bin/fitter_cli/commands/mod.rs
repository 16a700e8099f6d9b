// ABOUTME: Command modules for fitter-cli and the shared per-invocation context
// ABOUTME: Provides account session commands and profile, weight, and dashboard commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod account;
pub mod metrics;

use fitter::{
    auth::{IdentityProvider, LocalIdentityProvider, SessionFile},
    database::Database,
    errors::{AppError, AppResult},
    models::Identity,
};

/// Everything a command needs, built once in `main`
pub struct CliContext {
    pub database: Database,
    pub provider: LocalIdentityProvider,
    pub session: SessionFile,
    pub history_limit: u32,
}

impl CliContext {
    /// Identity restored from the session file, or an auth error
    pub fn require_identity(&self) -> AppResult<Identity> {
        self.provider.current().ok_or_else(AppError::auth_required)
    }
}
