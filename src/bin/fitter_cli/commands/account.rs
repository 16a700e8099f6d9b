// ABOUTME: Account commands for fitter-cli
// ABOUTME: Handles sign-up, sign-in, sign-out, and whoami with session-file persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitter::{
    auth::IdentityProvider, errors::AppResult, models::Credentials, services::TrackingService,
};
use tracing::info;

use super::CliContext;
use crate::helpers::display::display_identity;

/// Register a new account, sign it in, and persist the session
pub async fn sign_up(ctx: &CliContext, email: String, password: String) -> AppResult<()> {
    let tracking = TrackingService::new(ctx.database.clone());
    let identity = tracking
        .register(&ctx.provider, &Credentials::new(email, password))
        .await?;
    ctx.session.save(&identity).await?;
    info!(user.id = %identity.user_id, "Account created");

    println!("Account created.");
    display_identity(Some(&identity));
    Ok(())
}

/// Sign in and persist the session
pub async fn sign_in(ctx: &CliContext, email: String, password: String) -> AppResult<()> {
    let identity = ctx
        .provider
        .sign_in(&Credentials::new(email, password))
        .await?;
    ctx.session.save(&identity).await?;

    display_identity(Some(&identity));
    Ok(())
}

/// Sign out and remove the session file
pub async fn sign_out(ctx: &CliContext) -> AppResult<()> {
    ctx.provider.sign_out().await?;
    ctx.session.clear().await?;
    println!("Signed out.");
    Ok(())
}

/// Print the signed-in identity
pub fn whoami(ctx: &CliContext) {
    display_identity(ctx.provider.current().as_ref());
}
