// ABOUTME: Fitter CLI - command-line front end for the body-metrics tracker
// ABOUTME: Handles account sessions, profile edits, weight entry, and dashboard display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Create an account (signs in and remembers the session)
//! fitter-cli sign-up --email ada@example.com --password hunter22
//!
//! # Fill in the profile
//! fitter-cli profile --name Ada --age 36 --height 170
//!
//! # Log today's weight
//! fitter-cli weight add 68.5
//!
//! # Show greeting, BMI, and the last ten weights
//! fitter-cli dashboard
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fitter::{
    auth::{LocalIdentityProvider, SessionFile},
    config::{DatabaseUrl, FitterConfig},
    database::Database,
    logging::LoggingConfig,
};
use tracing::{debug, info};

use commands::CliContext;

#[derive(Parser)]
#[command(
    name = "fitter-cli",
    about = "Fitter body-metrics tracker",
    long_about = "Track your weight, keep a profile, and see your BMI and weight trend."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Session file override
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Create an account and sign in
    SignUp {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password (at least 6 characters)
        #[arg(long)]
        password: String,
    },

    /// Sign in to an existing account
    SignIn {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Sign out and forget the stored session
    SignOut,

    /// Show who is signed in
    Whoami,

    /// Edit and save the profile
    Profile {
        /// Display name (required)
        #[arg(long)]
        name: String,

        /// Age in years (omit to keep the stored value)
        #[arg(long, default_value = "")]
        age: String,

        /// Height in centimeters (omit to keep the stored value)
        #[arg(long, default_value = "")]
        height: String,
    },

    /// Weight history commands
    Weight {
        #[command(subcommand)]
        action: WeightCommand,
    },

    /// Show greeting, BMI, and weight chart
    Dashboard {
        /// Print the dashboard as JSON
        #[arg(long)]
        json: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WeightCommand {
    /// Record a weight in kilograms
    Add {
        /// Weight in kilograms
        value: String,

        /// RFC 3339 timestamp (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },

    /// List recorded weights, newest first
    List {
        /// Maximum number of samples to show
        #[arg(long, default_value = "20")]
        limit: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = FitterConfig::from_env()?;
    LoggingConfig::for_cli(&config, cli.verbose).init()?;

    if let Some(url) = cli.database_url.as_deref() {
        config.database = DatabaseUrl::parse_url(url).context("Invalid --database-url value")?;
    }
    if let Some(path) = cli.session_file {
        config.session_file = path;
    }
    info!(
        environment = %config.environment,
        database = %config.database,
        history_limit = config.history_limit,
        "Configuration loaded"
    );

    if let Some(dir) = config.database.parent_dir() {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create database directory {}", dir.display()))?;
    }

    info!("Connecting to database: {}", config.database);
    let database = Database::new(&config.database.to_connection_string()).await?;

    let provider = LocalIdentityProvider::new(database.clone());
    let session = SessionFile::new(config.session_file.clone());
    if let Some(identity) = session.load().await? {
        if !provider.restore(&identity).await? {
            session.clear().await?;
        }
    }
    debug!(session = %session.path().display(), "Session restored");

    let ctx = CliContext {
        database,
        provider,
        session,
        history_limit: config.history_limit,
    };

    match cli.command {
        Command::SignUp { email, password } => {
            commands::account::sign_up(&ctx, email, password).await?;
        }
        Command::SignIn { email, password } => {
            commands::account::sign_in(&ctx, email, password).await?;
        }
        Command::SignOut => commands::account::sign_out(&ctx).await?,
        Command::Whoami => commands::account::whoami(&ctx),
        Command::Profile { name, age, height } => {
            commands::metrics::save_profile(&ctx, name, age, height).await?;
        }
        Command::Weight { action } => match action {
            WeightCommand::Add { value, at } => {
                commands::metrics::add_weight(&ctx, &value, at.as_deref()).await?;
            }
            WeightCommand::List { limit } => {
                commands::metrics::list_weights(&ctx, limit).await?;
            }
        },
        Command::Dashboard { json } => commands::metrics::dashboard(&ctx, json).await?,
    }

    Ok(())
}
