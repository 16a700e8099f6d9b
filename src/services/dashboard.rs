// ABOUTME: Dashboard service that assembles greeting, BMI, and weight chart for an identity
// ABOUTME: One refresh entry point serves focus, identity-change, and weight-written triggers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Dashboard
//!
//! A [`Dashboard`] is the display-ready snapshot of everything the user sees
//! after signing in. [`DashboardService::refresh`] rebuilds it from storage
//! whenever one of the [`RefreshTrigger`]s fires. Storage failures never
//! escape `refresh`; they are logged and turned into a [`Dashboard::notice`]
//! so the caller can keep rendering.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::constants::metrics::BMI_NOT_APPLICABLE;
use crate::database::repositories::{
    ProfileRepository, ProfileRepositoryImpl, WeightRepository, WeightRepositoryImpl,
};
use crate::database::Database;
use crate::errors::AppResult;
use crate::intelligence::{build_chart_series, compute_bmi, latest_weight};
use crate::logging::AppLogger;
use crate::models::{ChartSeries, Identity, Profile};

/// Why a refresh was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshTrigger {
    /// The dashboard became visible again
    Focus,
    /// Someone signed in or out
    IdentityChanged,
    /// A new weight sample was stored
    WeightWritten,
}

impl RefreshTrigger {
    /// Stable name used in log fields
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::IdentityChanged => "identity_changed",
            Self::WeightWritten => "weight_written",
        }
    }
}

impl fmt::Display for RefreshTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display-ready snapshot for one identity (or a guest)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// `Hello, <name> <email>` or `Hello, Guest`
    pub greeting: String,
    /// Signed-in email, `None` for a guest
    pub email: Option<String>,
    /// Stored profile, if one exists
    pub profile: Option<Profile>,
    /// Weight of the newest sample
    pub latest_weight_kg: Option<f64>,
    /// BMI with one decimal, or `N/A`
    pub bmi: String,
    /// Up to ten chronological points, `None` when there is nothing to plot
    pub chart: Option<ChartSeries>,
    /// Non-fatal problem to show alongside the data
    pub notice: Option<String>,
}

impl Dashboard {
    /// Dashboard shown when nobody is signed in
    #[must_use]
    pub fn guest() -> Self {
        Self {
            greeting: "Hello, Guest".to_owned(),
            email: None,
            profile: None,
            latest_weight_kg: None,
            bmi: BMI_NOT_APPLICABLE.to_owned(),
            chart: None,
            notice: None,
        }
    }

    fn empty_for(identity: &Identity) -> Self {
        Self {
            greeting: greeting(None, identity),
            email: Some(identity.email.clone()),
            ..Self::guest()
        }
    }
}

fn greeting(profile: Option<&Profile>, identity: &Identity) -> String {
    match profile.map(|p| p.name.trim()).filter(|name| !name.is_empty()) {
        Some(name) => format!("Hello, {name} {}", identity.email),
        None => format!("Hello, {}", identity.email),
    }
}

/// Read-side service rebuilding the dashboard on demand
#[derive(Clone)]
pub struct DashboardService {
    profiles: Arc<dyn ProfileRepository>,
    weights: Arc<dyn WeightRepository>,
    history_limit: u32,
}

impl DashboardService {
    /// Service backed by the `SQLite` repositories
    ///
    /// `history_limit` caps how many samples each refresh fetches.
    #[must_use]
    pub fn new(database: Database, history_limit: u32) -> Self {
        Self::with_repositories(
            Arc::new(ProfileRepositoryImpl::new(database.clone())),
            Arc::new(WeightRepositoryImpl::new(database)),
            history_limit,
        )
    }

    /// Service over arbitrary repository implementations
    #[must_use]
    pub fn with_repositories(
        profiles: Arc<dyn ProfileRepository>,
        weights: Arc<dyn WeightRepository>,
        history_limit: u32,
    ) -> Self {
        Self {
            profiles,
            weights,
            history_limit,
        }
    }

    /// Rebuild the dashboard, folding storage failures into a notice
    pub async fn refresh(&self, identity: Option<&Identity>, trigger: RefreshTrigger) -> Dashboard {
        match self.try_refresh(identity, trigger).await {
            Ok(dashboard) => dashboard,
            Err(e) => {
                warn!(
                    user.id = ?identity.map(|i| i.user_id),
                    refresh.trigger = %trigger,
                    error = %e,
                    "Dashboard refresh failed"
                );
                let mut dashboard = identity.map_or_else(Dashboard::guest, Dashboard::empty_for);
                dashboard.notice = Some(e.user_message());
                dashboard
            }
        }
    }

    /// Rebuild the dashboard, propagating storage failures
    ///
    /// # Errors
    ///
    /// Returns a database error if the profile or weight history cannot be read
    pub async fn try_refresh(
        &self,
        identity: Option<&Identity>,
        trigger: RefreshTrigger,
    ) -> AppResult<Dashboard> {
        let Some(identity) = identity else {
            AppLogger::log_refresh(None, trigger.as_str(), 0, 0);
            return Ok(Dashboard::guest());
        };

        let start = Instant::now();
        let profile = self.profiles.get(identity.user_id).await?;
        let samples = self
            .weights
            .list_descending(identity.user_id, self.history_limit)
            .await?;

        let latest_weight_kg = latest_weight(&samples);
        let height_cm = profile.as_ref().map_or(0.0, |p| p.height_cm);
        let dashboard = Dashboard {
            greeting: greeting(profile.as_ref(), identity),
            email: Some(identity.email.clone()),
            latest_weight_kg,
            bmi: compute_bmi(latest_weight_kg, height_cm),
            chart: build_chart_series(&samples),
            profile,
            notice: None,
        };

        AppLogger::log_refresh(
            Some(&identity.user_id.to_string()),
            trigger.as_str(),
            samples.len(),
            u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(dashboard)
    }

    /// Keep a dashboard in sync with identity changes
    ///
    /// Spawns a task that refreshes once for the identity current at spawn
    /// time and again after every change. The task ends when the identity
    /// channel closes or every dashboard receiver is dropped, without waiting
    /// for another identity change to notice the latter.
    pub fn spawn_identity_refresher(
        self: Arc<Self>,
        mut identities: watch::Receiver<Option<Identity>>,
    ) -> watch::Receiver<Dashboard> {
        let (tx, rx) = watch::channel(Dashboard::guest());

        tokio::spawn(async move {
            let mut trigger = RefreshTrigger::Focus;
            loop {
                let identity = identities.borrow_and_update().clone();
                let dashboard = self.refresh(identity.as_ref(), trigger).await;
                if tx.send(dashboard).is_err() {
                    debug!("Dashboard receivers dropped; stopping identity refresher");
                    break;
                }
                tokio::select! {
                    changed = identities.changed() => {
                        if changed.is_err() {
                            debug!("Identity channel closed; stopping identity refresher");
                            break;
                        }
                    }
                    () = tx.closed() => {
                        debug!("Dashboard receivers dropped; stopping identity refresher");
                        break;
                    }
                }
                trigger = RefreshTrigger::IdentityChanged;
            }
        });

        rx
    }
}
