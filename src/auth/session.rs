// ABOUTME: Persists the signed-in identity to a JSON file between client runs
// ABOUTME: Default location is the platform data directory resolved with `dirs`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::defaults::{DATA_DIR_NAME, SESSION_FILE_NAME};
use crate::errors::{AppError, AppResult};
use crate::models::Identity;

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    identity: Identity,
    saved_at: DateTime<Utc>,
}

/// File-backed session persistence
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Session file at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/fitter/session.json`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the platform has no data directory
    pub fn default_path() -> AppResult<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(DATA_DIR_NAME).join(SESSION_FILE_NAME))
            .ok_or_else(|| AppError::config("Could not determine a data directory for the session file"))
    }

    /// Where the session lives
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted identity
    ///
    /// A missing file means "signed out". A corrupt file is logged and also
    /// treated as signed out so the user can simply sign in again.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file exists but cannot be read
    pub async fn load(&self) -> AppResult<Option<Identity>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<StoredSession>(&contents) {
            Ok(stored) => {
                debug!(saved_at = %stored.saved_at, "Loaded persisted session");
                Ok(Some(stored.identity))
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable session file");
                Ok(None)
            }
        }
    }

    /// Persist `identity`, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be written
    pub async fn save(&self, identity: &Identity) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let stored = StoredSession {
            identity: identity.clone(),
            saved_at: Utc::now(),
        };
        tokio::fs::write(&self.path, serde_json::to_vec_pretty(&stored)?).await?;
        Ok(())
    }

    /// Remove the persisted identity; a missing file is not an error
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file exists but cannot be removed
    pub async fn clear(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
