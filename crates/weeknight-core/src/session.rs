//! Session bootstrap: who is cooking, and with which bearer token.
//!
//! The identity provider is external; the client only needs the resulting
//! user ID and access token. [`IdentityStore`] keeps them in a small JSON
//! file under the XDG config directory
//! (`$XDG_CONFIG_HOME/weeknight/identity.json`).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tokio::task;

use crate::error::{Result, ResultExt, WeeknightError};

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub access_token: String,
}

impl Identity {
    /// Creates an identity, rejecting blank values.
    pub fn new(user_id: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let user_id = user_id.into().trim().to_string();
        let access_token = access_token.into().trim().to_string();
        if user_id.is_empty() {
            return Err(WeeknightError::invalid_input("user_id").with_reason("cannot be empty"));
        }
        if access_token.is_empty() {
            return Err(
                WeeknightError::invalid_input("access_token").with_reason("cannot be empty")
            );
        }
        Ok(Self {
            user_id,
            access_token,
        })
    }
}

/// Bearer token of an optional identity.
pub fn token_of(identity: Option<&Identity>) -> Option<&str> {
    identity.map(|i| i.access_token.as_str())
}

/// Source of the current identity.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The signed-in identity, or `None` for an anonymous session.
    async fn current(&self) -> Result<Option<Identity>>;
}

/// Fixed identity, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity(pub Option<Identity>);

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn current(&self) -> Result<Option<Identity>> {
        Ok(self.0.clone())
    }
}

/// File-backed identity storage.
#[derive(Debug, Clone)]
pub struct IdentityStore {
    path: PathBuf,
}

impl IdentityStore {
    /// Uses the given file, or the XDG default when `None`.
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let path = match path {
            Some(path) => path.as_ref().to_path_buf(),
            None => Self::default_path()?,
        };
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored identity; a missing file means anonymous.
    pub fn load(&self) -> Result<Option<Identity>> {
        if !self.path.exists() {
            debug!("No identity file at {}", self.path.display());
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path).map_err(|e| WeeknightError::FileSystem {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Writes the identity, creating parent directories as needed.
    pub fn save(&self, identity: &Identity) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WeeknightError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        let json = serde_json::to_string_pretty(identity)?;
        std::fs::write(&self.path, json).map_err(|e| WeeknightError::FileSystem {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Removes the stored identity. Returns whether one existed.
    pub fn clear(&self) -> Result<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(WeeknightError::FileSystem {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    /// Returns the default identity path following XDG Base Directory
    /// specification.
    fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("weeknight")
            .place_config_file("identity.json")
            .map_err(|e| WeeknightError::XdgDirectory(e.to_string()))
    }
}

#[async_trait]
impl IdentityProvider for IdentityStore {
    async fn current(&self) -> Result<Option<Identity>> {
        let store = self.clone();
        task::spawn_blocking(move || store.load())
            .await
            .with_context("Task join error")?
    }
}

/// Resolves the identity for a new session.
///
/// Provider failures never block the client: they are logged and the
/// session continues anonymously.
pub async fn bootstrap(provider: &dyn IdentityProvider) -> Option<Identity> {
    match provider.current().await {
        Ok(Some(identity)) => {
            debug!("Session bootstrapped for user {}", identity.user_id);
            Some(identity)
        }
        Ok(None) => {
            debug!("No identity available, continuing anonymously");
            None
        }
        Err(e) => {
            warn!("Failed to read identity, continuing anonymously: {e}");
            None
        }
    }
}
