//! File-backed collaborators for the terminal host.
//!
//! - [`FileBootstrap`] reads `{config, user}` from a JSON file on every call
//! - [`JsonStoreFactory`] serves profiles from a JSON map keyed by user id
//! - [`TracingHostShell`] turns haptic requests into log events

use async_trait::async_trait;
use depot_core::effects::{
    BootstrapEffects, DataStore, DataStoreFactory, HapticKind, HostShellEffects,
};
use depot_core::{
    Bootstrap, BootstrapConfig, DataStoreMode, DepotError, Identity, Profile, UserId,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Bootstrap provider reading a JSON file.
///
/// The file is re-read on each call so a retry after fixing it succeeds.
#[derive(Debug, Clone)]
pub struct FileBootstrap {
    path: PathBuf,
}

impl FileBootstrap {
    /// Provider for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BootstrapEffects for FileBootstrap {
    async fn bootstrap(&self) -> Result<Bootstrap, DepotError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            DepotError::network(format!("cannot read {}: {err}", self.path.display()))
        })?;
        let bootstrap: Bootstrap = serde_json::from_str(&raw)?;
        tracing::debug!(
            app = %bootstrap.config.app_name,
            user = ?bootstrap.user.as_ref().map(|identity| identity.id.as_str()),
            "bootstrap file read"
        );
        Ok(bootstrap)
    }
}

/// Profile map loaded once from JSON
pub type ProfileMap = HashMap<UserId, Profile>;

/// Read a profiles file: a JSON object from user id to profile.
pub fn load_profiles(path: &Path) -> Result<ProfileMap, DepotError> {
    let raw = std::fs::read_to_string(path)?;
    let profiles: ProfileMap = serde_json::from_str(&raw)?;
    Ok(profiles)
}

/// Data store factory over a fixed profile map
#[derive(Debug, Clone, Default)]
pub struct JsonStoreFactory {
    profiles: Arc<ProfileMap>,
}

impl JsonStoreFactory {
    /// Factory serving `profiles`
    pub fn new(profiles: ProfileMap) -> Self {
        Self {
            profiles: Arc::new(profiles),
        }
    }

    /// Factory over the profiles file at `path`, or an empty map
    pub fn from_file(path: Option<&Path>) -> Result<Self, DepotError> {
        match path {
            Some(path) => Ok(Self::new(load_profiles(path)?)),
            None => Ok(Self::default()),
        }
    }
}

impl DataStoreFactory for JsonStoreFactory {
    fn create_data_store(
        &self,
        config: &BootstrapConfig,
        mode: DataStoreMode,
        identity: &Identity,
    ) -> Result<Arc<dyn DataStore>, DepotError> {
        tracing::debug!(api = %config.api_base, %mode, user = %identity.id, "creating data store");
        Ok(Arc::new(JsonDataStore {
            identity: identity.clone(),
            mode,
            profiles: self.profiles.clone(),
        }))
    }
}

struct JsonDataStore {
    identity: Identity,
    mode: DataStoreMode,
    profiles: Arc<ProfileMap>,
}

#[async_trait]
impl DataStore for JsonDataStore {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn mode(&self) -> DataStoreMode {
        self.mode
    }

    async fn get_profile(&self) -> Result<Profile, DepotError> {
        self.profiles
            .get(&self.identity.id)
            .cloned()
            .ok_or_else(|| DepotError::not_found(format!("no profile for {}", self.identity.id)))
    }
}

/// Host shell without a vibration motor
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHostShell;

impl HostShellEffects for TracingHostShell {
    fn haptic_feedback(&self, kind: HapticKind) {
        tracing::info!(%kind, "haptic feedback");
    }
}
