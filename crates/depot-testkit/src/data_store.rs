use async_trait::async_trait;
use depot_core::effects::{DataStore, DataStoreFactory};
use depot_core::{BootstrapConfig, DataStoreMode, DepotError, Identity, Profile, UserId};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Holds profile lookups open until released.
pub struct Gate {
    permits: Semaphore,
}

impl Gate {
    /// Closed gate
    pub fn new() -> Self {
        Self {
            permits: Semaphore::new(0),
        }
    }

    /// Let one waiting (or future) lookup through
    pub fn release(&self) {
        self.permits.add_permits(1);
    }

    pub(crate) async fn pass(&self) {
        self.permits
            .acquire()
            .await
            .expect("gate semaphore closed")
            .forget();
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

/// Data store with a fixed profile result
pub struct MockDataStore {
    identity: Identity,
    mode: DataStoreMode,
    profile: Result<Profile, DepotError>,
    gate: Option<Arc<Gate>>,
}

impl MockDataStore {
    /// Store whose profile lookup fails with `NotFound`
    pub fn new(identity: Identity) -> Self {
        let profile = Err(DepotError::not_found(format!("no profile for {}", identity.id)));
        Self {
            identity,
            mode: DataStoreMode::Real,
            profile,
            gate: None,
        }
    }

    /// Set the profile result
    pub fn with_profile(mut self, profile: Result<Profile, DepotError>) -> Self {
        self.profile = profile;
        self
    }

    /// Set the mode
    pub fn with_mode(mut self, mode: DataStoreMode) -> Self {
        self.mode = mode;
        self
    }

    /// Wait on a gate before answering profile lookups
    pub fn with_gate(mut self, gate: Arc<Gate>) -> Self {
        self.gate = Some(gate);
        self
    }
}

#[async_trait]
impl DataStore for MockDataStore {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn mode(&self) -> DataStoreMode {
        self.mode
    }

    async fn get_profile(&self) -> Result<Profile, DepotError> {
        if let Some(gate) = &self.gate {
            gate.pass().await;
        }
        self.profile.clone()
    }
}

/// Factory building [`MockDataStore`]s from per-user scripts
#[derive(Default)]
pub struct MockDataStoreFactory {
    profiles: Mutex<HashMap<UserId, Result<Profile, DepotError>>>,
    gates: Mutex<HashMap<UserId, Arc<Gate>>>,
    fail_next: Mutex<Option<DepotError>>,
    created: AtomicUsize,
    last_mode: Mutex<Option<DataStoreMode>>,
}

impl MockDataStoreFactory {
    /// Factory with no scripted profiles
    pub fn new() -> Self {
        Self::default()
    }

    /// Profile lookup result for a user
    pub fn set_profile(&self, user_id: &str, profile: Result<Profile, DepotError>) {
        self.profiles.lock().insert(UserId::new(user_id), profile);
    }

    /// Gate the profile lookups of stores created for a user
    pub fn gate(&self, user_id: &str) -> Arc<Gate> {
        self.gates
            .lock()
            .entry(UserId::new(user_id))
            .or_insert_with(|| Arc::new(Gate::new()))
            .clone()
    }

    /// Fail the next construction
    pub fn fail_next(&self, err: DepotError) {
        *self.fail_next.lock() = Some(err);
    }

    /// Number of stores built
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Mode requested by the most recent construction
    pub fn last_mode(&self) -> Option<DataStoreMode> {
        *self.last_mode.lock()
    }
}

impl DataStoreFactory for MockDataStoreFactory {
    fn create_data_store(
        &self,
        _config: &BootstrapConfig,
        mode: DataStoreMode,
        identity: &Identity,
    ) -> Result<Arc<dyn DataStore>, DepotError> {
        if let Some(err) = self.fail_next.lock().take() {
            return Err(err);
        }
        self.created.fetch_add(1, Ordering::SeqCst);
        *self.last_mode.lock() = Some(mode);

        let mut store = MockDataStore::new(identity.clone()).with_mode(mode);
        if let Some(profile) = self.profiles.lock().get(&identity.id) {
            store = store.with_profile(profile.clone());
        }
        if let Some(gate) = self.gates.lock().get(&identity.id) {
            store = store.with_gate(gate.clone());
        }
        Ok(Arc::new(store))
    }
}
