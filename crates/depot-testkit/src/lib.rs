//! # Depot Testkit
//!
//! Scripted implementations of the depot-core collaborator traits:
//!
//! - [`MockBootstrap`]: canned bootstrap results, with a call counter
//! - [`MockDataStoreFactory`] / [`MockDataStore`]: per-user profiles,
//!   construction failures and [`Gate`]s that hold profile lookups open
//! - [`RecordingHostShell`]: records every haptic request
//! - [`TestHarness`]: the three wired together
//!
//! This crate depends only on depot-core, so depot-app can use it from its
//! own unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod bootstrap;
mod data_store;
mod host;

pub use bootstrap::{test_config, MockBootstrap};
pub use data_store::{Gate, MockDataStore, MockDataStoreFactory};
pub use host::RecordingHostShell;

use depot_core::{DepotError, Identity, Profile};
use std::sync::Arc;

/// Mock collaborators sharing one scenario
#[derive(Clone)]
pub struct TestHarness {
    /// Bootstrap provider
    pub bootstrap: Arc<MockBootstrap>,
    /// Data store factory
    pub stores: Arc<MockDataStoreFactory>,
    /// Host shell
    pub host: Arc<RecordingHostShell>,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Bootstrap succeeds with [`test_config`] and no identity
    pub fn new() -> Self {
        Self {
            bootstrap: Arc::new(MockBootstrap::with_user(None)),
            stores: Arc::new(MockDataStoreFactory::new()),
            host: Arc::new(RecordingHostShell::new()),
        }
    }

    /// Bootstrap succeeds with this identity
    pub fn with_bootstrap_user(self, user: Option<Identity>) -> Self {
        self.bootstrap.set(Ok(depot_core::Bootstrap {
            config: test_config(),
            user,
        }));
        self
    }

    /// Bootstrap fails
    pub fn with_bootstrap_error(self, err: DepotError) -> Self {
        self.bootstrap.set(Err(err));
        self
    }

    /// Profile lookup result for a user
    pub fn with_profile(self, user_id: &str, profile: Result<Profile, DepotError>) -> Self {
        self.stores.set_profile(user_id, profile);
        self
    }
}
