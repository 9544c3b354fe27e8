//! Unit-test wiring for the testkit mocks.

use crate::{AppConfig, AppCore, Collaborators};
use async_lock::RwLock;
use depot_testkit::TestHarness;
use std::sync::Arc;

pub(crate) fn collaborators(harness: &TestHarness) -> Collaborators {
    Collaborators {
        bootstrap: harness.bootstrap.clone(),
        stores: harness.stores.clone(),
        host: harness.host.clone(),
    }
}

pub(crate) fn test_app_core(harness: &TestHarness, config: AppConfig) -> Arc<RwLock<AppCore>> {
    Arc::new(RwLock::new(AppCore::new(config, collaborators(harness))))
}
