//! Shared wiring for depot-app integration tests.

#![allow(dead_code)]

use depot_app::{AppConfig, Collaborators, UiAppCore};
use depot_core::{Identity, Profile, Role};
use depot_testkit::TestHarness;

pub fn collaborators(harness: &TestHarness) -> Collaborators {
    Collaborators {
        bootstrap: harness.bootstrap.clone(),
        stores: harness.stores.clone(),
        host: harness.host.clone(),
    }
}

pub fn ui(harness: &TestHarness) -> UiAppCore {
    UiAppCore::from_parts(AppConfig::default(), collaborators(harness))
}

pub fn ui_with(harness: &TestHarness, config: AppConfig) -> UiAppCore {
    UiAppCore::from_parts(config, collaborators(harness))
}

/// Harness whose bootstrap yields user "1" with `role`
pub fn signed_in(role: Role) -> TestHarness {
    TestHarness::new()
        .with_bootstrap_user(Some(Identity::new("1", "Dana")))
        .with_profile("1", Ok(Profile::for_role(role)))
}
