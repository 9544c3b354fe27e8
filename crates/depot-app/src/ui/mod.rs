//! UI-facing facade for depot-app.
//!
//! Frontends hold a [`UiAppCore`] and never touch `AppCore` transitions
//! directly. Every method delegates to a workflow.

use async_lock::RwLock;
use std::sync::Arc;

use crate::core::{AppCore, Collaborators, Phase, SessionSnapshot};
use crate::navigation::NavIntent;
use crate::views::RootView;
use crate::workflows::{navigation, session};
use crate::{AppConfig, LoginOutcome};
use depot_core::{DepotError, Identity, Page};

/// UI wrapper around `AppCore` to discourage direct access to internals.
#[derive(Clone)]
pub struct UiAppCore {
    inner: Arc<RwLock<AppCore>>,
}

impl UiAppCore {
    /// Wrap a shared core
    pub fn new(inner: Arc<RwLock<AppCore>>) -> Self {
        Self { inner }
    }

    /// Build a fresh core from configuration and collaborators
    pub fn from_parts(config: AppConfig, collaborators: Collaborators) -> Self {
        Self::new(Arc::new(RwLock::new(AppCore::new(config, collaborators))))
    }

    /// The shared core, for workflows not wrapped here
    pub fn raw(&self) -> &Arc<RwLock<AppCore>> {
        &self.inner
    }

    /// Run the launch bootstrap
    pub async fn initialize(&self) -> Phase {
        session::initialize(&self.inner).await
    }

    /// Submit a login
    pub async fn login(&self, identity: Identity) -> LoginOutcome {
        session::login(&self.inner, identity).await
    }

    /// Forward an auth collaborator failure
    pub async fn report_auth_error(&self, message: impl Into<String>) -> Phase {
        session::report_auth_error(&self.inner, message).await
    }

    /// Log out
    pub async fn logout(&self) -> Phase {
        session::logout(&self.inner).await
    }

    /// Error-screen retry action
    pub async fn retry(&self) -> Phase {
        session::retry(&self.inner).await
    }

    /// Go to a page
    pub async fn navigate(&self, page: Page) -> Result<Page, DepotError> {
        navigation::navigate(&self.inner, page).await
    }

    /// Go back
    pub async fn navigate_back(&self) -> Result<Page, DepotError> {
        navigation::navigate_back(&self.inner).await
    }

    /// Tap the tab at `index` of the current tab bar
    pub async fn tap_tab(&self, index: usize) -> Result<Page, DepotError> {
        let intent = self
            .render()
            .await
            .tab_bar()
            .and_then(|bar| bar.tap(index))
            .ok_or_else(|| DepotError::invalid(format!("no tab at index {index}")))?;
        navigation::dispatch(&self.inner, intent).await
    }

    /// Apply a navigation intent
    pub async fn dispatch(&self, intent: NavIntent) -> Result<Page, DepotError> {
        navigation::dispatch(&self.inner, intent).await
    }

    /// Current session snapshot
    pub async fn snapshot(&self) -> SessionSnapshot {
        self.inner.read().await.snapshot()
    }

    /// Current screen in the configured locale
    pub async fn render(&self) -> RootView {
        let core = self.inner.read().await;
        RootView::resolve(&core.snapshot(), core.config().locale)
    }
}

impl From<Arc<RwLock<AppCore>>> for UiAppCore {
    fn from(inner: Arc<RwLock<AppCore>>) -> Self {
        Self::new(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::collaborators;
    use depot_core::{Profile, Role};
    use depot_testkit::TestHarness;

    #[tokio::test]
    async fn test_tap_tab_navigates() {
        let harness = TestHarness::new()
            .with_bootstrap_user(Some(Identity::new("1", "Dana")))
            .with_profile("1", Ok(Profile::for_role(Role::Driver)));
        let ui = UiAppCore::from_parts(AppConfig::default(), collaborators(&harness));
        ui.initialize().await;

        assert_eq!(ui.tap_tab(2).await.unwrap(), Page::Route);
        assert!(ui.tap_tab(7).await.is_err());
        assert_eq!(ui.snapshot().await.active_page, Page::Route);
    }

    #[tokio::test]
    async fn test_tap_tab_without_tab_bar_fails() {
        let harness = TestHarness::new().with_bootstrap_user(None);
        let ui = UiAppCore::from_parts(AppConfig::default(), collaborators(&harness));
        ui.initialize().await;

        assert_eq!(ui.render().await, RootView::Login);
        assert!(ui.tap_tab(0).await.is_err());
    }
}
