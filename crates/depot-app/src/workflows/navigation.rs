//! Navigation Workflow
//!
//! Navigation is a synchronous state transition plus a best-effort haptic
//! signal to the host shell. The haptic call is unordered relative to the
//! page update and to rendering.
//!
//! The target page is not checked against the role's tab set: pages
//! without a tab stay reachable from links inside other pages.

use crate::core::{AppCore, Phase};
use crate::navigation::{is_tab, NavIntent};
use async_lock::RwLock;
use depot_core::effects::HapticKind;
use depot_core::{DepotError, Page};
use std::sync::Arc;

/// Apply a navigation intent.
///
/// **Returns**: the active page afterwards
/// **Errors**: `DepotError::Invalid` outside `Ready`; state is unchanged
///
/// Going to the already-active page changes nothing but still fires the
/// haptic signal, like a re-tapped tab.
pub async fn dispatch(
    app_core: &Arc<RwLock<AppCore>>,
    intent: NavIntent,
) -> Result<Page, DepotError> {
    let mut core = app_core.write().await;
    if *core.phase() != Phase::Ready {
        return Err(DepotError::invalid(format!(
            "navigation unavailable while {}",
            core.phase()
        )));
    }

    let changed = core.apply_nav(intent);
    let page = core.active_page();
    tracing::debug!(
        ?intent,
        page = %page,
        changed,
        in_tab_set = core.role().map(|role| is_tab(role, page)),
        "navigate"
    );

    let fire = match intent {
        NavIntent::GoTo(_) => true,
        NavIntent::Back => changed,
    };
    if fire {
        core.haptic(HapticKind::Selection);
    }
    Ok(page)
}

/// Go to a page.
pub async fn navigate(app_core: &Arc<RwLock<AppCore>>, page: Page) -> Result<Page, DepotError> {
    dispatch(app_core, NavIntent::GoTo(page)).await
}

/// Go back to the previous page, if any.
pub async fn navigate_back(app_core: &Arc<RwLock<AppCore>>) -> Result<Page, DepotError> {
    dispatch(app_core, NavIntent::Back).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_app_core;
    use crate::workflows::session::initialize;
    use crate::AppConfig;
    use depot_core::{Identity, Profile, Role};
    use depot_testkit::TestHarness;

    fn ready_harness(role: Role) -> TestHarness {
        TestHarness::new()
            .with_bootstrap_user(Some(Identity::new("1", "Dana")))
            .with_profile("1", Ok(Profile::for_role(role)))
    }

    #[tokio::test]
    async fn test_navigation_rejected_before_ready() {
        let harness = TestHarness::new().with_bootstrap_user(None);
        let app_core = test_app_core(&harness, AppConfig::default());
        initialize(&app_core).await;

        assert!(navigate(&app_core, Page::Orders).await.is_err());
        assert_eq!(app_core.read().await.active_page(), Page::Dashboard);
        assert!(harness.host.events().is_empty());
    }

    #[tokio::test]
    async fn test_retap_fires_haptic_without_history() {
        let harness = ready_harness(Role::Dispatcher);
        let app_core = test_app_core(&harness, AppConfig::default());
        initialize(&app_core).await;

        navigate(&app_core, Page::Dashboard).await.unwrap();
        navigate(&app_core, Page::Dashboard).await.unwrap();
        assert_eq!(harness.host.events(), vec![HapticKind::Selection; 2]);
        assert!(!app_core.read().await.can_go_back());
    }

    #[tokio::test]
    async fn test_back_returns_to_previous_page() {
        let harness = ready_harness(Role::Dispatcher);
        let app_core = test_app_core(&harness, AppConfig::default());
        initialize(&app_core).await;

        navigate(&app_core, Page::Orders).await.unwrap();
        navigate(&app_core, Page::Tasks).await.unwrap();
        assert_eq!(navigate_back(&app_core).await.unwrap(), Page::Orders);
        assert_eq!(navigate_back(&app_core).await.unwrap(), Page::Dashboard);
        // Nothing left to pop: no page change, no haptic
        assert_eq!(navigate_back(&app_core).await.unwrap(), Page::Dashboard);
        assert_eq!(harness.host.events().len(), 4);
    }

    #[tokio::test]
    async fn test_haptics_can_be_disabled() {
        let harness = ready_harness(Role::Driver);
        let config = AppConfig {
            haptics_enabled: false,
            ..AppConfig::default()
        };
        let app_core = test_app_core(&harness, config);
        initialize(&app_core).await;

        navigate(&app_core, Page::Route).await.unwrap();
        assert!(harness.host.events().is_empty());
    }
}
