use depot_core::{Page, Role};

/// Main-area content for the active page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageView {
    /// Role dashboard
    Dashboard,
    /// Order list
    Orders,
    /// Task board
    Tasks,
    /// Product catalogue
    Products,
    /// Group chat
    Chat,
    /// Broadcast channels
    Channels,
    /// Reports
    Reports,
    /// User management (deep link only)
    UserManagement,
    /// Settings
    Settings,
    /// Landing page for users without an assigned role
    DemoLanding,
    /// Page not built yet
    Placeholder {
        /// The page that was requested
        page: Page,
    },
}

impl PageView {
    /// Select the content for `page`.
    ///
    /// The demo carve-out for the default role is checked before anything
    /// else; unknown combinations fall back to the dashboard.
    pub fn resolve(role: Role, page: Page) -> Self {
        if role.is_default() && page == Page::Demo {
            return PageView::DemoLanding;
        }

        match page {
            Page::Orders => PageView::Orders,
            Page::Tasks => PageView::Tasks,
            Page::Products => PageView::Products,
            Page::Chat => PageView::Chat,
            Page::Channels => PageView::Channels,
            Page::Reports => PageView::Reports,
            Page::Deliveries | Page::Route | Page::Customers => PageView::Placeholder { page },
            Page::Users => PageView::UserManagement,
            Page::Settings => PageView::Settings,
            Page::Dashboard | Page::Demo => PageView::Dashboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_demo_carve_out_only_for_default_role() {
        assert_eq!(PageView::resolve(Role::User, Page::Demo), PageView::DemoLanding);
        assert_eq!(PageView::resolve(Role::Manager, Page::Demo), PageView::Dashboard);
    }

    #[test]
    fn test_unbuilt_pages_are_placeholders() {
        assert_eq!(
            PageView::resolve(Role::Driver, Page::Route),
            PageView::Placeholder { page: Page::Route }
        );
        assert_eq!(
            PageView::resolve(Role::Sales, Page::Customers),
            PageView::Placeholder {
                page: Page::Customers
            }
        );
    }

    #[test]
    fn test_deep_links_resolve() {
        assert_eq!(PageView::resolve(Role::Manager, Page::Users), PageView::UserManagement);
        assert_eq!(PageView::resolve(Role::Driver, Page::Chat), PageView::Chat);
    }

    proptest! {
        #[test]
        fn prop_resolution_is_total_and_stable(
            role in proptest::sample::select(Role::all()),
            page in proptest::sample::select(Page::all()),
        ) {
            let first = PageView::resolve(role, page);
            prop_assert_eq!(first, PageView::resolve(role, page));
            if page != Page::Demo {
                // Only the demo page depends on the role
                prop_assert_eq!(first, PageView::resolve(Role::Manager, page));
            }
        }
    }
}
