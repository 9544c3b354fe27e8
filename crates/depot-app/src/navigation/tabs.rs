//! Role → tab set lookup table.
//!
//! Every role gets `dashboard` first and `settings` last; the middle slots
//! are role specific. `User` shares the customer-service bucket, which is
//! also where unrecognized roles ended up before roles were a closed type.

use crate::strings::Locale;
use depot_core::{Page, Role};

/// One bottom-bar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabSpec {
    /// Target page
    pub page: Page,
    /// Icon shown above the label
    pub icon: &'static str,
}

impl TabSpec {
    const fn new(page: Page, icon: &'static str) -> Self {
        Self { page, icon }
    }

    /// Localized label
    pub fn label(&self, locale: Locale) -> &'static str {
        locale.page_label(self.page)
    }
}

const DASHBOARD: TabSpec = TabSpec::new(Page::Dashboard, "📊");
const ORDERS: TabSpec = TabSpec::new(Page::Orders, "📋");
const TASKS: TabSpec = TabSpec::new(Page::Tasks, "✅");
const PRODUCTS: TabSpec = TabSpec::new(Page::Products, "📦");
const REPORTS: TabSpec = TabSpec::new(Page::Reports, "📈");
const DELIVERIES: TabSpec = TabSpec::new(Page::Deliveries, "🚚");
const ROUTE: TabSpec = TabSpec::new(Page::Route, "🗺️");
const CUSTOMERS: TabSpec = TabSpec::new(Page::Customers, "👥");
const SETTINGS: TabSpec = TabSpec::new(Page::Settings, "⚙️");

const MANAGER_TABS: [TabSpec; 5] = [DASHBOARD, ORDERS, PRODUCTS, REPORTS, SETTINGS];
const DISPATCHER_TABS: [TabSpec; 4] = [DASHBOARD, ORDERS, TASKS, SETTINGS];
const DRIVER_TABS: [TabSpec; 4] = [DASHBOARD, DELIVERIES, ROUTE, SETTINGS];
const WAREHOUSE_TABS: [TabSpec; 4] = [DASHBOARD, TASKS, PRODUCTS, SETTINGS];
const SALES_TABS: [TabSpec; 4] = [DASHBOARD, ORDERS, CUSTOMERS, SETTINGS];
const CUSTOMER_SERVICE_TABS: [TabSpec; 4] = [DASHBOARD, ORDERS, CUSTOMERS, SETTINGS];

/// Ordered tab set for a role
pub fn tab_set(role: Role) -> &'static [TabSpec] {
    match role {
        Role::Manager => &MANAGER_TABS,
        Role::Dispatcher => &DISPATCHER_TABS,
        Role::Driver => &DRIVER_TABS,
        Role::Warehouse => &WAREHOUSE_TABS,
        Role::Sales => &SALES_TABS,
        Role::CustomerService | Role::User => &CUSTOMER_SERVICE_TABS,
    }
}

/// Whether `page` has a tab for `role`
pub fn is_tab(role: Role, page: Page) -> bool {
    tab_set(role).iter().any(|tab| tab.page == page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pages(role: Role) -> Vec<Page> {
        tab_set(role).iter().map(|tab| tab.page).collect()
    }

    #[test]
    fn test_every_role_has_dashboard_and_settings_once() {
        for role in Role::all() {
            let tabs = pages(*role);
            assert!((4..=5).contains(&tabs.len()), "{role}: {tabs:?}");
            assert_eq!(tabs.iter().filter(|p| **p == Page::Dashboard).count(), 1);
            assert_eq!(tabs.iter().filter(|p| **p == Page::Settings).count(), 1);
            assert_eq!(tabs.first(), Some(&Page::Dashboard));
            assert_eq!(tabs.last(), Some(&Page::Settings));
        }
    }

    #[test]
    fn test_role_specific_tabs() {
        assert_eq!(
            pages(Role::Manager),
            vec![
                Page::Dashboard,
                Page::Orders,
                Page::Products,
                Page::Reports,
                Page::Settings
            ]
        );
        assert_eq!(
            pages(Role::Driver),
            vec![Page::Dashboard, Page::Deliveries, Page::Route, Page::Settings]
        );
        assert_eq!(
            pages(Role::Warehouse),
            vec![Page::Dashboard, Page::Tasks, Page::Products, Page::Settings]
        );
    }

    #[test]
    fn test_default_role_falls_through_to_customer_service() {
        assert_eq!(tab_set(Role::User), tab_set(Role::CustomerService));
    }

    #[test]
    fn test_deep_link_pages_have_no_tab() {
        for role in Role::all() {
            assert!(!is_tab(*role, Page::Users));
            assert!(!is_tab(*role, Page::Demo));
        }
        assert!(is_tab(Role::Driver, Page::Route));
        assert!(!is_tab(Role::Manager, Page::Route));
    }

    #[test]
    fn test_route_label_in_hebrew() {
        assert_eq!(ROUTE.label(Locale::Hebrew), "מסלול");
    }

    fn any_role() -> impl Strategy<Value = Role> {
        proptest::sample::select(Role::all())
    }

    proptest! {
        #[test]
        fn prop_tab_set_is_deterministic(role in any_role()) {
            prop_assert_eq!(tab_set(role), tab_set(role));
        }

        #[test]
        fn prop_tab_pages_are_unique(role in any_role()) {
            let mut seen = pages(role);
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), tab_set(role).len());
        }
    }
}
