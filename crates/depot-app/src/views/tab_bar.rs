use crate::navigation::{tab_set, NavIntent};
use crate::strings::Locale;
use depot_core::{Page, Role};

/// One rendered tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    /// Target page
    pub page: Page,
    /// Localized label
    pub label: &'static str,
    /// Icon
    pub icon: &'static str,
    /// Whether this tab is highlighted
    pub selected: bool,
}

/// Bottom tab bar for a role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBarView {
    /// Tabs in display order
    pub tabs: Vec<TabItem>,
    /// Lay out right-to-left
    pub rtl: bool,
}

impl TabBarView {
    /// Build the bar for `role` with `active` highlighted if it has a tab.
    pub fn new(role: Role, active: Page, locale: Locale) -> Self {
        let tabs = tab_set(role)
            .iter()
            .map(|spec| TabItem {
                page: spec.page,
                label: spec.label(locale),
                icon: spec.icon,
                selected: spec.page == active,
            })
            .collect();
        Self {
            tabs,
            rtl: locale.is_rtl(),
        }
    }

    /// The highlighted page, if any
    pub fn selected(&self) -> Option<Page> {
        self.tabs.iter().find(|tab| tab.selected).map(|tab| tab.page)
    }

    /// Navigation intent for a tap on the tab at `index`.
    ///
    /// Tapping the active tab still yields an intent.
    pub fn tap(&self, index: usize) -> Option<NavIntent> {
        self.tabs.get(index).map(|tab| NavIntent::GoTo(tab.page))
    }
}
