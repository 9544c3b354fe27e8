//! Plain-text rendering of the root view.

use depot_app::strings::role_icon;
use depot_app::{tab_set, Locale, PageView, RootView, TabBarView};
use depot_core::Role;
use std::fmt::Write;

/// Render the current screen as text.
pub fn render_root(view: &RootView, locale: Locale) -> String {
    match view {
        RootView::Loading { message } | RootView::Preparing { message } => {
            format!("… {message}")
        }
        RootView::Error {
            title,
            message,
            retry_label,
            ..
        } => format!("{title}\n{message}\n[{retry_label}] (retry)"),
        RootView::Login => "🔐 login <id> [name]".to_string(),
        RootView::Main {
            role,
            page,
            title,
            tab_bar,
        } => {
            let mut out = String::new();
            let _ = writeln!(
                out,
                "{} {} · {title}",
                role_icon(*role),
                locale.role_name(*role)
            );
            if let PageView::Placeholder { page } = page {
                let _ = writeln!(out, "{}", locale.under_construction(*page));
            }
            out.push_str(&render_tab_bar(tab_bar));
            out
        }
    }
}

/// Render a tab bar on one line. The selected tab is bracketed.
pub fn render_tab_bar(bar: &TabBarView) -> String {
    let mut cells: Vec<String> = bar
        .tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            let cell = format!("{index}:{} {}", tab.icon, tab.label);
            if tab.selected {
                format!("[{cell}]")
            } else {
                format!(" {cell} ")
            }
        })
        .collect();
    if bar.rtl {
        cells.reverse();
    }
    cells.join("|")
}

/// One line per tab of `role`: page id, icon and label.
pub fn render_tab_set(role: Role, locale: Locale) -> String {
    tab_set(role)
        .iter()
        .map(|spec| format!("{}\t{}\t{}", spec.page, spec.icon, spec.label(locale)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_app::Recovery;
    use depot_core::Page;

    #[test]
    fn main_view_marks_selected_tab() {
        let bar = TabBarView::new(Role::Driver, Page::Route, Locale::English);
        let view = RootView::Main {
            role: Role::Driver,
            page: PageView::Placeholder { page: Page::Route },
            title: "Route",
            tab_bar: bar,
        };
        let text = render_root(&view, Locale::English);
        assert!(text.starts_with("🚚 Driver · Route"));
        assert!(text.contains("Route page - under development"));
        assert!(text.contains("[2:"));
        assert_eq!(text.matches('[').count(), 1);
    }

    #[test]
    fn deep_link_marks_nothing() {
        let bar = TabBarView::new(Role::Manager, Page::Users, Locale::English);
        assert!(!render_tab_bar(&bar).contains('['));
    }

    #[test]
    fn rtl_bar_is_reversed() {
        let bar = TabBarView::new(Role::Driver, Page::Dashboard, Locale::Hebrew);
        let line = render_tab_bar(&bar);
        assert!(line.starts_with(" 3:"));
        assert!(line.ends_with("]"));
    }

    #[test]
    fn error_view_shows_retry() {
        let view = RootView::Error {
            title: "⚠️ Error",
            message: "network down".to_string(),
            retry_label: "Try again",
            recovery: Recovery::Restart,
        };
        assert_eq!(
            render_root(&view, Locale::English),
            "⚠️ Error\nnetwork down\n[Try again] (retry)"
        );
    }

    #[test]
    fn tab_set_lists_pages_in_order() {
        let text = render_tab_set(Role::Driver, Locale::Hebrew);
        let pages: Vec<&str> = text
            .lines()
            .map(|line| line.split('\t').next().unwrap())
            .collect();
        assert_eq!(pages, ["dashboard", "deliveries", "route", "settings"]);
        assert!(text.contains("מסלול"));
    }
}
