use super::{PageView, TabBarView};
use crate::core::{Phase, SessionSnapshot};
use crate::errors::{ErrorKind, Recovery};
use crate::strings::{Locale, Text};
use depot_core::Role;

/// Top-level screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootView {
    /// Bootstrap in progress
    Loading {
        /// Localized message
        message: &'static str,
    },
    /// Full-screen error with the retry action
    Error {
        /// Localized heading
        title: &'static str,
        /// Error message (localized fallback when the source had none)
        message: String,
        /// Localized retry button label
        retry_label: &'static str,
        /// What the retry button does
        recovery: Recovery,
    },
    /// Login screen (auth collaborator UI)
    Login,
    /// Login submitted, session not ready yet
    Preparing {
        /// Localized message
        message: &'static str,
    },
    /// Ready: page content plus the role's tab bar
    Main {
        /// Resolved role
        role: Role,
        /// Page content
        page: PageView,
        /// Localized title of the active page
        title: &'static str,
        /// Bottom navigation
        tab_bar: TabBarView,
    },
}

impl RootView {
    /// Derive the screen for a session snapshot.
    pub fn resolve(snapshot: &SessionSnapshot, locale: Locale) -> Self {
        match &snapshot.phase {
            Phase::Loading => RootView::Loading {
                message: locale.text(Text::Loading),
            },
            Phase::Error(err) => {
                let message = if err.message().trim().is_empty() {
                    let fallback = match err.kind() {
                        ErrorKind::BootstrapFailure => Text::InitFailed,
                        ErrorKind::AuthFailure => Text::LoginFailed,
                    };
                    locale.text(fallback).to_string()
                } else {
                    err.message().to_string()
                };
                RootView::Error {
                    title: locale.text(Text::ErrorTitle),
                    message,
                    retry_label: locale.text(Text::Retry),
                    recovery: err.recovery(),
                }
            }
            Phase::Unauthenticated if snapshot.login_pending => RootView::Preparing {
                message: locale.text(Text::Preparing),
            },
            Phase::Unauthenticated => RootView::Login,
            Phase::Ready => {
                let role = snapshot.role.unwrap_or_default();
                let active = snapshot.active_page;
                RootView::Main {
                    role,
                    page: PageView::resolve(role, active),
                    title: locale.page_label(active),
                    tab_bar: TabBarView::new(role, active, locale),
                }
            }
        }
    }

    /// The tab bar, when one is shown
    pub fn tab_bar(&self) -> Option<&TabBarView> {
        match self {
            RootView::Main { tab_bar, .. } => Some(tab_bar),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppError, AuthFailure};
    use depot_core::{Page, SessionId};

    fn snapshot(phase: Phase) -> SessionSnapshot {
        SessionSnapshot {
            session_id: SessionId::new(),
            phase,
            config: None,
            identity: None,
            role: None,
            active_page: Page::Dashboard,
            login_pending: false,
        }
    }

    #[test]
    fn test_loading_view() {
        let view = RootView::resolve(&snapshot(Phase::Loading), Locale::Hebrew);
        assert_eq!(view, RootView::Loading { message: "טוען..." });
        assert!(view.tab_bar().is_none());
    }

    #[test]
    fn test_error_view_uses_source_message() {
        let view = RootView::resolve(
            &snapshot(Phase::Error(AppError::bootstrap("network down"))),
            Locale::English,
        );
        assert_eq!(
            view,
            RootView::Error {
                title: "⚠️ Error",
                message: "network down".to_string(),
                retry_label: "Try again",
                recovery: Recovery::Restart,
            }
        );
    }

    #[test]
    fn test_error_view_falls_back_to_localized_message() {
        let err = AppError::auth(AuthFailure::Rejected, "");
        let view = RootView::resolve(&snapshot(Phase::Error(err)), Locale::Hebrew);
        match view {
            RootView::Error {
                message, recovery, ..
            } => {
                assert_eq!(message, "שגיאה בהתחברות");
                assert_eq!(recovery, Recovery::ReturnToLogin);
            }
            other => panic!("expected error view, got {other:?}"),
        }
    }

    #[test]
    fn test_login_and_preparing() {
        let mut snap = snapshot(Phase::Unauthenticated);
        assert_eq!(RootView::resolve(&snap, Locale::Hebrew), RootView::Login);

        snap.login_pending = true;
        assert_eq!(
            RootView::resolve(&snap, Locale::Hebrew),
            RootView::Preparing {
                message: "מכין את המערכת..."
            }
        );
    }

    #[test]
    fn test_main_view() {
        let mut snap = snapshot(Phase::Ready);
        snap.role = Some(Role::Driver);
        snap.active_page = Page::Route;

        let view = RootView::resolve(&snap, Locale::Hebrew);
        match &view {
            RootView::Main {
                role, page, title, ..
            } => {
                assert_eq!(*role, Role::Driver);
                assert_eq!(*page, PageView::Placeholder { page: Page::Route });
                assert_eq!(*title, "מסלול");
            }
            other => panic!("expected main view, got {other:?}"),
        }
        assert_eq!(view.tab_bar().and_then(TabBarView::selected), Some(Page::Route));
    }
}
