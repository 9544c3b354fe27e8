use crate::errors::AppError;
use crate::navigation::Router;
use depot_core::effects::DataStore;
use depot_core::{BootstrapConfig, Identity, Page, Role, SessionId};
use std::fmt;
use std::sync::Arc;

/// Session lifecycle phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Bootstrap (and role resolution for a pre-authenticated user) running
    Loading,
    /// Startup or login failed; waits for the retry action
    Error(AppError),
    /// No identity; the login screen is shown
    Unauthenticated,
    /// Identity, data store and role are in place
    Ready,
}

impl Phase {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Loading => "loading",
            Phase::Error(_) => "error",
            Phase::Unauthenticated => "unauthenticated",
            Phase::Ready => "ready",
        }
    }

    /// The error, if in the error phase
    pub fn error(&self) -> Option<&AppError> {
        match self {
            Phase::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only copy of the session, the input to every view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Launch identifier
    pub session_id: SessionId,
    /// Lifecycle phase
    pub phase: Phase,
    /// Server configuration, once bootstrapped
    pub config: Option<BootstrapConfig>,
    /// Current identity
    pub identity: Option<Identity>,
    /// Resolved role (set only in `Ready`)
    pub role: Option<Role>,
    /// Active page
    pub active_page: Page,
    /// Whether a login is being completed
    pub login_pending: bool,
}

/// Mutable session state. Only `AppCore` touches it.
pub(crate) struct SessionState {
    pub(crate) session_id: SessionId,
    pub(crate) phase: Phase,
    pub(crate) bootstrap_attempted: bool,
    pub(crate) config: Option<BootstrapConfig>,
    pub(crate) identity: Option<Identity>,
    pub(crate) role: Option<Role>,
    pub(crate) data_store: Option<Arc<dyn DataStore>>,
    pub(crate) router: Router,
    /// Generation of the most recently submitted login
    pub(crate) login_generation: u64,
    /// Generation of the login currently being completed
    pub(crate) pending_login: Option<u64>,
}

impl SessionState {
    pub(crate) fn new(default_page: Page) -> Self {
        Self {
            session_id: SessionId::new(),
            phase: Phase::Loading,
            bootstrap_attempted: false,
            config: None,
            identity: None,
            role: None,
            data_store: None,
            router: Router::new(default_page),
            login_generation: 0,
            pending_login: None,
        }
    }

    pub(crate) fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.session_id,
            phase: self.phase.clone(),
            config: self.config.clone(),
            identity: self.identity.clone(),
            role: self.role,
            active_page: self.router.current(),
            login_pending: self.pending_login.is_some(),
        }
    }
}
