use super::session::{Phase, SessionSnapshot, SessionState};
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::navigation::NavIntent;
use depot_core::effects::{
    BootstrapEffects, DataStore, DataStoreFactory, HapticKind, HostShellEffects,
};
use depot_core::{BootstrapConfig, DepotError, Identity, Page, Role, SessionId};
use futures_signals::signal::{Mutable, Signal};
use std::sync::Arc;

/// Effect implementations supplied by the host
#[derive(Clone)]
pub struct Collaborators {
    /// Startup configuration source
    pub bootstrap: Arc<dyn BootstrapEffects>,
    /// Data store construction
    pub stores: Arc<dyn DataStoreFactory>,
    /// Hosting shell signals
    pub host: Arc<dyn HostShellEffects>,
}

/// Application core: the single owner of session and navigation state.
///
/// Frontends share it as `Arc<RwLock<AppCore>>` and mutate it only through
/// [`crate::workflows`]. All transitions happen under the write lock; no
/// collaborator call is awaited while the lock is held.
pub struct AppCore {
    config: AppConfig,
    collaborators: Collaborators,
    state: SessionState,
    phase_signal: Mutable<Phase>,
    page_signal: Mutable<Page>,
}

impl AppCore {
    /// Create a core in the `Loading` phase of a fresh launch
    pub fn new(config: AppConfig, collaborators: Collaborators) -> Self {
        let state = SessionState::new(config.default_page);
        let phase_signal = Mutable::new(state.phase.clone());
        let page_signal = Mutable::new(state.router.current());
        Self {
            config,
            collaborators,
            state,
            phase_signal,
            page_signal,
        }
    }

    /// Application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current launch identifier
    pub fn session_id(&self) -> SessionId {
        self.state.session_id
    }

    /// Current phase
    pub fn phase(&self) -> &Phase {
        &self.state.phase
    }

    /// Active page
    pub fn active_page(&self) -> Page {
        self.state.router.current()
    }

    /// Resolved role
    pub fn role(&self) -> Option<Role> {
        self.state.role
    }

    /// Current identity
    pub fn identity(&self) -> Option<&Identity> {
        self.state.identity.as_ref()
    }

    /// Server configuration, once bootstrapped
    pub fn bootstrap_config(&self) -> Option<&BootstrapConfig> {
        self.state.config.as_ref()
    }

    /// Data store bound to the current identity, for page components
    pub fn data_store(&self) -> Option<Arc<dyn DataStore>> {
        self.state.data_store.clone()
    }

    /// Whether back-navigation is possible
    pub fn can_go_back(&self) -> bool {
        self.state.router.can_back()
    }

    /// Copy of the session for rendering
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.snapshot()
    }

    /// Signal tracking the phase
    pub fn phase_signal(&self) -> impl Signal<Item = Phase> + Send + Sync + 'static {
        self.phase_signal.signal_cloned()
    }

    /// Signal tracking the active page
    pub fn page_signal(&self) -> impl Signal<Item = Page> + Send + Sync + 'static {
        self.page_signal.signal()
    }

    // =========================================================================
    // Transitions (workflows only)
    // =========================================================================

    pub(crate) fn bootstrap_effects(&self) -> Arc<dyn BootstrapEffects> {
        self.collaborators.bootstrap.clone()
    }

    /// Request haptic feedback if enabled. Fire-and-forget.
    pub(crate) fn haptic(&self, kind: HapticKind) {
        if self.config.haptics_enabled {
            self.collaborators.host.haptic_feedback(kind);
        }
    }

    /// Claim this launch's single bootstrap attempt.
    pub(crate) fn begin_bootstrap(&mut self) -> bool {
        if self.state.bootstrap_attempted || self.state.phase != Phase::Loading {
            return false;
        }
        self.state.bootstrap_attempted = true;
        true
    }

    pub(crate) fn set_bootstrap_config(&mut self, config: BootstrapConfig) {
        self.state.config = Some(config);
    }

    pub(crate) fn create_data_store(
        &self,
        identity: &Identity,
    ) -> Result<Arc<dyn DataStore>, DepotError> {
        let config = self
            .state
            .config
            .as_ref()
            .ok_or_else(|| DepotError::invalid("bootstrap configuration not resolved"))?;
        self.collaborators
            .stores
            .create_data_store(config, self.config.data_store_mode, identity)
    }

    /// Replace identity and data store wholesale.
    pub(crate) fn bind_identity(&mut self, identity: Identity, store: Arc<dyn DataStore>) {
        self.state.identity = Some(identity);
        self.state.data_store = Some(store);
        self.state.role = None;
    }

    pub(crate) fn clear_identity(&mut self) {
        self.state.identity = None;
        self.state.data_store = None;
        self.state.role = None;
    }

    pub(crate) fn enter_ready(&mut self, role: Role) {
        self.state.role = Some(role);
        self.set_phase(Phase::Ready);
    }

    pub(crate) fn fail(&mut self, err: AppError) {
        tracing::warn!(
            session_id = %self.state.session_id,
            code = err.code(),
            error = %err,
            "session error"
        );
        self.set_phase(Phase::Error(err));
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        if self.state.phase != phase {
            tracing::info!(
                session_id = %self.state.session_id,
                from = self.state.phase.name(),
                to = phase.name(),
                "phase transition"
            );
        }
        self.state.phase = phase;
        self.phase_signal.set_neq(self.state.phase.clone());
    }

    /// Start a login: supersedes any earlier one and resets navigation.
    pub(crate) fn begin_login(&mut self) -> u64 {
        self.state.login_generation += 1;
        let generation = self.state.login_generation;
        self.state.pending_login = Some(generation);
        self.clear_identity();
        self.reset_navigation();
        self.set_phase(Phase::Unauthenticated);
        generation
    }

    pub(crate) fn is_current_login(&self, generation: u64) -> bool {
        self.state.pending_login == Some(generation)
    }

    pub(crate) fn end_login(&mut self) {
        self.state.pending_login = None;
    }

    /// Drop any in-flight login so its completion is discarded.
    pub(crate) fn cancel_pending_login(&mut self) {
        self.state.login_generation += 1;
        self.state.pending_login = None;
    }

    /// Discard everything and start a new launch.
    pub(crate) fn restart(&mut self) {
        let previous = self.state.session_id;
        self.state = SessionState::new(self.config.default_page);
        tracing::info!(
            previous = %previous,
            session_id = %self.state.session_id,
            "session restarted"
        );
        self.phase_signal.set_neq(self.state.phase.clone());
        self.page_signal.set_neq(self.state.router.current());
    }

    pub(crate) fn reset_navigation(&mut self) {
        self.state.router.reset(self.config.default_page);
        self.page_signal.set_neq(self.state.router.current());
    }

    /// Apply a navigation intent. Returns whether the page changed.
    pub(crate) fn apply_nav(&mut self, intent: NavIntent) -> bool {
        let changed = self.state.router.apply(intent);
        self.page_signal.set_neq(self.state.router.current());
        changed
    }
}
