//! Session Workflow - bootstrap, login, logout and retry
//!
//! ```text
//!            initialize()                  login()
//! Loading ──────────────► Unauthenticated ────────► Ready
//!    │  identity present ───────────────────────────▲  │
//!    │                                                  │ login() (re-login)
//!    └─► Error(BootstrapFailure) ── retry(): restart ──►Loading
//!        Error(AuthFailure) ─────── retry() ──────────► Unauthenticated
//! ```

use super::role::resolve_role;
use crate::core::{AppCore, Phase};
use crate::errors::{AppError, AuthFailure, ErrorKind, Recovery};
use async_lock::RwLock;
use depot_core::{Bootstrap, Identity, Role};
use std::sync::Arc;

/// Result of a [`login`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The session is ready with this role
    Ready(Role),
    /// A newer login (or a logout) took over before this one completed
    Superseded,
    /// The login failed; the session is in `Error(AuthFailure)`
    Failed(AppError),
    /// The login was refused without touching the session
    Rejected(AppError),
}

/// Phases in which login-screen operations are meaningful
fn accepts_login(phase: &Phase) -> bool {
    match phase {
        Phase::Unauthenticated | Phase::Ready => true,
        Phase::Error(err) => err.kind() == ErrorKind::AuthFailure,
        Phase::Loading => false,
    }
}

/// Bootstrap the session.
///
/// **What it does**: resolves server configuration and the host identity,
/// binds a data store to that identity and resolves its role.
/// **Returns**: the phase after completion
///
/// Runs at most once per launch; later calls return the current phase.
/// A failing profile lookup degrades to [`Role::User`] instead of failing.
pub async fn initialize(app_core: &Arc<RwLock<AppCore>>) -> Phase {
    let (bootstrap, session_id) = {
        let mut core = app_core.write().await;
        if !core.begin_bootstrap() {
            tracing::debug!(
                session_id = %core.session_id(),
                "bootstrap already attempted for this launch"
            );
            return core.phase().clone();
        }
        (core.bootstrap_effects(), core.session_id())
    };

    tracing::info!(session_id = %session_id, "bootstrapping");
    let result = bootstrap.bootstrap().await;

    let store = {
        let mut core = app_core.write().await;
        if core.session_id() != session_id {
            return core.phase().clone();
        }

        let Bootstrap { config, user } = match result {
            Ok(bootstrap) => bootstrap,
            Err(err) => {
                core.fail(err.into());
                return core.phase().clone();
            }
        };
        core.set_bootstrap_config(config);

        let Some(identity) = user.filter(|identity| !identity.id.is_empty()) else {
            tracing::debug!(session_id = %session_id, "no host identity, login required");
            core.set_phase(Phase::Unauthenticated);
            return core.phase().clone();
        };

        match core.create_data_store(&identity) {
            Ok(store) => {
                core.bind_identity(identity, store.clone());
                store
            }
            Err(err) => {
                core.fail(err.into());
                return core.phase().clone();
            }
        }
    };

    let role = resolve_role(store.as_ref()).await;

    let mut core = app_core.write().await;
    if core.session_id() == session_id && *core.phase() == Phase::Loading {
        tracing::info!(session_id = %session_id, role = %role, "session ready");
        core.enter_ready(role);
    }
    core.phase().clone()
}

/// Log in with an identity from the auth collaborator.
///
/// **What it does**: replaces identity and data store wholesale, resets
/// navigation and resolves the role (degrading to [`Role::User`]).
/// **Returns**: how the call ended
///
/// The most recently submitted login wins. A call overtaken by a newer
/// login or a logout returns [`LoginOutcome::Superseded`] and leaves the
/// session to the newer operation, whatever the completion order.
pub async fn login(app_core: &Arc<RwLock<AppCore>>, identity: Identity) -> LoginOutcome {
    let (generation, store) = {
        let mut core = app_core.write().await;
        if !accepts_login(core.phase()) || core.bootstrap_config().is_none() {
            let err = AppError::auth(
                AuthFailure::NotBootstrapped,
                "login attempted before bootstrap completed",
            );
            tracing::warn!(phase = core.phase().name(), error = %err, "login rejected");
            return LoginOutcome::Rejected(err);
        }

        let generation = core.begin_login();
        tracing::info!(
            session_id = %core.session_id(),
            generation,
            user = %identity.id,
            "login started"
        );

        if identity.id.is_empty() {
            core.end_login();
            let err = AppError::auth(AuthFailure::InvalidCredentials, "missing user id");
            core.fail(err.clone());
            return LoginOutcome::Failed(err);
        }

        match core.create_data_store(&identity) {
            Ok(store) => {
                core.bind_identity(identity, store.clone());
                (generation, store)
            }
            Err(source) => {
                core.end_login();
                let err = AppError::auth(AuthFailure::StoreUnavailable, source.message());
                core.fail(err.clone());
                return LoginOutcome::Failed(err);
            }
        }
    };

    let role = resolve_role(store.as_ref()).await;

    let mut core = app_core.write().await;
    if !core.is_current_login(generation) {
        tracing::debug!(generation, "login superseded");
        return LoginOutcome::Superseded;
    }
    core.end_login();
    core.enter_ready(role);
    tracing::info!(session_id = %core.session_id(), generation, role = %role, "login complete");
    LoginOutcome::Ready(role)
}

/// Report a failure raised by the auth collaborator itself.
///
/// Only meaningful while the login screen is up; ignored otherwise.
pub async fn report_auth_error(
    app_core: &Arc<RwLock<AppCore>>,
    message: impl Into<String>,
) -> Phase {
    let mut core = app_core.write().await;
    let on_login_screen = match core.phase() {
        Phase::Unauthenticated => true,
        Phase::Error(err) => err.kind() == ErrorKind::AuthFailure,
        Phase::Loading | Phase::Ready => false,
    };
    if !on_login_screen {
        tracing::debug!(phase = core.phase().name(), "auth error ignored outside login");
        return core.phase().clone();
    }
    core.cancel_pending_login();
    core.clear_identity();
    core.fail(AppError::auth(AuthFailure::Rejected, message));
    core.phase().clone()
}

/// Log out: drop identity, role and data store and return to the login
/// screen. Server configuration is kept.
pub async fn logout(app_core: &Arc<RwLock<AppCore>>) -> Phase {
    let mut core = app_core.write().await;
    if !accepts_login(core.phase()) {
        return core.phase().clone();
    }
    tracing::info!(session_id = %core.session_id(), "logout");
    core.cancel_pending_login();
    core.clear_identity();
    core.reset_navigation();
    core.set_phase(Phase::Unauthenticated);
    core.phase().clone()
}

/// The retry action of the error screen.
///
/// Bootstrap failures restart the whole session (new launch, fresh
/// bootstrap); auth failures return to the login screen. No-op outside the
/// error phase.
pub async fn retry(app_core: &Arc<RwLock<AppCore>>) -> Phase {
    let recovery = {
        let mut core = app_core.write().await;
        let recovery = match core.phase().error() {
            Some(err) => err.recovery(),
            None => return core.phase().clone(),
        };
        match recovery {
            Recovery::Restart => core.restart(),
            Recovery::ReturnToLogin => {
                core.cancel_pending_login();
                core.clear_identity();
                core.set_phase(Phase::Unauthenticated);
            }
        }
        recovery
    };

    match recovery {
        Recovery::Restart => initialize(app_core).await,
        Recovery::ReturnToLogin => app_core.read().await.phase().clone(),
    }
}
