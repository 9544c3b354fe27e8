//! Categorized session errors
//!
//! Only two error kinds ever reach the user from the session core:
//! - bootstrap failures, fatal to startup, recovered by a full restart
//! - authentication failures, recovered by resubmitting the login
//!
//! Role-resolution failures are deliberately absent: they degrade to the
//! default role instead of surfacing.

use depot_core::DepotError;
use std::fmt;

/// Error kinds surfaced by the session core
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Startup could not resolve configuration or identity
    BootstrapFailure,
    /// Login could not be completed
    AuthFailure,
}

impl ErrorKind {
    /// Get a short label for this kind.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::BootstrapFailure => "Bootstrap",
            Self::AuthFailure => "Authentication",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What the single retry affordance does for an error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Recovery {
    /// Discard all session state and bootstrap again
    Restart,
    /// Go back to the login screen, keeping server configuration
    ReturnToLogin,
}

/// Authentication failure reasons
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthFailure {
    /// Identity missing or malformed
    InvalidCredentials,
    /// Login attempted before server configuration was resolved
    NotBootstrapped,
    /// Data store could not be created for the identity
    StoreUnavailable,
    /// The auth collaborator reported its own failure
    Rejected,
}

impl fmt::Display for AuthFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "invalid credentials"),
            Self::NotBootstrapped => write!(f, "not bootstrapped"),
            Self::StoreUnavailable => write!(f, "data store unavailable"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// User-facing session error
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Startup failed
    #[error("Bootstrap failed: {message}")]
    Bootstrap {
        /// Message shown to the user
        message: String,
    },
    /// Login failed
    #[error("Authentication failed ({reason}): {message}")]
    Auth {
        /// Failure reason
        reason: AuthFailure,
        /// Message shown to the user
        message: String,
    },
}

impl AppError {
    /// Create a bootstrap failure
    pub fn bootstrap(message: impl Into<String>) -> Self {
        Self::Bootstrap {
            message: message.into(),
        }
    }

    /// Create an auth failure
    pub fn auth(reason: AuthFailure, message: impl Into<String>) -> Self {
        Self::Auth {
            reason,
            message: message.into(),
        }
    }

    /// Error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Bootstrap { .. } => ErrorKind::BootstrapFailure,
            Self::Auth { .. } => ErrorKind::AuthFailure,
        }
    }

    /// Message shown to the user (may be empty; views substitute a default)
    pub fn message(&self) -> &str {
        match self {
            Self::Bootstrap { message } | Self::Auth { message, .. } => message,
        }
    }

    /// Effect of the retry action for this error
    pub fn recovery(&self) -> Recovery {
        match self.kind() {
            ErrorKind::BootstrapFailure => Recovery::Restart,
            ErrorKind::AuthFailure => Recovery::ReturnToLogin,
        }
    }

    /// Whether the error can be recovered without a restart
    pub fn is_recoverable(&self) -> bool {
        self.recovery() == Recovery::ReturnToLogin
    }

    /// Get a short error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Bootstrap { .. } => "BOOTSTRAP_FAILED",
            Self::Auth { reason, .. } => match reason {
                AuthFailure::InvalidCredentials => "AUTH_INVALID",
                AuthFailure::NotBootstrapped => "AUTH_NOT_BOOTSTRAPPED",
                AuthFailure::StoreUnavailable => "AUTH_STORE",
                AuthFailure::Rejected => "AUTH_REJECTED",
            },
        }
    }
}

impl From<DepotError> for AppError {
    /// Collaborator errors raised during startup are bootstrap failures.
    fn from(err: DepotError) -> Self {
        Self::bootstrap(err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_error() {
        let err = AppError::bootstrap("network down");
        assert_eq!(err.to_string(), "Bootstrap failed: network down");
        assert_eq!(err.message(), "network down");
        assert_eq!(err.kind(), ErrorKind::BootstrapFailure);
        assert_eq!(err.recovery(), Recovery::Restart);
        assert!(!err.is_recoverable());
        assert_eq!(err.code(), "BOOTSTRAP_FAILED");
    }

    #[test]
    fn test_auth_error() {
        let err = AppError::auth(AuthFailure::InvalidCredentials, "missing user id");
        assert_eq!(
            err.to_string(),
            "Authentication failed (invalid credentials): missing user id"
        );
        assert_eq!(err.kind(), ErrorKind::AuthFailure);
        assert_eq!(err.recovery(), Recovery::ReturnToLogin);
        assert!(err.is_recoverable());
        assert_eq!(err.code(), "AUTH_INVALID");
    }

    #[test]
    fn test_depot_error_becomes_bootstrap_failure() {
        let err: AppError = DepotError::network("network down").into();
        assert_eq!(err, AppError::bootstrap("network down"));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ErrorKind::BootstrapFailure.to_string(), "Bootstrap");
        assert_eq!(ErrorKind::AuthFailure.to_string(), "Authentication");
    }
}
