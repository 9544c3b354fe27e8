//! Unified error system for Depot collaborators
//!
//! One flat error type is shared by every collaborator interface. The
//! application core categorizes these into user-facing errors at its own
//! boundary.

use serde::{Deserialize, Serialize};

/// Unified error type for all Depot operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum DepotError {
    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// Error message describing what was not found
        message: String,
    },

    /// Permission denied
    #[error("Permission denied: {message}")]
    PermissionDenied {
        /// Error message describing the permission issue
        message: String,
    },

    /// Network or transport error
    #[error("Network error: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message describing the serialization failure
        message: String,
    },

    /// Storage operation failed
    #[error("Storage error: {message}")]
    Storage {
        /// Error message describing the storage failure
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal error
        message: String,
    },
}

impl DepotError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The bare message without the category prefix.
    ///
    /// Frontends show this text directly, so a bootstrap failure raised as
    /// `network("network down")` surfaces as `"network down"`.
    pub fn message(&self) -> &str {
        match self {
            Self::Invalid { message }
            | Self::NotFound { message }
            | Self::PermissionDenied { message }
            | Self::Network { message }
            | Self::Serialization { message }
            | Self::Storage { message }
            | Self::Internal { message } => message,
        }
    }
}

/// Standard Result type for Depot operations
pub type Result<T> = std::result::Result<T, DepotError>;

impl From<serde_json::Error> for DepotError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::io::Error> for DepotError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(err.to_string()),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(err.to_string()),
            _ => Self::storage(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_category() {
        let err = DepotError::network("network down");
        assert_eq!(err.to_string(), "Network error: network down");
        assert_eq!(err.message(), "network down");
    }

    #[test]
    fn test_io_error_mapping() {
        let err: DepotError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, DepotError::NotFound { .. }));

        let err: DepotError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope").into();
        assert!(matches!(err, DepotError::PermissionDenied { .. }));

        let err: DepotError = std::io::Error::new(std::io::ErrorKind::Other, "disk").into();
        assert!(matches!(err, DepotError::Storage { .. }));
    }

    #[test]
    fn test_json_error_mapping() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: DepotError = parse.unwrap_err().into();
        assert!(matches!(err, DepotError::Serialization { .. }));
    }
}
