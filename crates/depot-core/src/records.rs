//! Records exchanged with the bootstrap provider and data store

use crate::{DepotError, Role, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Authenticated user as reported by the host platform.
///
/// Set exactly once per login and replaced wholesale on re-login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Platform user identifier
    pub id: UserId,
    /// Name shown in the shell
    #[serde(default)]
    pub display_name: String,
    /// Optional platform handle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Identity {
    /// Create an identity with a display name
    pub fn new(id: impl Into<UserId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            username: None,
        }
    }
}

/// Profile returned by the data store.
///
/// The role arrives as a raw string; [`Profile::role`] is the only place it
/// is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Raw role identifier
    pub role: String,
    /// Display name override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Profile {
    /// Build a profile for a known role
    pub fn for_role(role: Role) -> Self {
        Self {
            role: role.as_str().to_string(),
            display_name: None,
        }
    }

    /// Interpret the raw role
    pub fn role(&self) -> Result<Role, DepotError> {
        self.role.parse()
    }
}

/// Server configuration resolved at bootstrap
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Application name announced by the server
    #[serde(default)]
    pub app_name: String,
    /// Base URL of the business API
    #[serde(default)]
    pub api_base: String,
    /// Server-side feature switches
    #[serde(default)]
    pub features: BTreeMap<String, bool>,
}

/// Result of a bootstrap round trip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bootstrap {
    /// Server configuration
    pub config: BootstrapConfig,
    /// Identity already established by the host, if any
    #[serde(default)]
    pub user: Option<Identity>,
}

/// Data store backend selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataStoreMode {
    /// Live backend
    #[default]
    Real,
    /// Canned demo data
    Demo,
}

impl fmt::Display for DataStoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => write!(f, "real"),
            Self::Demo => write!(f, "demo"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_parses_without_user() {
        let json = r#"{"config": {"app_name": "depot", "api_base": "https://api"}}"#;
        let bootstrap: Bootstrap = serde_json::from_str(json).unwrap();
        assert!(bootstrap.user.is_none());
        assert_eq!(bootstrap.config.app_name, "depot");
        assert!(bootstrap.config.features.is_empty());
    }

    #[test]
    fn test_bootstrap_parses_with_user() {
        let json = r#"{
            "config": {"features": {"chat": true}},
            "user": {"id": "42", "display_name": "Dana", "username": "dana"}
        }"#;
        let bootstrap: Bootstrap = serde_json::from_str(json).unwrap();
        let user = bootstrap.user.unwrap();
        assert_eq!(user.id.as_str(), "42");
        assert_eq!(user.username.as_deref(), Some("dana"));
        assert_eq!(bootstrap.config.features.get("chat"), Some(&true));
    }

    #[test]
    fn test_profile_role_interpretation() {
        assert_eq!(Profile::for_role(Role::Driver).role().unwrap(), Role::Driver);

        let unknown = Profile {
            role: "owner".to_string(),
            display_name: None,
        };
        assert!(unknown.role().is_err());
    }
}
