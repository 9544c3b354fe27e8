//! User roles
//!
//! A role classifies the feature set a user may reach. Roles are resolved
//! from the data store profile, never supplied by the user.

use crate::DepotError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed role enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Business owner / manager
    Manager,
    /// Dispatch desk
    Dispatcher,
    /// Delivery driver
    Driver,
    /// Warehouse worker
    Warehouse,
    /// Sales representative
    Sales,
    /// Customer service agent
    CustomerService,
    /// Degraded default when the profile role cannot be resolved
    #[default]
    User,
}

impl Role {
    /// Every role, in declaration order
    pub fn all() -> &'static [Role] {
        &[
            Role::Manager,
            Role::Dispatcher,
            Role::Driver,
            Role::Warehouse,
            Role::Sales,
            Role::CustomerService,
            Role::User,
        ]
    }

    /// Wire identifier (`"customer_service"`, `"user"`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Dispatcher => "dispatcher",
            Role::Driver => "driver",
            Role::Warehouse => "warehouse",
            Role::Sales => "sales",
            Role::CustomerService => "customer_service",
            Role::User => "user",
        }
    }

    /// Whether this is the degraded default role
    pub fn is_default(&self) -> bool {
        matches!(self, Role::User)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DepotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| DepotError::invalid(format!("unknown role '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in Role::all() {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), *role);
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!("admin".parse::<Role>().is_err());
        assert!("Manager".parse::<Role>().is_err());
    }

    #[test]
    fn test_only_user_is_default() {
        assert!(Role::default().is_default());
        assert_eq!(Role::all().iter().filter(|role| role.is_default()).count(), 1);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Role::CustomerService).unwrap();
        assert_eq!(json, "\"customer_service\"");
    }
}
