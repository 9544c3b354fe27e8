//! Page identifiers for navigation intents

use crate::DepotError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed page enumeration.
///
/// Not every page has a tab: `Users`, `Chat`, `Channels` and `Demo` are
/// reached from links inside other pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Landing page for every role
    #[default]
    Dashboard,
    /// Order list
    Orders,
    /// Task board
    Tasks,
    /// Account and app settings
    Settings,
    /// Product catalogue
    Products,
    /// Driver deliveries
    Deliveries,
    /// Driver route
    Route,
    /// Customer directory
    Customers,
    /// Reports
    Reports,
    /// User management
    Users,
    /// Group chat
    Chat,
    /// Broadcast channels
    Channels,
    /// Demo landing for users without an assigned role
    Demo,
}

impl Page {
    /// Every page, in declaration order
    pub fn all() -> &'static [Page] {
        &[
            Page::Dashboard,
            Page::Orders,
            Page::Tasks,
            Page::Settings,
            Page::Products,
            Page::Deliveries,
            Page::Route,
            Page::Customers,
            Page::Reports,
            Page::Users,
            Page::Chat,
            Page::Channels,
            Page::Demo,
        ]
    }

    /// Wire identifier used in navigation intents
    pub fn id(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Orders => "orders",
            Page::Tasks => "tasks",
            Page::Settings => "settings",
            Page::Products => "products",
            Page::Deliveries => "deliveries",
            Page::Route => "route",
            Page::Customers => "customers",
            Page::Reports => "reports",
            Page::Users => "users",
            Page::Chat => "chat",
            Page::Channels => "channels",
            Page::Demo => "demo",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = DepotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::all()
            .iter()
            .copied()
            .find(|page| page.id() == s)
            .ok_or_else(|| DepotError::invalid(format!("unknown page '{s}'")))
    }
}
