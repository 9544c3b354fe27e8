//! Application configuration
//!
//! Host-controlled settings for the session core. Every field has a default
//! so partial configuration files are accepted.

use crate::strings::Locale;
use depot_core::{DataStoreMode, Page};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display locale
    pub locale: Locale,
    /// Page shown after login and after every session reset
    pub default_page: Page,
    /// Whether navigation requests haptic feedback from the host shell
    pub haptics_enabled: bool,
    /// Backend selection for data stores created by the session
    pub data_store_mode: DataStoreMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            default_page: Page::Dashboard,
            haptics_enabled: true,
            data_store_mode: DataStoreMode::Real,
        }
    }
}
