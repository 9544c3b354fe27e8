//! # Depot App - Portable Headless Core
//!
//! Session bootstrap, login and role-based navigation for the Depot
//! business front end, independent of any rendering technology.
//!
//! ## Flow
//!
//! ```text
//! initialize() → BootstrapEffects → DataStoreFactory → get_profile() → Ready
//!                      │                                    │
//!                      └─ error → Error(BootstrapFailure)   └─ error → Role::User
//! ```
//!
//! Frontends hold an [`AppCore`] behind `Arc<RwLock<_>>`, drive it through
//! the [`workflows`] (or the [`ui::UiAppCore`] facade), and render the
//! [`views::RootView`] derived from its snapshot.

#![forbid(unsafe_code)]

pub mod config;
pub mod core;
pub mod errors;
pub mod navigation;
pub mod strings;
pub mod ui;
pub mod views;
pub mod workflows;

#[cfg(test)]
mod testing;

pub use crate::config::AppConfig;
pub use crate::core::{AppCore, Collaborators, Phase, SessionSnapshot};
pub use crate::errors::{AppError, AuthFailure, ErrorKind, Recovery};
pub use crate::navigation::{tab_set, NavIntent, Router, TabSpec};
pub use crate::strings::Locale;
pub use crate::ui::UiAppCore;
pub use crate::views::{PageView, RootView, TabBarView, TabItem};
pub use crate::workflows::session::LoginOutcome;
