//! # Collaborator Effect Interfaces
//!
//! The application core never talks to the network, the platform SDK or the
//! business backend directly. It consumes these traits, and hosts supply the
//! implementations:
//!
//! - [`BootstrapEffects`]: resolve server configuration and current identity
//! - [`DataStoreFactory`] / [`DataStore`]: identity-scoped business data
//! - [`HostShellEffects`]: fire-and-forget signals to the hosting shell
//!
//! No timeouts are enforced by the core; implementations own them.

mod bootstrap;
mod data_store;
mod host;

pub use bootstrap::BootstrapEffects;
pub use data_store::{DataStore, DataStoreFactory};
pub use host::{HapticKind, HostShellEffects, NoopHostShell};
