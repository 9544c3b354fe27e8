//! Depot Core - Foundation Types
//!
//! This crate holds the vocabulary shared by every Depot layer and the pure
//! effect interfaces the application core consumes. It has no runtime and no
//! application logic.
//!
//! # Contents
//!
//! - [`DepotError`]: unified error type for collaborator operations
//! - [`Role`] and [`Page`]: the closed enumerations navigation is built on
//! - [`Identity`], [`Profile`], [`BootstrapConfig`]: records exchanged with
//!   the bootstrap provider and data store
//! - [`effects`]: async traits for the bootstrap provider, data store and
//!   host shell

#![forbid(unsafe_code)]

/// Pure collaborator interfaces (no implementations)
pub mod effects;

/// Unified error handling
pub mod errors;

/// User and session identifiers
pub mod identifiers;

/// Page identifiers
pub mod page;

/// Identity, profile and bootstrap records
pub mod records;

/// User roles
pub mod role;

pub use errors::{DepotError, Result};
pub use identifiers::{SessionId, UserId};
pub use page::Page;
pub use records::{Bootstrap, BootstrapConfig, DataStoreMode, Identity, Profile};
pub use role::Role;
