//! # Core Application Module
//!
//! - [`AppCore`]: single owner of the session and navigation state
//! - [`Phase`]: the `Loading | Error | Unauthenticated | Ready` machine
//! - [`SessionSnapshot`]: read-only copy handed to views
//! - [`Collaborators`]: the effect implementations a host supplies

mod app;
mod session;

pub use app::{AppCore, Collaborators};
pub use session::{Phase, SessionSnapshot};
