//! # Workflows - Session Operations
//!
//! Every mutation of the session goes through a workflow. Workflows take the
//! shared `&Arc<RwLock<AppCore>>`, read what they need under a short lock,
//! await collaborators with the lock released, and then apply the result
//! under the write lock.
//!
//! Collaborator errors are caught here and converted into session state;
//! nothing propagates to a global handler.

pub mod navigation;
pub(crate) mod role;
pub mod session;
