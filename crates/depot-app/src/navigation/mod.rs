//! # Navigation
//!
//! Role tab sets and the page router.
//!
//! The tab set decides what the bottom bar shows; it is not a permission
//! check. Pages outside a role's tab set (`users`, `chat`, ...) stay
//! reachable through links inside other pages.

mod router;
mod tabs;

pub use router::{NavIntent, Router, MAX_HISTORY};
pub use tabs::{is_tab, tab_set, TabSpec};
