//! # Views - Render Model
//!
//! Pure functions from a [`SessionSnapshot`](crate::SessionSnapshot) to
//! what a frontend should draw. Frontends own layout and styling; these
//! types only decide *which* screen, page and tabs are shown.

mod page;
mod root;
mod tab_bar;

pub use page::PageView;
pub use root::RootView;
pub use tab_bar::{TabBarView, TabItem};
