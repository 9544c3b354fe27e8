//! # Depot Terminal
//!
//! Terminal host for the Depot session core. It supplies file-backed
//! collaborators, renders the root view as text and drives the core from a
//! line-oriented command loop.
//!
//! ```text
//! ┌─────────────────────────┐
//! │     depot-terminal      │  ← THIS CRATE
//! │  CLI, shell loop, text  │
//! │  rendering, JSON files  │
//! └───────────┬─────────────┘
//!             ↓
//! ┌─────────────────────────┐
//! │        depot-app        │
//! │  AppCore, workflows,    │
//! │  views                  │
//! └─────────────────────────┘
//! ```

/// Command-line parsing
pub mod cli;

/// Host configuration loading
pub mod config;

/// File-backed collaborators
pub mod host;

/// Tracing subscriber setup
pub mod logging;

/// Text rendering of views
pub mod render;

/// Interactive command loop
pub mod shell;

pub use cli::{cli_parser, Commands, RunArgs, TabsArgs};
pub use config::load_app_config;
pub use host::{FileBootstrap, JsonStoreFactory, TracingHostShell};
pub use shell::{run_shell, ShellCommand};
