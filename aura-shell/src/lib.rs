//! # aura-shell
//!
//! The shell facade of the Aura OS core. [`Shell`] is the single owned
//! object a presentation layer talks to: it loads persisted state once at
//! startup and exposes mutation methods that carry their persistence side
//! effects internally, instead of free functions touching shared storage.
//!
//! ## Modules
//!
//! - [`config`] - ShellConfig (env-based loading + validation)
//! - [`shell`] - Shell facade

pub mod config;
pub mod shell;

pub use config::ShellConfig;
pub use shell::Shell;
