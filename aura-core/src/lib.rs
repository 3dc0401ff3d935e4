//! # aura-core
//!
//! Shared foundation for the Aura OS core: error taxonomy ([`AuraError`],
//! [`ValidationError`]), settings value types ([`Theme`], [`PermissionFlags`]),
//! and tracing initialization. Presentation-agnostic; used by storage,
//! memory-bank, and the shell facade.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{AuraError, Result, ValidationError};
pub use logger::init_tracing;
pub use types::{PermissionFlags, Theme};
