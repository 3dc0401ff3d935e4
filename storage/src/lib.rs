//! Storage crate: durable key-value persistence and settings repository.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`kv`] – KvStore trait and storage key constants
//! - [`sqlite_kv`] – SqliteKvStore (SQLite-backed key-value store)
//! - [`memory_kv`] – InMemoryKvStore (tests and prototyping)
//! - [`settings`] – SettingsRepository (theme + permission flags)

mod error;
mod kv;
mod memory_kv;
mod settings;
mod sqlite_kv;

#[cfg(test)]
mod sqlite_kv_test;

pub use error::StorageError;
pub use kv::{KvStore, KEY_MEMORY_BANK, KEY_PERMISSIONS, KEY_THEME};
pub use memory_kv::InMemoryKvStore;
pub use settings::SettingsRepository;
pub use sqlite_kv::SqliteKvStore;
