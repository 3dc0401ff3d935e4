//! Key-value storage interface.
//!
//! String-keyed text storage with `get` and `set`. The Aura core persists
//! three independent values under fixed keys: the serialized memory bank,
//! the display theme, and the permission flag set. Each key loads and
//! defaults independently; callers treat unparsable values as absent.

use async_trait::async_trait;

use crate::error::StorageError;

/// Storage key for the JSON-serialized memory bank.
pub const KEY_MEMORY_BANK: &str = "memory_bank";

/// Storage key for the display theme ("light" / "dark").
pub const KEY_THEME: &str = "settings.theme";

/// Storage key for the JSON-serialized permission flag set.
pub const KEY_PERMISSIONS: &str = "settings.permissions";

/// Trait for durable string-keyed text storage.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Returns the stored value for `key`, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
