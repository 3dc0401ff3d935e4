//! Storage error types.
//!
//! Used by key-value store implementations and callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Corrupt stored value for key '{key}': {reason}")]
    Corrupt { key: String, reason: String },
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        StorageError::Database(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_display_names_the_key() {
        let err = StorageError::Corrupt {
            key: "settings.theme".to_string(),
            reason: "unknown theme 'neon'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Corrupt stored value for key 'settings.theme': unknown theme 'neon'"
        );
    }
}
