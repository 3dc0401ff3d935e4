//! Settings repository: display theme and permission flags.
//!
//! Each setting lives under its own storage key and loads independently.
//! Absent or unparsable stored values degrade to the type's default (logged
//! at warn), never to an error; only the underlying store can fail.

use std::sync::Arc;

use aura_core::{PermissionFlags, Theme};
use tracing::warn;

use crate::error::StorageError;
use crate::kv::{KvStore, KEY_PERMISSIONS, KEY_THEME};

/// Write-through repository for the shell's scalar settings.
#[derive(Clone)]
pub struct SettingsRepository {
    kv: Arc<dyn KvStore>,
}

impl SettingsRepository {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Loads the theme, defaulting to [`Theme::Light`] when the key is
    /// absent or holds an unknown value.
    pub async fn load_theme(&self) -> Result<Theme, StorageError> {
        match self.kv.get(KEY_THEME).await? {
            None => Ok(Theme::default()),
            Some(raw) => Ok(Theme::parse(&raw).unwrap_or_else(|| {
                let err = StorageError::Corrupt {
                    key: KEY_THEME.to_string(),
                    reason: format!("unknown theme '{}'", raw),
                };
                warn!(error = %err, "Falling back to default theme");
                Theme::default()
            })),
        }
    }

    pub async fn save_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.kv.set(KEY_THEME, theme.as_str()).await
    }

    /// Loads the permission flags, defaulting all flags when the key is
    /// absent or the stored JSON is unparsable.
    pub async fn load_permissions(&self) -> Result<PermissionFlags, StorageError> {
        match self.kv.get(KEY_PERMISSIONS).await? {
            None => Ok(PermissionFlags::default()),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(flags) => Ok(flags),
                Err(e) => {
                    let err = StorageError::Corrupt {
                        key: KEY_PERMISSIONS.to_string(),
                        reason: e.to_string(),
                    };
                    warn!(error = %err, "Falling back to default permissions");
                    Ok(PermissionFlags::default())
                }
            },
        }
    }

    pub async fn save_permissions(&self, flags: PermissionFlags) -> Result<(), StorageError> {
        let json = serde_json::to_string(&flags)
            .map_err(|e| StorageError::Database(format!("serialize permissions: {}", e)))?;
        self.kv.set(KEY_PERMISSIONS, &json).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_kv::InMemoryKvStore;

    fn repo() -> (Arc<InMemoryKvStore>, SettingsRepository) {
        let kv = Arc::new(InMemoryKvStore::new());
        let repo = SettingsRepository::new(kv.clone());
        (kv, repo)
    }

    #[tokio::test]
    async fn test_theme_defaults_when_absent() {
        let (_, repo) = repo();
        assert_eq!(repo.load_theme().await.unwrap(), Theme::Light);
    }

    #[tokio::test]
    async fn test_theme_round_trip() {
        let (_, repo) = repo();
        repo.save_theme(Theme::Dark).await.unwrap();
        assert_eq!(repo.load_theme().await.unwrap(), Theme::Dark);
    }

    #[tokio::test]
    async fn test_theme_corrupt_falls_back() {
        let (kv, repo) = repo();
        kv.set(KEY_THEME, "neon").await.unwrap();
        assert_eq!(repo.load_theme().await.unwrap(), Theme::Light);
    }

    #[tokio::test]
    async fn test_permissions_round_trip() {
        let (_, repo) = repo();
        let flags = PermissionFlags {
            notifications: true,
            camera: true,
            ..Default::default()
        };
        repo.save_permissions(flags).await.unwrap();
        assert_eq!(repo.load_permissions().await.unwrap(), flags);
    }

    #[tokio::test]
    async fn test_permissions_corrupt_falls_back() {
        let (kv, repo) = repo();
        kv.set(KEY_PERMISSIONS, "not-json{").await.unwrap();
        assert_eq!(
            repo.load_permissions().await.unwrap(),
            PermissionFlags::default()
        );
    }

    #[tokio::test]
    async fn test_settings_keys_are_independent() {
        let (kv, repo) = repo();
        kv.set(KEY_PERMISSIONS, "garbage").await.unwrap();
        repo.save_theme(Theme::Dark).await.unwrap();

        // Corrupt permissions must not affect the theme key.
        assert_eq!(repo.load_theme().await.unwrap(), Theme::Dark);
        assert_eq!(
            repo.load_permissions().await.unwrap(),
            PermissionFlags::default()
        );
    }
}
