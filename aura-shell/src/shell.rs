//! The Shell facade: one owned object with an explicit load lifecycle.

use std::sync::Arc;

use anyhow::Result;
use assistant::{AssistantBackend, ChatMessage, ChatSession, OpenAiAssistant, SendOutcome};
use aura_core::{PermissionFlags, Theme};
use memory_bank::{Category, CategoryFilter, MemoryBank, MemoryBankData, MemoryItem};
use storage::{KvStore, SettingsRepository, SqliteKvStore};
use tracing::info;

use crate::config::ShellConfig;

/// The running shell: memory bank, settings, and the chat session, loaded
/// from one key-value store. Presentation layers call through this object;
/// every mutation carries its write-through persistence internally.
pub struct Shell {
    bank: Arc<MemoryBank>,
    settings: SettingsRepository,
    session: ChatSession,
}

impl Shell {
    /// Starts the shell from config: opens the SQLite key-value store, loads
    /// the persisted memory bank (corrupt or absent data degrades to empty),
    /// and wires the OpenAI assistant backend.
    pub async fn start(config: &ShellConfig) -> Result<Self> {
        config.validate()?;
        let kv = SqliteKvStore::new(&config.database_url).await?;

        let backend = match &config.openai_base_url {
            Some(base_url) => {
                OpenAiAssistant::with_base_url(config.openai_api_key.clone(), base_url.clone())
            }
            None => OpenAiAssistant::new(config.openai_api_key.clone()),
        }
        .with_model(&config.model);

        Self::with_backend(Arc::new(kv), Arc::new(backend)).await
    }

    /// Starts the shell on an explicit key-value store and backend. Test and
    /// embedding seam.
    pub async fn with_backend(
        kv: Arc<dyn KvStore>,
        backend: Arc<dyn AssistantBackend>,
    ) -> Result<Self> {
        let bank = Arc::new(MemoryBank::load(kv.clone()).await);
        let settings = SettingsRepository::new(kv);
        let session = ChatSession::new(backend, bank.clone());

        info!(records = bank.len().await, "Shell started");
        Ok(Self {
            bank,
            settings,
            session,
        })
    }

    // --- Memory bank ---

    pub async fn add_memory(
        &self,
        category: Category,
        description: &str,
        details: &[String],
    ) -> aura_core::Result<MemoryItem> {
        self.bank.add_record(category, description, details).await
    }

    pub async fn memories(&self) -> MemoryBankData {
        self.bank.query_all().await
    }

    pub async fn filter_memories(&self, filter: CategoryFilter) -> Vec<(Category, MemoryItem)> {
        self.bank.filter_by_category(filter).await
    }

    pub async fn search_memories(
        &self,
        query: &str,
        filter: CategoryFilter,
    ) -> Vec<(Category, MemoryItem)> {
        self.bank.search(query, filter).await
    }

    // --- Settings ---

    pub async fn theme(&self) -> Result<Theme> {
        Ok(self.settings.load_theme().await?)
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<()> {
        Ok(self.settings.save_theme(theme).await?)
    }

    pub async fn permissions(&self) -> Result<PermissionFlags> {
        Ok(self.settings.load_permissions().await?)
    }

    pub async fn set_permissions(&self, flags: PermissionFlags) -> Result<()> {
        Ok(self.settings.save_permissions(flags).await?)
    }

    // --- Chat ---

    pub async fn send_chat_message(&self, text: &str) -> SendOutcome {
        self.session.send_user_message(text).await
    }

    pub async fn chat_transcript(&self) -> Vec<ChatMessage> {
        self.session.transcript().await
    }

    pub async fn reset_chat(&self) {
        self.session.reset().await
    }
}
