//! Shell config: database path, logging, and assistant backend. Loaded from env.

use anyhow::Result;
use std::env;

/// Config for starting the shell. Callers load `.env` (dotenvy) first.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// AURA_DATABASE_URL — SQLite file path for the key-value store.
    pub database_url: String,
    /// LOG_FILE — log file path.
    pub log_file: String,
    /// OPENAI_API_KEY — required for the OpenAI assistant backend.
    pub openai_api_key: String,
    /// OPENAI_BASE_URL — override for proxies or compatible endpoints.
    pub openai_base_url: Option<String>,
    /// MODEL — chat model name.
    pub model: String,
}

impl ShellConfig {
    /// Load from environment variables. `api_key` overrides OPENAI_API_KEY
    /// if provided.
    pub fn load(api_key: Option<String>) -> Result<Self> {
        let openai_api_key = match api_key {
            Some(key) => key,
            None => env::var("OPENAI_API_KEY")
                .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY not set"))?,
        };
        let database_url =
            env::var("AURA_DATABASE_URL").unwrap_or_else(|_| "aura_os.db".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/aura-os.log".to_string());
        let openai_base_url = env::var("OPENAI_BASE_URL").ok();
        let model = env::var("MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        Ok(Self {
            database_url,
            log_file,
            openai_api_key,
            openai_base_url,
            model,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url) = self.openai_base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("OPENAI_BASE_URL is set but not an http(s) URL: {}", url);
            }
        }
        Ok(())
    }
}
