//! # OpenAI backend adapter
//!
//! [`OpenAiAssistant`] implements [`AssistantBackend`] over [async-openai].
//! The running conversation is kept as an internal message history: that
//! history is the backend-side session state from the core's point of view,
//! and `reset` wipes it. Each turn sends the fresh context block as the
//! system message, then the history, then the new user message.

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

use crate::backend::AssistantBackend;

/// Masks an API key for safe logging: first 7 chars + "***" + last 4 chars.
/// Keys of length <= 11 come back as "***" to avoid leaking any part.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// OpenAI-compatible chat backend with an internal running history.
pub struct OpenAiAssistant {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    history: Mutex<Vec<ChatCompletionRequestMessage>>,
    api_key_for_logging: String,
}

impl OpenAiAssistant {
    /// Builds a backend using the given API key and the default API base URL.
    pub fn new(api_key: String) -> Self {
        let api_key_for_logging = api_key.clone();
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Arc::new(Client::with_config(config)),
            model: "gpt-4o-mini".to_string(),
            history: Mutex::new(Vec::new()),
            api_key_for_logging,
        }
    }

    /// Builds a backend with a custom base URL (proxies, compatible endpoints).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let api_key_for_logging = api_key.clone();
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            model: "gpt-4o-mini".to_string(),
            history: Mutex::new(Vec::new()),
            api_key_for_logging,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl AssistantBackend for OpenAiAssistant {
    #[instrument(skip(self, user_text, context))]
    async fn send(&self, user_text: &str, context: &str) -> Result<String> {
        let system: ChatCompletionRequestMessage = ChatCompletionRequestSystemMessageArgs::default()
            .content(context.to_string())
            .build()?
            .into();
        let user: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(user_text.to_string())
            .build()?
            .into();

        let mut messages = vec![system];
        {
            let history = self.history.lock().await;
            messages.extend(history.iter().cloned());
        }
        messages.push(user.clone());

        info!(
            model = %self.model,
            message_count = messages.len(),
            api_key = %mask_token(&self.api_key_for_logging),
            "OpenAI chat completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()?;

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat completion usage"
            );
        }

        let Some(choice) = response.choices.first() else {
            anyhow::bail!("No response from OpenAI");
        };
        let reply = choice.message.content.clone().unwrap_or_default();

        let assistant: ChatCompletionRequestMessage =
            ChatCompletionRequestAssistantMessageArgs::default()
                .content(reply.clone())
                .build()?
                .into();
        let mut history = self.history.lock().await;
        history.push(user);
        history.push(assistant);

        Ok(reply)
    }

    async fn reset(&self) {
        self.history.lock().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token_short() {
        assert_eq!(mask_token("short"), "***");
        assert_eq!(mask_token("elevenchars"), "***");
    }

    #[test]
    fn test_mask_token_long() {
        assert_eq!(mask_token("sk-abcd1234efgh5678"), "sk-abcd***5678");
    }
}
