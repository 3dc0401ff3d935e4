//! Transcript types: message roles, chat messages, and the fixed strings the
//! session controller seeds and falls back to.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Greeting seeded as the first transcript message of every session.
pub const GREETING: &str =
    "Hi! I'm your companion. I know your memory bank, so ask me anything or just tell me about your day.";

/// The single fixed model message surfaced for any backend failure. No raw
/// error detail ever reaches the transcript.
pub const CONNECTION_FAILURE: &str =
    "I couldn't reach the assistant service. Please check your connection and try again.";

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// A single transcript message. Text is preserved verbatim, embedded
/// newlines included; the timestamp (epoch milliseconds) is for ordering and
/// display only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: i64,
}

impl ChatMessage {
    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Model, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&ChatRole::Model).unwrap(), "\"model\"");
    }

    #[test]
    fn test_text_preserved_verbatim() {
        let msg = ChatMessage::user("line one\nline two\n");
        assert_eq!(msg.text, "line one\nline two\n");
    }
}
