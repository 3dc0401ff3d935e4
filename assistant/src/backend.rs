//! # Assistant backend abstraction
//!
//! Defines the [`AssistantBackend`] trait over the remote generative
//! service. Implementations are stateful across `send` calls within a
//! session (multi-turn coherence) and resettable to a clean slate; the
//! session controller treats `reset` as the only lifecycle control it has
//! over that state.

use anyhow::Result;
use async_trait::async_trait;

/// Generative backend interface: one reply per user turn, grounded in the
/// context block the caller recomputes each time.
#[async_trait]
pub trait AssistantBackend: Send + Sync {
    /// Returns the model reply for `user_text`. `context` is the formatted
    /// memory-bank block for this turn; implementations merge it into the
    /// request (typically as the system message).
    async fn send(&self, user_text: &str, context: &str) -> Result<String>;

    /// Discards any conversational state held across `send` calls.
    async fn reset(&self);
}
