//! # Chat session controller
//!
//! [`ChatSession`] owns the running transcript and a two-state machine:
//! **Idle** (no request in flight) and
//! **Awaiting-Response** (exactly one request in flight). New sends while
//! busy are rejected, not queued. The memory-bank context is recomputed
//! fresh on every accepted turn; nothing is cached between turns.
//!
//! Backend failures of any kind are swallowed here: the transcript gets the
//! single fixed [`CONNECTION_FAILURE`] model message, the error detail goes
//! to the log, and the state returns to Idle. No automatic retry.

use std::sync::Arc;

use memory_bank::{format_context, MemoryBank};
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

use crate::backend::AssistantBackend;
use crate::types::{ChatMessage, CONNECTION_FAILURE, GREETING};

/// Result of a [`ChatSession::send_user_message`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The backend replied; the transcript gained a user and a model message.
    Replied,
    /// The backend failed; the transcript gained the user message and the
    /// fixed connection-failure model message.
    Failed,
    /// Whitespace-only input; the transcript is untouched.
    RejectedEmpty,
    /// A request was already in flight; the transcript is untouched.
    RejectedBusy,
}

struct SessionState {
    transcript: Vec<ChatMessage>,
    awaiting: bool,
}

/// The chat session controller. One per session; create fresh at session
/// start, reset to reseed.
pub struct ChatSession {
    backend: Arc<dyn AssistantBackend>,
    bank: Arc<MemoryBank>,
    state: Mutex<SessionState>,
}

impl ChatSession {
    /// Creates a session with the greeting already seeded.
    pub fn new(backend: Arc<dyn AssistantBackend>, bank: Arc<MemoryBank>) -> Self {
        Self {
            backend,
            bank,
            state: Mutex::new(SessionState {
                transcript: vec![ChatMessage::model(GREETING)],
                awaiting: false,
            }),
        }
    }

    /// Sends one user turn. Rejected (transcript untouched) when the text is
    /// whitespace-only or a request is already in flight; otherwise the user
    /// message is echoed immediately, the backend is called with the freshly
    /// formatted memory context, and the reply (or the fixed failure
    /// message) is appended before returning to Idle.
    #[instrument(skip(self, text))]
    pub async fn send_user_message(&self, text: &str) -> SendOutcome {
        {
            let mut state = self.state.lock().await;
            if state.awaiting {
                info!("Send rejected: a request is already in flight");
                return SendOutcome::RejectedBusy;
            }
            if text.trim().is_empty() {
                return SendOutcome::RejectedEmpty;
            }
            state.transcript.push(ChatMessage::user(text));
            state.awaiting = true;
        }

        let context = format_context(&self.bank.query_all().await);

        match self.backend.send(text, &context).await {
            Ok(reply) => {
                let mut state = self.state.lock().await;
                state.transcript.push(ChatMessage::model(reply));
                state.awaiting = false;
                SendOutcome::Replied
            }
            Err(e) => {
                error!(error = %e, "Assistant backend failed");
                let mut state = self.state.lock().await;
                state.transcript.push(ChatMessage::model(CONNECTION_FAILURE));
                state.awaiting = false;
                SendOutcome::Failed
            }
        }
    }

    /// Resets the backend's conversational state and reseeds the local
    /// transcript with the greeting.
    ///
    /// Precondition: the session is Idle. Calling this while a request is in
    /// flight is undefined; the in-flight reply may still be appended after
    /// the reseed.
    pub async fn reset(&self) {
        self.backend.reset().await;
        let mut state = self.state.lock().await;
        state.transcript.clear();
        state.transcript.push(ChatMessage::model(GREETING));
        info!("Chat session reset");
    }

    /// Snapshot of the transcript.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.state.lock().await.transcript.clone()
    }

    /// True when no request is in flight.
    pub async fn is_idle(&self) -> bool {
        !self.state.lock().await.awaiting
    }
}
