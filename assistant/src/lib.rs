//! # Assistant
//!
//! Chat side of the Aura OS core: transcript types, the [`AssistantBackend`]
//! trait over the generative service, an OpenAI-compatible adapter, and the
//! [`ChatSession`] controller that turns memory-bank context plus a user
//! turn into a transcript exchange.
//!
//! ## Modules
//!
//! - [`types`] - ChatRole, ChatMessage, greeting and failure constants
//! - [`backend`] - AssistantBackend trait
//! - [`openai`] - OpenAiAssistant (async-openai adapter)
//! - [`session`] - ChatSession controller (Idle / Awaiting-Response)

pub mod backend;
pub mod openai;
pub mod session;
pub mod types;

pub use backend::AssistantBackend;
pub use openai::OpenAiAssistant;
pub use session::{ChatSession, SendOutcome};
pub use types::{ChatMessage, ChatRole, CONNECTION_FAILURE, GREETING};
