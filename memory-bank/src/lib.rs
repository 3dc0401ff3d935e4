//! # Memory Bank
//!
//! The `memory-bank` crate holds the journal at the heart of the Aura OS
//! core: small immutable personal-memory records filed under one of three
//! fixed categories, persisted write-through to a key-value store, and
//! rendered into a natural-language context block for the chat assistant.
//!
//! ## Modules
//!
//! - [`types`] - Category, MemoryValue, MemoryItem, CategoryFilter
//! - [`bank`] - MemoryBank store (add/query/filter/search + persistence)
//! - [`context`] - Context formatting for assistant requests
//!
//! ## External interactions
//!
//! - **Key-value store**: the full bank is JSON-serialized under one key via
//!   the `storage` crate's `KvStore` trait; absent or corrupt stored data
//!   degrades to an empty bank.
//! - **Chat assistant**: [`context::format_context`] output is sent as the
//!   system context of every assistant request.

pub mod bank;
pub mod context;
pub mod types;

pub use bank::{MemoryBank, MemoryBankData};
pub use context::{format_context, EMPTY_CONTEXT};
pub use types::{Category, CategoryFilter, MemoryItem, MemoryValue};
