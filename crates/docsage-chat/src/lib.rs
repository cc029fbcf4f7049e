//! DocSage Chat — Ollama client and chunked query dispatch.

pub mod client;
pub mod dispatch;
pub mod types;

pub use client::{ChatClient, OllamaClient, DEFAULT_HOST};
pub use dispatch::{Dispatcher, SYSTEM_PROMPT};
pub use types::ChatMessage;
