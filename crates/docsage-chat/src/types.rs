//! Wire types for the Ollama chat endpoint.

use serde::{Deserialize, Serialize};

/// A single role/content message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// Request body for `/api/chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
}

/// Response body of a non-streaming `/api/chat` call.
///
/// Ollama returns more fields (timings, token counts); only the message
/// is needed here.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub message: ChatMessage,
}
