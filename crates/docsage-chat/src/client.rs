//! Ollama chat client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use docsage_core::{Error, Result};

use crate::types::{ChatMessage, ChatRequest, ChatResponse};

/// Ollama address used when `OLLAMA_HOST` is not set.
pub const DEFAULT_HOST: &str = "http://localhost:11434";

/// A chat-completion backend.
///
/// One implementation talks to Ollama; tests substitute a mock.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send one chat request and return the response text.
    async fn chat(&self, model: &str, messages: Vec<ChatMessage>) -> Result<String>;
}

/// Client for a locally running Ollama server.
pub struct OllamaClient {
    http: Client,
    base_url: String,
}

impl OllamaClient {
    /// Create a client against `OLLAMA_HOST`, or the default local address.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("OLLAMA_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ChatClient for OllamaClient {
    async fn chat(&self, model: &str, messages: Vec<ChatMessage>) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let body = ChatRequest {
            model: model.to_string(),
            messages,
            stream: false,
        };

        debug!("chat request to {} with model {}", url, model);

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Chat(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Chat(format!("API error {}: {}", status, body)));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Chat(format!("invalid response: {}", e)))?;

        Ok(parsed.message.content)
    }
}
