//! Chunked query dispatch.
//!
//! The corpus is split into fixed-size chunks; each chunk is sent as its
//! own request carrying the same system instruction and user query, and
//! the per-chunk answers are joined in order. Chunks are evaluated
//! independently — answers needing cross-chunk context are out of scope.

use tracing::debug;

use docsage_core::Result;
use docsage_ingest::chunking::split_chunks;

use crate::client::ChatClient;
use crate::types::ChatMessage;

/// Fixed instruction sent with every chunk.
pub const SYSTEM_PROMPT: &str =
    "Analyze the given documents and respond based on user queries.";

/// Sends a query over every chunk of the corpus, in order.
pub struct Dispatcher<C> {
    client: C,
    model: String,
    chunk_size: usize,
}

impl<C: ChatClient> Dispatcher<C> {
    pub fn new(client: C, model: impl Into<String>, chunk_size: usize) -> Self {
        Self {
            client,
            model: model.into(),
            chunk_size,
        }
    }

    /// Dispatch `query` across the corpus and join the per-chunk answers.
    ///
    /// Requests run sequentially in chunk order. The first failure aborts
    /// the whole query and discards earlier answers; the caller decides
    /// whether the session continues.
    pub async fn dispatch(&self, corpus: &str, query: &str) -> Result<String> {
        let chunks = split_chunks(corpus, self.chunk_size);
        debug!("dispatching query over {} chunks", chunks.len());

        let mut responses = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let answer = self
                .client
                .chat(&self.model, chunk_messages(chunk, query))
                .await?;
            responses.push(answer);
        }

        Ok(responses.join("\n"))
    }
}

/// Build the three-message request for one chunk.
fn chunk_messages(chunk: &str, query: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(chunk),
        ChatMessage::user(query),
    ]
}
