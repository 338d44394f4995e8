//! OpenAI Compatible Streaming Implementation
//!
//! Each `data:` event carries a `chat.completion.chunk`; the text delta lives
//! at `choices[0].delta.content`.

use serde::Deserialize;

use super::types::ChatCompletionChunk;

/// Delta extractor for OpenAI-style chunks.
pub fn extract_delta(value: &serde_json::Value) -> Option<String> {
    let chunk = ChatCompletionChunk::deserialize(value).ok()?;
    chunk.choices?.into_iter().next()?.delta?.content
}
