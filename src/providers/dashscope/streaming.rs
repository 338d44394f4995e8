//! DashScope streaming
//!
//! With `X-DashScope-SSE: enable` the endpoint sends `id:`/`event:` lines
//! plus one `data:` line per event; only the latter carry text.

use serde::Deserialize;

use super::types::GenerationResponse;

/// Delta extractor for DashScope stream events.
pub fn extract_delta(value: &serde_json::Value) -> Option<String> {
    let event = GenerationResponse::deserialize(value).ok()?;
    event.output?.content().map(str::to_string)
}
