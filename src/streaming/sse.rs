//! SSE line classification
//!
//! Providers emit one JSON object per `data:` line; framing the body into
//! lines is left to the stream factory.

/// Payload that marks the end of an OpenAI-style stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// What a single SSE line means to the delta decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseLine<'a> {
    /// Blank, comment, or non-`data:` field.
    Ignore,
    /// The termination sentinel.
    Done,
    /// Payload after `data:` with surrounding whitespace removed.
    Data(&'a str),
}

/// Classify one line. Works with both `data: {..}` and `data:{..}`.
pub fn classify_line(line: &str) -> SseLine<'_> {
    let line = line.trim();
    if line.is_empty() {
        return SseLine::Ignore;
    }
    let Some(payload) = line.strip_prefix("data:") else {
        return SseLine::Ignore;
    };
    let payload = payload.trim();
    if payload == DONE_SENTINEL {
        SseLine::Done
    } else if payload.is_empty() {
        SseLine::Ignore
    } else {
        SseLine::Data(payload)
    }
}
