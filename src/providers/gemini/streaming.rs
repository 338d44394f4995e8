//! Gemini streaming
//!
//! `streamGenerateContent?alt=sse` sends one `GenerateContentResponse` per
//! `data:` line; the delta is the text of the first candidate's parts.

use serde::Deserialize;

use super::types::GenerateContentResponse;

/// Delta extractor for Gemini stream events.
pub fn extract_delta(value: &serde_json::Value) -> Option<String> {
    let event = GenerateContentResponse::deserialize(value).ok()?;
    event.candidates?.first()?.text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn joins_parts_of_first_candidate() {
        let v = json!({"candidates": [{"content": {"parts": [{"text": "a"}, {"text": "b"}]}}]});
        assert_eq!(extract_delta(&v).as_deref(), Some("ab"));
    }

    #[test]
    fn events_without_content_have_no_delta() {
        assert_eq!(extract_delta(&json!({"usageMetadata": {"totalTokenCount": 1}})), None);
        assert_eq!(extract_delta(&json!({"candidates": [{"finishReason": "STOP"}]})), None);
    }
}
