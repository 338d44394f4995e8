//! Request/response transformers for the OpenAI chat-completions format.

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ModelList};
use crate::error::AdapterError;
use crate::providers::common::normalize_model_ids;
use crate::types::{ChatRequest, ChatResponse, Usage};

/// Build the `/chat/completions` body. Unset options are left out.
pub fn build_chat_body(request: &ChatRequest, stream: bool) -> Result<serde_json::Value, AdapterError> {
    let body = ChatCompletionRequest {
        model: &request.model,
        messages: &request.messages,
        stream,
        temperature: request.temperature,
        max_tokens: request.max_tokens,
    };
    Ok(serde_json::to_value(body)?)
}

/// Read content, finish reason and usage from a completion body.
pub fn parse_chat_response(json: serde_json::Value) -> Result<ChatResponse, AdapterError> {
    let parsed: ChatCompletionResponse = serde_json::from_value(json)?;
    let first = parsed.choices.and_then(|c| c.into_iter().next());
    let (content, finish_reason) = match first {
        Some(choice) => (
            choice.message.and_then(|m| m.content),
            choice.finish_reason,
        ),
        None => (None, None),
    };
    let usage = parsed
        .usage
        .map(|u| Usage::new(u.prompt_tokens, u.completion_tokens, u.total_tokens));
    Ok(ChatResponse::from_parts(content, finish_reason, usage))
}

/// Model ids from a `/models` body that pass `filter`, sorted and unique.
pub fn parse_model_list(
    json: serde_json::Value,
    filter: fn(&str) -> bool,
) -> Result<Vec<String>, AdapterError> {
    let list: ModelList = serde_json::from_value(json)?;
    let ids = list
        .data
        .into_iter()
        .map(|m| m.id)
        .filter(|id| filter(id))
        .collect();
    Ok(normalize_model_ids(ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::types::ChatMessage;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn body_omits_unset_options() {
        let req = ChatRequest::new("deepseek-chat", vec![ChatMessage::user("hi")]);
        let body = build_chat_body(&req, false).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "deepseek-chat",
                "messages": [{"role": "user", "content": "hi"}],
                "stream": false
            })
        );
    }

    #[test]
    fn body_carries_options_and_stream_flag() {
        let req = ChatRequest::new("gpt-4o", vec![ChatMessage::system("s"), ChatMessage::user("u")])
            .with_temperature(0.5)
            .with_max_tokens(64);
        let body = build_chat_body(&req, true).unwrap();
        assert_eq!(body["stream"], json!(true));
        assert_eq!(body["temperature"], json!(0.5));
        assert_eq!(body["max_tokens"], json!(64));
        assert_eq!(body["messages"][0]["role"], json!("system"));
    }

    #[test]
    fn parses_full_completion() {
        let r = parse_chat_response(json!({
            "choices": [{"message": {"role": "assistant", "content": "Hello"}, "finish_reason": "length"}],
            "usage": {"prompt_tokens": 3, "completion_tokens": 1, "total_tokens": 4}
        }))
        .unwrap();
        assert_eq!(r.content, "Hello");
        assert_eq!(r.finish_reason, "length");
        assert_eq!(r.usage, Some(Usage::new(3, 1, 4)));
    }

    #[test]
    fn missing_fields_default() {
        let r = parse_chat_response(json!({"choices": []})).unwrap();
        assert_eq!(r.content, "");
        assert_eq!(r.finish_reason, "stop");
        assert_eq!(r.usage, None);
    }

    #[test]
    fn wrongly_typed_body_is_unknown_error() {
        let err = parse_chat_response(json!({"choices": "nope"})).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownError);
    }

    #[test]
    fn model_list_is_filtered_sorted_and_unique() {
        let ids = parse_model_list(
            json!({"data": [{"id": "gpt-4o"}, {"id": "whisper-1"}, {"id": "gpt-3.5-turbo"}, {"id": "gpt-4o"}]}),
            super::super::models::openai::is_chat_model,
        )
        .unwrap();
        assert_eq!(ids, vec!["gpt-3.5-turbo".to_string(), "gpt-4o".to_string()]);
    }
}
