//! Gemini request/response conversion helpers (pure functions)

use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ListModelsResponse,
    Part,
};
use crate::error::AdapterError;
use crate::providers::common::normalize_model_ids;
use crate::types::{ChatRequest, ChatResponse, MessageRole, Usage};

/// Build the generateContent body.
///
/// System messages are lifted into `systemInstruction` (joined by a blank
/// line when there are several); assistant turns use Gemini's `model` role.
pub fn build_generate_content_request(request: &ChatRequest) -> GenerateContentRequest {
    let mut system_texts = Vec::new();
    let mut contents = Vec::new();
    for message in &request.messages {
        let role = match message.role {
            MessageRole::System => {
                system_texts.push(message.content.as_str());
                continue;
            }
            MessageRole::User => "user",
            MessageRole::Assistant => "model",
        };
        contents.push(Content {
            role: Some(role.to_string()),
            parts: vec![Part::text(message.content.clone())],
        });
    }

    let system_instruction = (!system_texts.is_empty()).then(|| Content {
        role: None,
        parts: vec![Part::text(system_texts.join("\n\n"))],
    });

    GenerateContentRequest {
        contents,
        system_instruction,
        generation_config: GenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_tokens,
        },
    }
}

/// Read text, finish reason and usage from a generateContent reply.
pub fn parse_generate_content_response(json: serde_json::Value) -> Result<ChatResponse, AdapterError> {
    let parsed: GenerateContentResponse = serde_json::from_value(json)?;
    let first = parsed.candidates.and_then(|c| c.into_iter().next());
    let (content, finish_reason) = match first {
        Some(candidate) => (candidate.text(), candidate.finish_reason),
        None => (None, None),
    };
    let usage = parsed.usage_metadata.map(|u| {
        Usage::new(
            u.prompt_token_count,
            u.candidates_token_count,
            u.total_token_count,
        )
    });
    Ok(ChatResponse::from_parts(content, finish_reason, usage))
}

/// Text-generation model ids from a `/models` reply, without the `models/`
/// prefix, sorted and unique.
pub fn parse_model_list(json: serde_json::Value) -> Result<Vec<String>, AdapterError> {
    let list: ListModelsResponse = serde_json::from_value(json)?;
    let ids = list
        .models
        .into_iter()
        .filter(|m| {
            m.supported_generation_methods
                .as_ref()
                .is_none_or(|methods| methods.iter().any(|x| x == "generateContent"))
        })
        .map(|m| {
            m.name
                .strip_prefix("models/")
                .map(str::to_string)
                .unwrap_or(m.name)
        })
        .collect();
    Ok(normalize_model_ids(ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn lifts_system_messages_and_renames_assistant() {
        let req = ChatRequest::new(
            "gemini-1.5-flash",
            vec![
                ChatMessage::system("Be brief."),
                ChatMessage::user("Hi"),
                ChatMessage::assistant("Hello"),
                ChatMessage::system("Use English."),
                ChatMessage::user("Bye"),
            ],
        )
        .with_max_tokens(10);
        let body = serde_json::to_value(build_generate_content_request(&req)).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [
                    {"role": "user", "parts": [{"text": "Hi"}]},
                    {"role": "model", "parts": [{"text": "Hello"}]},
                    {"role": "user", "parts": [{"text": "Bye"}]}
                ],
                "systemInstruction": {"parts": [{"text": "Be brief.\n\nUse English."}]},
                "generationConfig": {"maxOutputTokens": 10}
            })
        );
    }

    #[test]
    fn no_system_instruction_without_system_messages() {
        let req = ChatRequest::new("m", vec![ChatMessage::user("x")]).with_temperature(0.2);
        let body = serde_json::to_value(build_generate_content_request(&req)).unwrap();
        assert!(body.get("systemInstruction").is_none());
        assert_eq!(body["generationConfig"], json!({"temperature": 0.2}));
    }

    #[test]
    fn concatenates_parts_and_maps_usage() {
        let r = parse_generate_content_response(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Hel"}, {"text": "lo"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 4, "candidatesTokenCount": 2, "totalTokenCount": 6}
        }))
        .unwrap();
        assert_eq!(r.content, "Hello");
        assert_eq!(r.finish_reason, "STOP");
        assert_eq!(r.usage, Some(Usage::new(4, 2, 6)));
    }

    #[test]
    fn empty_reply_defaults() {
        let r = parse_generate_content_response(json!({})).unwrap();
        assert_eq!(r.content, "");
        assert_eq!(r.finish_reason, "stop");
        assert_eq!(r.usage, None);
    }

    #[test]
    fn model_list_keeps_generation_models() {
        let ids = parse_model_list(json!({"models": [
            {"name": "models/gemini-1.5-pro", "supportedGenerationMethods": ["generateContent", "countTokens"]},
            {"name": "models/text-embedding-004", "supportedGenerationMethods": ["embedContent"]},
            {"name": "models/gemini-1.5-flash"},
            {"name": "models/gemini-1.5-pro", "supportedGenerationMethods": ["generateContent"]}
        ]}))
        .unwrap();
        assert_eq!(ids, vec!["gemini-1.5-flash".to_string(), "gemini-1.5-pro".to_string()]);
    }
}
