//! Request/response transformers for DashScope text generation.

use super::types::{GenerationInput, GenerationParameters, GenerationRequest, GenerationResponse};
use crate::error::AdapterError;
use crate::types::{ChatRequest, ChatResponse, Usage};

/// Build the generation body. Streaming asks for incremental output.
pub fn build_generation_body(request: &ChatRequest, stream: bool) -> Result<serde_json::Value, AdapterError> {
    let body = GenerationRequest {
        model: &request.model,
        input: GenerationInput {
            messages: &request.messages,
        },
        parameters: GenerationParameters {
            result_format: "message",
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            incremental_output: stream.then_some(true),
        },
    };
    Ok(serde_json::to_value(body)?)
}

pub fn parse_generation_response(json: serde_json::Value) -> Result<ChatResponse, AdapterError> {
    let parsed: GenerationResponse = serde_json::from_value(json)?;
    let (content, finish_reason) = match &parsed.output {
        Some(output) => (
            output.content().map(str::to_string),
            output.finish_reason().map(str::to_string),
        ),
        None => (None, None),
    };
    let usage = parsed.usage.map(|u| {
        let input = u.input_tokens.unwrap_or(0);
        let output = u.output_tokens.unwrap_or(0);
        Usage::new(input, output, u.total_tokens.unwrap_or(input.saturating_add(output)))
    });
    Ok(ChatResponse::from_parts(content, finish_reason, usage))
}
