//! DashScope text-generation wire types

use serde::{Deserialize, Serialize};

use crate::types::ChatMessage;

/// `services/aigc/text-generation/generation` body.
#[derive(Debug, Serialize)]
pub struct GenerationRequest<'a> {
    pub model: &'a str,
    pub input: GenerationInput<'a>,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
pub struct GenerationInput<'a> {
    pub messages: &'a [ChatMessage],
}

#[derive(Debug, Serialize)]
pub struct GenerationParameters {
    /// Always `"message"` so replies use the `output.choices` shape when the
    /// model supports it.
    pub result_format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Stream deltas instead of the cumulative text so far.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incremental_output: Option<bool>,
}

/// Reply (and stream event) of the generation endpoint. Older models answer
/// with `output.text`; `result_format = "message"` yields `output.choices`.
#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    pub output: Option<GenerationOutput>,
    pub usage: Option<GenerationUsage>,
}

#[derive(Debug, Deserialize)]
pub struct GenerationOutput {
    pub text: Option<String>,
    pub finish_reason: Option<String>,
    pub choices: Option<Vec<GenerationChoice>>,
}

#[derive(Debug, Deserialize)]
pub struct GenerationChoice {
    pub message: Option<GenerationMessage>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerationMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerationUsage {
    pub input_tokens: Option<u32>,
    pub output_tokens: Option<u32>,
    pub total_tokens: Option<u32>,
}

impl GenerationOutput {
    /// Structured content first, plain text otherwise.
    pub fn content(&self) -> Option<&str> {
        self.choices
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .or(self.text.as_deref())
    }

    /// `choices[0].finish_reason`, then `finish_reason`. DashScope sends the
    /// string `"null"` while a stream is still running.
    pub fn finish_reason(&self) -> Option<&str> {
        let present = |r: &&str| !r.is_empty() && *r != "null";
        self.choices
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.finish_reason.as_deref())
            .filter(present)
            .or_else(|| self.finish_reason.as_deref().filter(present))
    }
}
