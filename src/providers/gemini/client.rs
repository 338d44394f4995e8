//! Gemini chat adapter
//!
//! Gemini authenticates with a `key` query parameter instead of a bearer
//! header. The key is appended per request and never becomes part of the URL
//! that is logged.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};

use super::convert::{build_generate_content_request, parse_generate_content_response, parse_model_list};
use super::models;
use super::streaming::extract_delta;
use crate::error::AdapterError;
use crate::execution::executors::{
    HttpExecutionConfig, execute_get_request, execute_json_request, execute_stream_request,
};
use crate::execution::http::HttpHeaderBuilder;
use crate::providers::common::{model_list, models_or_default};
use crate::streaming::{DeltaStream, SseDecodeOptions, StreamFactory};
use crate::traits::ChatAdapter;
use crate::types::{AdapterConfig, ChatRequest, ChatResponse, ProviderId};

pub const GEMINI_DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Chat adapter for the Gemini generateContent API.
#[derive(Debug, Clone)]
pub struct GeminiAdapter {
    api_key: SecretString,
    http: HttpExecutionConfig,
}

impl GeminiAdapter {
    pub fn new(config: AdapterConfig) -> Self {
        let http =
            HttpExecutionConfig::from_adapter_config(ProviderId::Gemini, &config, GEMINI_DEFAULT_ENDPOINT);
        Self {
            api_key: config.api_key,
            http,
        }
    }

    fn headers(stream: bool) -> HeaderMap {
        let builder = HttpHeaderBuilder::new().with_json_content_type();
        if stream {
            builder.with_event_stream_accept().build()
        } else {
            builder.build()
        }
    }

    fn generate_url(&self, model: &str, stream: bool) -> String {
        let method = if stream {
            "streamGenerateContent"
        } else {
            "generateContent"
        };
        self.http.url(&format!("models/{model}:{method}"))
    }

    async fn fetch_models(&self, api_key: &str) -> Result<Vec<String>, AdapterError> {
        let url = self.http.url("models");
        let result = execute_get_request(&self.http, &url, HeaderMap::new(), &[("key", api_key)]).await?;
        parse_model_list(result.json)
    }
}

#[async_trait]
impl ChatAdapter for GeminiAdapter {
    fn provider(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn endpoint(&self) -> &str {
        &self.http.endpoint
    }

    fn default_endpoint(&self) -> &'static str {
        GEMINI_DEFAULT_ENDPOINT
    }

    fn default_models(&self) -> Vec<String> {
        model_list(models::DEFAULTS)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, AdapterError> {
        let url = self.generate_url(&request.model, false);
        let body = serde_json::to_value(build_generate_content_request(request))?;
        let query = [("key", self.api_key.expose_secret())];
        let result = execute_json_request(&self.http, &url, Self::headers(false), &query, &body).await?;
        parse_generate_content_response(result.json)
    }

    async fn chat_stream(&self, request: &ChatRequest) -> Result<DeltaStream, AdapterError> {
        let url = self.generate_url(&request.model, true);
        let body = serde_json::to_value(build_generate_content_request(request))?;
        let query = [("alt", "sse"), ("key", self.api_key.expose_secret())];
        let response = execute_stream_request(&self.http, &url, Self::headers(true), &query, &body).await?;
        Ok(StreamFactory::from_response(
            response,
            extract_delta,
            SseDecodeOptions::new(ProviderId::Gemini),
        ))
    }

    async fn validate_api_key(&self, api_key: &str) -> bool {
        match self.fetch_models(api_key).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(provider = %ProviderId::Gemini, error = %e, "api key rejected");
                false
            }
        }
    }

    async fn list_models(&self) -> Vec<String> {
        let discovered = self.fetch_models(self.api_key.expose_secret()).await;
        models_or_default(ProviderId::Gemini, discovered, self.default_models())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_method_urls() {
        let a = GeminiAdapter::new(AdapterConfig::new("k"));
        assert_eq!(
            a.generate_url("gemini-1.5-flash", false),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
        assert!(a.generate_url("gemini-1.5-flash", true).ends_with(":streamGenerateContent"));
        assert_eq!(a.endpoint(), a.default_endpoint());
    }
}
