//! DashScope (Qwen) chat adapter

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};

use super::models;
use super::streaming::extract_delta;
use super::transformers::{build_generation_body, parse_generation_response};
use crate::error::AdapterError;
use crate::execution::executors::{HttpExecutionConfig, execute_json_request, execute_stream_request};
use crate::execution::http::HttpHeaderBuilder;
use crate::providers::common::{model_list, probe_request};
use crate::streaming::{DeltaStream, SseDecodeOptions, StreamFactory};
use crate::traits::ChatAdapter;
use crate::types::{AdapterConfig, ChatRequest, ChatResponse, ProviderId};

pub const DASHSCOPE_DEFAULT_ENDPOINT: &str = "https://dashscope.aliyuncs.com/api/v1";

const GENERATION_PATH: &str = "services/aigc/text-generation/generation";

/// Chat adapter for Alibaba DashScope's native text-generation API.
#[derive(Debug, Clone)]
pub struct DashScopeAdapter {
    api_key: SecretString,
    http: HttpExecutionConfig,
}

impl DashScopeAdapter {
    pub fn new(config: AdapterConfig) -> Self {
        let http = HttpExecutionConfig::from_adapter_config(
            ProviderId::Qwen,
            &config,
            DASHSCOPE_DEFAULT_ENDPOINT,
        );
        Self {
            api_key: config.api_key,
            http,
        }
    }

    fn headers(api_key: &str, stream: bool) -> Result<HeaderMap, AdapterError> {
        let builder = HttpHeaderBuilder::new()
            .with_bearer_auth(api_key)?
            .with_json_content_type();
        let builder = if stream {
            builder
                .with_event_stream_accept()
                .with_header("X-DashScope-SSE", "enable")?
        } else {
            builder
        };
        Ok(builder.build())
    }

    async fn generate(&self, api_key: &str, request: &ChatRequest) -> Result<ChatResponse, AdapterError> {
        let url = self.http.url(GENERATION_PATH);
        let body = build_generation_body(request, false)?;
        let result =
            execute_json_request(&self.http, &url, Self::headers(api_key, false)?, &[], &body).await?;
        parse_generation_response(result.json)
    }
}

#[async_trait]
impl ChatAdapter for DashScopeAdapter {
    fn provider(&self) -> ProviderId {
        ProviderId::Qwen
    }

    fn endpoint(&self) -> &str {
        &self.http.endpoint
    }

    fn default_endpoint(&self) -> &'static str {
        DASHSCOPE_DEFAULT_ENDPOINT
    }

    fn default_models(&self) -> Vec<String> {
        model_list(models::DEFAULTS)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, AdapterError> {
        self.generate(self.api_key.expose_secret(), request).await
    }

    async fn chat_stream(&self, request: &ChatRequest) -> Result<DeltaStream, AdapterError> {
        let url = self.http.url(GENERATION_PATH);
        let body = build_generation_body(request, true)?;
        let headers = Self::headers(self.api_key.expose_secret(), true)?;
        let response = execute_stream_request(&self.http, &url, headers, &[], &body).await?;
        Ok(StreamFactory::from_response(
            response,
            extract_delta,
            SseDecodeOptions::new(ProviderId::Qwen),
        ))
    }

    async fn validate_api_key(&self, api_key: &str) -> bool {
        match self.generate(api_key, &probe_request(models::QWEN_TURBO)).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(provider = %ProviderId::Qwen, error = %e, "api key rejected");
                false
            }
        }
    }

    async fn list_models(&self) -> Vec<String> {
        self.default_models()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_headers_enable_dashscope_sse() {
        let h = DashScopeAdapter::headers("sk", true).unwrap();
        assert_eq!(h.get("x-dashscope-sse").unwrap(), "enable");
        assert_eq!(h.get("authorization").unwrap(), "Bearer sk");
        assert!(DashScopeAdapter::headers("sk", false).unwrap().get("x-dashscope-sse").is_none());
    }

    #[tokio::test]
    async fn lists_fixed_models() {
        let a = DashScopeAdapter::new(AdapterConfig::new("k"));
        assert_eq!(a.list_models().await, vec!["qwen-turbo", "qwen-plus", "qwen-max", "qwen-long"]);
        assert_eq!(a.provider(), ProviderId::Qwen);
    }
}
