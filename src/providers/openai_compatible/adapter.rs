//! OpenAI-compatible chat adapter
//!
//! One implementation serves OpenAI, DeepSeek, Doubao and Zhipu; the
//! [`ProviderProfile`] supplies the endpoint, model list and discovery filter.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};

use super::profile::ProviderProfile;
use super::streaming::extract_delta;
use super::transformers::{build_chat_body, parse_chat_response, parse_model_list};
use crate::error::AdapterError;
use crate::execution::executors::{
    HttpExecutionConfig, execute_get_request, execute_json_request, execute_stream_request,
};
use crate::execution::http::HttpHeaderBuilder;
use crate::providers::common::{model_list, models_or_default, probe_request};
use crate::streaming::{DeltaStream, SseDecodeOptions, StreamFactory};
use crate::traits::ChatAdapter;
use crate::types::{AdapterConfig, ChatRequest, ChatResponse, ProviderId};

/// Chat adapter for providers speaking the OpenAI chat-completions protocol.
#[derive(Debug, Clone)]
pub struct OpenAiCompatibleAdapter {
    profile: ProviderProfile,
    api_key: SecretString,
    http: HttpExecutionConfig,
}

impl OpenAiCompatibleAdapter {
    pub fn new(profile: ProviderProfile, config: AdapterConfig) -> Self {
        let http = HttpExecutionConfig::from_adapter_config(
            profile.provider,
            &config,
            profile.default_endpoint,
        );
        Self {
            profile,
            api_key: config.api_key,
            http,
        }
    }

    pub fn openai(config: AdapterConfig) -> Self {
        Self::new(ProviderProfile::OPENAI, config)
    }

    pub fn deepseek(config: AdapterConfig) -> Self {
        Self::new(ProviderProfile::DEEPSEEK, config)
    }

    pub fn doubao(config: AdapterConfig) -> Self {
        Self::new(ProviderProfile::DOUBAO, config)
    }

    pub fn zhipu(config: AdapterConfig) -> Self {
        Self::new(ProviderProfile::ZHIPU, config)
    }

    pub fn profile(&self) -> &ProviderProfile {
        &self.profile
    }

    fn headers(api_key: &str, stream: bool) -> Result<HeaderMap, AdapterError> {
        let mut builder = HttpHeaderBuilder::new()
            .with_bearer_auth(api_key)?
            .with_json_content_type();
        if stream {
            builder = builder.with_event_stream_accept();
        }
        Ok(builder.build())
    }

    async fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<ChatResponse, AdapterError> {
        let url = self.http.url("chat/completions");
        let body = build_chat_body(request, false)?;
        let result =
            execute_json_request(&self.http, &url, Self::headers(api_key, false)?, &[], &body).await?;
        parse_chat_response(result.json)
    }

    async fn fetch_models(
        &self,
        api_key: &str,
        filter: fn(&str) -> bool,
    ) -> Result<Vec<String>, AdapterError> {
        let url = self.http.url("models");
        let result = execute_get_request(&self.http, &url, Self::headers(api_key, false)?, &[]).await?;
        parse_model_list(result.json, filter)
    }
}

#[async_trait]
impl ChatAdapter for OpenAiCompatibleAdapter {
    fn provider(&self) -> ProviderId {
        self.profile.provider
    }

    fn endpoint(&self) -> &str {
        &self.http.endpoint
    }

    fn default_endpoint(&self) -> &'static str {
        self.profile.default_endpoint
    }

    fn default_models(&self) -> Vec<String> {
        model_list(self.profile.default_models)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, AdapterError> {
        self.complete(self.api_key.expose_secret(), request).await
    }

    async fn chat_stream(&self, request: &ChatRequest) -> Result<DeltaStream, AdapterError> {
        let url = self.http.url("chat/completions");
        let body = build_chat_body(request, true)?;
        let headers = Self::headers(self.api_key.expose_secret(), true)?;
        let response = execute_stream_request(&self.http, &url, headers, &[], &body).await?;
        Ok(StreamFactory::from_response(
            response,
            extract_delta,
            SseDecodeOptions::new(self.profile.provider),
        ))
    }

    async fn validate_api_key(&self, api_key: &str) -> bool {
        let outcome = match self.profile.model_filter {
            Some(filter) => self.fetch_models(api_key, filter).await.map(|_| ()),
            None => match self.profile.default_models.first() {
                Some(model) => self.complete(api_key, &probe_request(model)).await.map(|_| ()),
                None => Err(AdapterError::model_unavailable("no model to probe with")),
            },
        };
        if let Err(e) = &outcome {
            tracing::debug!(provider = %self.profile.provider, error = %e, "api key rejected");
        }
        outcome.is_ok()
    }

    async fn list_models(&self) -> Vec<String> {
        let Some(filter) = self.profile.model_filter else {
            return self.default_models();
        };
        let discovered = self.fetch_models(self.api_key.expose_secret(), filter).await;
        models_or_default(self.profile.provider, discovered, self.default_models())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_bind_provider_and_endpoint() {
        let a = OpenAiCompatibleAdapter::deepseek(AdapterConfig::new("k"));
        assert_eq!(a.provider(), ProviderId::DeepSeek);
        assert_eq!(a.endpoint(), "https://api.deepseek.com/v1");
        assert_eq!(a.default_endpoint(), "https://api.deepseek.com/v1");

        let z = OpenAiCompatibleAdapter::zhipu(AdapterConfig::new("k").with_endpoint("http://local/v4/"));
        assert_eq!(z.provider(), ProviderId::Zhipu);
        assert_eq!(z.endpoint(), "http://local/v4");
        assert_eq!(z.default_models()[0], "glm-4-flash");
    }

    #[test]
    fn stream_headers_ask_for_event_stream() {
        let h = OpenAiCompatibleAdapter::headers("sk", true).unwrap();
        assert_eq!(h.get("accept").unwrap(), "text/event-stream");
        let h = OpenAiCompatibleAdapter::headers("sk", false).unwrap();
        assert!(h.get("accept").is_none());
    }

    #[tokio::test]
    async fn doubao_lists_defaults_without_network() {
        let a = OpenAiCompatibleAdapter::doubao(
            AdapterConfig::new("k").with_endpoint("http://127.0.0.1:1/unreachable"),
        );
        assert_eq!(
            a.list_models().await,
            vec!["doubao-lite-32k", "doubao-pro-32k", "doubao-pro-128k"]
        );
    }
}
