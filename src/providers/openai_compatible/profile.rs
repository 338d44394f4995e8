//! Per-provider settings for the OpenAI-compatible adapter.

use super::models;
use crate::types::ProviderId;

/// What differs between OpenAI-compatible providers. The wire format does not.
#[derive(Debug, Clone, Copy)]
pub struct ProviderProfile {
    pub provider: ProviderId,
    pub default_endpoint: &'static str,
    pub default_models: &'static [&'static str],
    /// Filter applied to `GET /models` results. `None` means the provider
    /// has no usable listing endpoint and the defaults are always returned.
    pub model_filter: Option<fn(&str) -> bool>,
}

impl ProviderProfile {
    pub const OPENAI: Self = Self {
        provider: ProviderId::OpenAi,
        default_endpoint: "https://api.openai.com/v1",
        default_models: models::openai::DEFAULTS,
        model_filter: Some(models::openai::is_chat_model as fn(&str) -> bool),
    };

    pub const DEEPSEEK: Self = Self {
        provider: ProviderId::DeepSeek,
        default_endpoint: "https://api.deepseek.com/v1",
        default_models: models::deepseek::DEFAULTS,
        model_filter: Some(models::deepseek::is_chat_model as fn(&str) -> bool),
    };

    pub const DOUBAO: Self = Self {
        provider: ProviderId::Doubao,
        default_endpoint: "https://ark.cn-beijing.volces.com/api/v3",
        default_models: models::doubao::DEFAULTS,
        model_filter: None,
    };

    pub const ZHIPU: Self = Self {
        provider: ProviderId::Zhipu,
        default_endpoint: "https://open.bigmodel.cn/api/paas/v4",
        default_models: models::zhipu::DEFAULTS,
        model_filter: None,
    };

    /// Profile for an OpenAI-compatible provider, if `provider` is one.
    pub const fn for_provider(provider: ProviderId) -> Option<Self> {
        match provider {
            ProviderId::OpenAi => Some(Self::OPENAI),
            ProviderId::DeepSeek => Some(Self::DEEPSEEK),
            ProviderId::Doubao => Some(Self::DOUBAO),
            ProviderId::Zhipu => Some(Self::ZHIPU),
            ProviderId::Gemini | ProviderId::Qwen => None,
        }
    }

    pub const fn supports_discovery(&self) -> bool {
        self.model_filter.is_some()
    }
}
