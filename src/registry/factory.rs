//! Adapter construction
//!
//! Maps a provider identifier onto a concrete adapter. Callers get back a
//! `Box<dyn ChatAdapter>` and keep no knowledge of the concrete type.

use crate::error::UnsupportedProvider;
use crate::providers::{DashScopeAdapter, GeminiAdapter, OpenAiCompatibleAdapter};
use crate::traits::ChatAdapter;
use crate::types::{AdapterConfig, ProviderId};

/// Providers the factory can build, in a stable order.
pub const SUPPORTED_PROVIDERS: &[ProviderId] = &[
    ProviderId::OpenAi,
    ProviderId::Gemini,
    ProviderId::DeepSeek,
    ProviderId::Doubao,
    ProviderId::Qwen,
];

/// Build the adapter registered under `provider_id` (case-insensitive,
/// surrounding whitespace ignored).
pub fn create_adapter(
    provider_id: &str,
    config: AdapterConfig,
) -> Result<Box<dyn ChatAdapter>, UnsupportedProvider> {
    let provider = resolve(provider_id)?;
    tracing::debug!(provider = %provider, "creating adapter");
    Ok(build(provider, config))
}

/// Build an adapter from an already parsed identifier.
pub fn create_adapter_for(
    provider: ProviderId,
    config: AdapterConfig,
) -> Result<Box<dyn ChatAdapter>, UnsupportedProvider> {
    if !SUPPORTED_PROVIDERS.contains(&provider) {
        return Err(UnsupportedProvider(provider.to_string()));
    }
    Ok(build(provider, config))
}

/// Identifiers accepted by [`create_adapter`].
pub fn supported_providers() -> Vec<&'static str> {
    SUPPORTED_PROVIDERS.iter().map(ProviderId::as_str).collect()
}

pub fn is_provider_supported(provider_id: &str) -> bool {
    resolve(provider_id).is_ok()
}

fn resolve(provider_id: &str) -> Result<ProviderId, UnsupportedProvider> {
    provider_id
        .parse::<ProviderId>()
        .ok()
        .filter(|p| SUPPORTED_PROVIDERS.contains(p))
        .ok_or_else(|| UnsupportedProvider(provider_id.to_string()))
}

fn build(provider: ProviderId, config: AdapterConfig) -> Box<dyn ChatAdapter> {
    match provider {
        ProviderId::OpenAi => Box::new(OpenAiCompatibleAdapter::openai(config)),
        ProviderId::DeepSeek => Box::new(OpenAiCompatibleAdapter::deepseek(config)),
        ProviderId::Doubao => Box::new(OpenAiCompatibleAdapter::doubao(config)),
        ProviderId::Zhipu => Box::new(OpenAiCompatibleAdapter::zhipu(config)),
        ProviderId::Gemini => Box::new(GeminiAdapter::new(config)),
        ProviderId::Qwen => Box::new(DashScopeAdapter::new(config)),
    }
}
