//! Helpers shared by the provider adapters.

use crate::types::{ChatMessage, ChatRequest};

/// Owned copy of a static model list.
pub fn model_list(models: &[&str]) -> Vec<String> {
    models.iter().map(|m| (*m).to_string()).collect()
}

/// Sort and de-duplicate discovered model ids.
pub fn normalize_model_ids(mut ids: Vec<String>) -> Vec<String> {
    ids.retain(|id| !id.trim().is_empty());
    ids.sort();
    ids.dedup();
    ids
}

/// Smallest useful completion, used to probe credentials.
pub fn probe_request(model: &str) -> ChatRequest {
    ChatRequest::new(model, vec![ChatMessage::user("hi")]).with_max_tokens(1)
}

/// Discovery result, or the static list when discovery failed or came back
/// empty.
pub fn models_or_default<E: std::fmt::Display>(
    provider: crate::types::ProviderId,
    discovered: Result<Vec<String>, E>,
    defaults: Vec<String>,
) -> Vec<String> {
    match discovered {
        Ok(models) if !models.is_empty() => models,
        Ok(_) => {
            tracing::debug!(provider = %provider, "model discovery returned nothing; using defaults");
            defaults
        }
        Err(e) => {
            tracing::debug!(provider = %provider, error = %e, "model discovery failed; using defaults");
            defaults
        }
    }
}
