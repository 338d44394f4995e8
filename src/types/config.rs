//! Adapter configuration

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

use super::provider::ProviderId;
use crate::error::ConfigError;

/// Deadline applied to every outbound request when none is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Credentials and transport settings for one adapter instance.
///
/// Deserialises from `{"apiKey": "...", "endpoint": "...", "timeout": 30000}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterConfig {
    #[serde(deserialize_with = "deserialize_secret")]
    pub api_key: SecretString,
    /// Base URL override; the provider's well-known URL is used when absent.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Request deadline in milliseconds.
    #[serde(default, rename = "timeout")]
    pub timeout_ms: Option<u64>,
    /// Shared HTTP client; a fresh one is built when absent.
    #[serde(skip)]
    pub http_client: Option<reqwest::Client>,
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(SecretString::from(raw))
}

impl AdapterConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            endpoint: None,
            timeout_ms: None,
            http_client: None,
        }
    }

    /// Read `<PREFIX>_API_KEY` and, if set, `<PREFIX>_BASE_URL`.
    pub fn from_env(provider: ProviderId) -> Result<Self, ConfigError> {
        let prefix = provider.env_prefix();
        let key_var = format!("{prefix}_API_KEY");
        let api_key = std::env::var(&key_var)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingEnv(key_var))?;
        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var(format!("{prefix}_BASE_URL"))
            && !url.trim().is_empty()
        {
            config.endpoint = Some(url);
        }
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Effective request deadline.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS))
    }

    /// Endpoint override or the given default, without a trailing slash.
    pub fn resolve_endpoint(&self, default_endpoint: &str) -> String {
        self.endpoint
            .as_deref()
            .unwrap_or(default_endpoint)
            .trim_end_matches('/')
            .to_string()
    }
}
