//! Core error types shared by every adapter.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of failure kinds an adapter can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Credentials were rejected (HTTP 401).
    InvalidApiKey,
    /// The provider throttled the caller (HTTP 429).
    RateLimited,
    /// Billing or permission limits were hit (HTTP 402/403).
    QuotaExceeded,
    /// The requested model does not exist or is not reachable (HTTP 404).
    ModelUnavailable,
    /// The request deadline elapsed, locally or upstream (HTTP 408/504).
    NetworkTimeout,
    /// Anything else.
    UnknownError,
}

impl ErrorCode {
    /// Wire name of the code, e.g. `"RATE_LIMITED"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidApiKey => "INVALID_API_KEY",
            Self::RateLimited => "RATE_LIMITED",
            Self::QuotaExceeded => "QUOTA_EXCEEDED",
            Self::ModelUnavailable => "MODEL_UNAVAILABLE",
            Self::NetworkTimeout => "NETWORK_TIMEOUT",
            Self::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only error surface adapters expose.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[{code}] {message}")]
pub struct AdapterError {
    pub code: ErrorCode,
    pub message: String,
    /// Opaque extra information, typically the raw provider error body.
    pub details: Option<serde_json::Value>,
    pub retryable: bool,
    /// Suggested wait before retrying, in seconds.
    pub retry_after: Option<u64>,
}

impl AdapterError {
    /// Build an error with explicit retry metadata.
    pub fn new(code: ErrorCode, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            retryable,
            retry_after: None,
        }
    }

    /// Attach opaque details.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach a retry-after hint in seconds.
    pub const fn with_retry_after(mut self, seconds: u64) -> Self {
        self.retry_after = Some(seconds);
        self
    }

    pub fn invalid_api_key(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidApiKey, message, false)
    }

    pub fn rate_limited(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        let mut err = Self::new(ErrorCode::RateLimited, message, true);
        err.retry_after = retry_after;
        err
    }

    pub fn quota_exceeded(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::QuotaExceeded, message, false)
    }

    pub fn model_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ModelUnavailable, message, false)
    }

    pub fn network_timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NetworkTimeout, message, true)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnknownError, message, false)
    }

    pub const fn is_retryable(&self) -> bool {
        self.retryable
    }

    pub const fn retry_after(&self) -> Option<u64> {
        self.retry_after
    }

    /// Serialisable view handed to whatever sits above the adapters.
    pub fn to_response(&self) -> AiErrorResponse {
        AiErrorResponse {
            code: self.code,
            message: self.message.clone(),
            details: self.details.clone(),
            retryable: self.retryable,
            retry_after: self.retry_after,
        }
    }
}

/// Wire shape of an adapter error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiErrorResponse {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub retryable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

impl From<AiErrorResponse> for AdapterError {
    fn from(resp: AiErrorResponse) -> Self {
        Self {
            code: resp.code,
            message: resp.message,
            details: resp.details,
            retryable: resp.retryable,
            retry_after: resp.retry_after,
        }
    }
}

/// Returned by the factory for identifiers outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported provider: {0}")]
pub struct UnsupportedProvider(pub String);

/// Problems assembling an adapter configuration (e.g. from the environment).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingEnv(String),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
