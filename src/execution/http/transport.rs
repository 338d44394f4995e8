//! Deadline-bounded request dispatch.

use std::time::Duration;

use crate::error::AdapterError;
use crate::types::ProviderId;

/// Per-request context carried into logs.
#[derive(Debug, Clone)]
pub struct HttpRequestContext {
    pub request_id: String,
    pub provider_id: ProviderId,
    /// URL without credentials.
    pub url: String,
    pub stream: bool,
}

impl HttpRequestContext {
    pub fn new(provider_id: ProviderId, url: impl Into<String>, stream: bool) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            provider_id,
            url: url.into(),
            stream,
        }
    }
}

/// Send `request`, failing with `NETWORK_TIMEOUT` if no response head arrives
/// within `timeout`.
///
/// The deadline only covers the dispatch. Reading the body afterwards (in
/// particular a long-lived event stream) is not bounded by it. The timer is
/// dropped together with the future on every exit path.
pub async fn fetch_with_timeout(
    ctx: &HttpRequestContext,
    request: reqwest::RequestBuilder,
    timeout: Duration,
) -> Result<reqwest::Response, AdapterError> {
    tracing::debug!(
        provider = %ctx.provider_id,
        request_id = %ctx.request_id,
        url = %ctx.url,
        stream = ctx.stream,
        "dispatching request"
    );

    match tokio::time::timeout(timeout, request.send()).await {
        Ok(Ok(response)) => {
            tracing::debug!(
                provider = %ctx.provider_id,
                request_id = %ctx.request_id,
                status = response.status().as_u16(),
                "response received"
            );
            Ok(response)
        }
        Ok(Err(err)) => {
            let error = AdapterError::from(err);
            tracing::debug!(
                provider = %ctx.provider_id,
                request_id = %ctx.request_id,
                error = %error,
                "request failed"
            );
            Err(error)
        }
        Err(_elapsed) => {
            tracing::debug!(
                provider = %ctx.provider_id,
                request_id = %ctx.request_id,
                timeout_ms = timeout.as_millis() as u64,
                "request timed out"
            );
            Err(AdapterError::network_timeout(format!(
                "Request timed out after {}ms",
                timeout.as_millis()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn contexts_get_distinct_request_ids() {
        let a = HttpRequestContext::new(ProviderId::OpenAi, "http://x", false);
        let b = HttpRequestContext::new(ProviderId::OpenAi, "http://x", false);
        assert_ne!(a.request_id, b.request_id);
    }

    #[tokio::test]
    async fn transport_failure_is_unknown_and_not_retryable() {
        let ctx = HttpRequestContext::new(ProviderId::OpenAi, "not a url", false);
        let req = reqwest::Client::new().get("not a url");
        let err = fetch_with_timeout(&ctx, req, Duration::from_secs(5))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownError);
        assert!(!err.retryable);
        assert!(err.details.is_some());
    }
}
