//! HTTP status classification
//!
//! Maps provider status codes onto the adapter error taxonomy so every
//! adapter reports failures the same way.

use crate::error::AdapterError;
use crate::types::ProviderId;

/// Retry hint attached to `RATE_LIMITED` errors, in seconds.
pub const RATE_LIMIT_RETRY_AFTER_SECS: u64 = 60;

/// Classify a non-success status. The parsed body is kept as `details`.
///
/// | status   | code              | retryable |
/// |----------|-------------------|-----------|
/// | 401      | INVALID_API_KEY   | no        |
/// | 429      | RATE_LIMITED      | yes (60s) |
/// | 402, 403 | QUOTA_EXCEEDED    | no        |
/// | 404      | MODEL_UNAVAILABLE | no        |
/// | 408, 504 | NETWORK_TIMEOUT   | yes       |
/// | other    | UNKNOWN_ERROR     | no        |
pub fn handle_http_error(status: u16, body: serde_json::Value) -> AdapterError {
    let provider_message = extract_error_message(&body);
    let describe = |fallback: &str| match &provider_message {
        Some(msg) => format!("{fallback} (HTTP {status}): {msg}"),
        None => format!("{fallback} (HTTP {status})"),
    };

    let error = match status {
        401 => AdapterError::invalid_api_key(describe("Invalid API key")),
        429 => AdapterError::rate_limited(
            describe("Rate limit exceeded"),
            Some(RATE_LIMIT_RETRY_AFTER_SECS),
        ),
        402 | 403 => AdapterError::quota_exceeded(describe("Quota exceeded")),
        404 => AdapterError::model_unavailable(describe("Model unavailable")),
        408 | 504 => AdapterError::network_timeout(describe("Upstream timeout")),
        _ => AdapterError::unknown(describe("Provider request failed")),
    };
    error.with_details(body)
}

/// Read a failed response's body (substituting `{}` when it is not JSON)
/// and classify it.
pub async fn error_from_response(provider: ProviderId, response: reqwest::Response) -> AdapterError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let body = serde_json::from_str::<serde_json::Value>(&text)
        .unwrap_or_else(|_| serde_json::Value::Object(serde_json::Map::new()));
    let error = handle_http_error(status, body);
    tracing::warn!(
        provider = %provider,
        status,
        code = %error.code,
        "provider returned an error status"
    );
    error
}

/// Best-effort human message from the common provider error envelopes:
/// `{"error": {"message": ..}}`, `{"error": ".."}` and `{"message": ..}`.
fn extract_error_message(body: &serde_json::Value) -> Option<String> {
    let candidate = body
        .get("error")
        .and_then(|e| e.get("message").or(Some(e)))
        .and_then(|v| v.as_str())
        .or_else(|| body.get("message").and_then(|v| v.as_str()))?;
    let trimmed = candidate.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use serde_json::json;

    #[test]
    fn status_table_holds() {
        let cases = [
            (401, ErrorCode::InvalidApiKey, false, None),
            (429, ErrorCode::RateLimited, true, Some(60)),
            (402, ErrorCode::QuotaExceeded, false, None),
            (403, ErrorCode::QuotaExceeded, false, None),
            (404, ErrorCode::ModelUnavailable, false, None),
            (408, ErrorCode::NetworkTimeout, true, None),
            (504, ErrorCode::NetworkTimeout, true, None),
            (400, ErrorCode::UnknownError, false, None),
            (500, ErrorCode::UnknownError, false, None),
            (503, ErrorCode::UnknownError, false, None),
        ];
        for (status, code, retryable, retry_after) in cases {
            let e = handle_http_error(status, json!({}));
            assert_eq!(e.code, code, "status {status}");
            assert_eq!(e.retryable, retryable, "status {status}");
            assert_eq!(e.retry_after, retry_after, "status {status}");
        }
    }

    #[test]
    fn body_is_preserved_as_details() {
        let body = json!({"error": {"message": "bad key", "type": "invalid_request_error"}});
        let e = handle_http_error(401, body.clone());
        assert_eq!(e.details, Some(body));
        assert!(e.message.contains("bad key"));
    }

    #[test]
    fn extracts_messages_from_known_envelopes() {
        assert_eq!(
            extract_error_message(&json!({"error": {"message": "a"}})).as_deref(),
            Some("a")
        );
        assert_eq!(
            extract_error_message(&json!({"error": "b"})).as_deref(),
            Some("b")
        );
        assert_eq!(
            extract_error_message(&json!({"code": "x", "message": "c"})).as_deref(),
            Some("c")
        );
        assert_eq!(extract_error_message(&json!({})), None);
    }
}
