//! Common HTTP Execution Layer
//!
//! One place where adapters send requests: deadline handling, status
//! classification and JSON decoding are identical for every provider.
//!
//! Query parameters are passed separately from the URL so credentials that
//! travel in the query string (Gemini) never reach the logs.

use reqwest::header::HeaderMap;
use std::time::Duration;

use crate::error::AdapterError;
use crate::execution::http::{HttpRequestContext, error_from_response, fetch_with_timeout};
use crate::types::{AdapterConfig, ProviderId};

/// Transport settings shared by every request of one adapter.
#[derive(Debug, Clone)]
pub struct HttpExecutionConfig {
    pub provider_id: ProviderId,
    pub http_client: reqwest::Client,
    /// Base URL without a trailing slash.
    pub endpoint: String,
    pub timeout: Duration,
}

impl HttpExecutionConfig {
    /// Resolve endpoint, deadline and client from an adapter config.
    pub fn from_adapter_config(
        provider_id: ProviderId,
        config: &AdapterConfig,
        default_endpoint: &str,
    ) -> Self {
        Self {
            provider_id,
            http_client: config.http_client.clone().unwrap_or_default(),
            endpoint: config.resolve_endpoint(default_endpoint),
            timeout: config.timeout(),
        }
    }

    /// Join a path onto the endpoint.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path.trim_start_matches('/'))
    }
}

/// Decoded body of a successful request.
#[derive(Debug)]
pub struct HttpExecutionResult {
    pub json: serde_json::Value,
}

/// POST a JSON body and decode the JSON reply.
pub async fn execute_json_request(
    config: &HttpExecutionConfig,
    url: &str,
    headers: HeaderMap,
    query: &[(&str, &str)],
    body: &serde_json::Value,
) -> Result<HttpExecutionResult, AdapterError> {
    let request = config
        .http_client
        .post(url)
        .headers(headers)
        .query(query)
        .json(body);
    let response = send(config, url, request, false).await?;
    read_json(response).await
}

/// GET a resource and decode the JSON reply.
pub async fn execute_get_request(
    config: &HttpExecutionConfig,
    url: &str,
    headers: HeaderMap,
    query: &[(&str, &str)],
) -> Result<HttpExecutionResult, AdapterError> {
    let request = config.http_client.get(url).headers(headers).query(query);
    let response = send(config, url, request, false).await?;
    read_json(response).await
}

/// POST a JSON body and hand back the live response for SSE decoding.
///
/// Only the dispatch is bounded by the deadline; the body may stream for as
/// long as the provider keeps it open.
pub async fn execute_stream_request(
    config: &HttpExecutionConfig,
    url: &str,
    headers: HeaderMap,
    query: &[(&str, &str)],
    body: &serde_json::Value,
) -> Result<reqwest::Response, AdapterError> {
    let request = config
        .http_client
        .post(url)
        .headers(headers)
        .query(query)
        .json(body);
    send(config, url, request, true).await
}

async fn send(
    config: &HttpExecutionConfig,
    url: &str,
    request: reqwest::RequestBuilder,
    stream: bool,
) -> Result<reqwest::Response, AdapterError> {
    let ctx = HttpRequestContext::new(config.provider_id, url, stream);
    let response = fetch_with_timeout(&ctx, request, config.timeout).await?;
    if !response.status().is_success() {
        return Err(error_from_response(config.provider_id, response).await);
    }
    Ok(response)
}

async fn read_json(response: reqwest::Response) -> Result<HttpExecutionResult, AdapterError> {
    let text = response.text().await?;
    let json = serde_json::from_str(&text)?;
    Ok(HttpExecutionResult { json })
}
