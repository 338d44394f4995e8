//! HTTP Headers Utility
//!
//! Common utilities for building HTTP headers across all providers.

use crate::error::AdapterError;
use reqwest::header::{
    ACCEPT, AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue,
};

/// HTTP header builder for API requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    /// Create a new header builder
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Add Bearer token authorization
    pub fn with_bearer_auth(mut self, token: &str) -> Result<Self, AdapterError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| AdapterError::invalid_api_key(format!("Invalid API key format: {e}")))?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    /// Add JSON content type
    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self
    }

    /// Ask for an event stream instead of a buffered body
    pub fn with_event_stream_accept(mut self) -> Self {
        self.headers
            .insert(ACCEPT, HeaderValue::from_static("text/event-stream"));
        self.headers
            .insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        self
    }

    /// Add a custom header
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, AdapterError> {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AdapterError::unknown(format!("Invalid header name '{name}': {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| AdapterError::unknown(format!("Invalid header value for '{name}': {e}")))?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Build the final HeaderMap
    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
