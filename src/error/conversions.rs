//! Type Conversions for AdapterError
//!
//! From implementations for the transport and JSON errors adapters run into.

use super::types::AdapterError;

impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::network_timeout(format!("Request timed out: {err}"));
        }
        Self::unknown(format!("Network error: {err}"))
            .with_details(serde_json::Value::String(err.to_string()))
    }
}

impl From<serde_json::Error> for AdapterError {
    fn from(err: serde_json::Error) -> Self {
        Self::unknown(format!("Failed to parse provider response: {err}"))
            .with_details(serde_json::Value::String(err.to_string()))
    }
}

/// Framing errors from the SSE line reader. A transport failure that was
/// wrapped into `std::io::Error` on the way in is unwrapped back out.
impl From<tokio_util::codec::AnyDelimiterCodecError> for AdapterError {
    fn from(err: tokio_util::codec::AnyDelimiterCodecError) -> Self {
        use tokio_util::codec::AnyDelimiterCodecError;

        match err {
            AnyDelimiterCodecError::MaxChunkLengthExceeded => {
                Self::unknown("Stream line exceeds the maximum length")
            }
            AnyDelimiterCodecError::Io(io) => {
                let message = io.to_string();
                match io.into_inner().map(|inner| inner.downcast::<AdapterError>()) {
                    Some(Ok(adapter)) => *adapter,
                    _ => Self::unknown(format!("Stream read failed: {message}")),
                }
            }
        }
    }
}
