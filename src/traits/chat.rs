//! Chat adapter contract

use async_trait::async_trait;

use crate::error::AdapterError;
use crate::streaming::{DeltaStream, DeltaStreamHandle};
use crate::types::{ChatRequest, ChatResponse, ProviderId};

/// Uniform chat surface over one upstream provider.
///
/// An adapter is bound to one provider, one credential and one endpoint for
/// its whole life. Methods take `&self` and may be called concurrently.
#[async_trait]
pub trait ChatAdapter: Send + Sync {
    /// Provider this adapter talks to.
    fn provider(&self) -> ProviderId;

    /// Base URL requests are sent to (override or provider default).
    fn endpoint(&self) -> &str;

    /// The provider's well-known base URL.
    fn default_endpoint(&self) -> &'static str;

    /// Fallback model list used when discovery is unavailable or fails.
    fn default_models(&self) -> Vec<String>;

    /// One non-streaming completion.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, AdapterError>;

    /// Streaming completion.
    ///
    /// Returns once the upstream accepted the request; a non-success status
    /// fails here rather than inside the stream.
    async fn chat_stream(&self, request: &ChatRequest) -> Result<DeltaStream, AdapterError>;

    /// Streaming completion paired with a handle that can stop it early.
    async fn chat_stream_with_cancel(
        &self,
        request: &ChatRequest,
    ) -> Result<DeltaStreamHandle, AdapterError> {
        let stream = self.chat_stream(request).await?;
        let (cancellable, cancel) = crate::utils::cancel::make_cancellable_stream(stream);
        Ok(DeltaStreamHandle {
            stream: cancellable,
            cancel,
        })
    }

    /// Probe whether `api_key` is accepted by this adapter's endpoint.
    ///
    /// Any failure, whatever its kind, reads as `false`.
    async fn validate_api_key(&self, api_key: &str) -> bool;

    /// Models usable with this adapter.
    ///
    /// A discovered list comes back de-duplicated and sorted. Never fails:
    /// when discovery is unavailable, errors or finds nothing, the result is
    /// [`Self::default_models`] in its own cheapest-first order.
    async fn list_models(&self) -> Vec<String>;
}
