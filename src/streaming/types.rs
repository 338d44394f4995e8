//! Core Streaming Types

use futures::Stream;
use std::pin::Pin;

use crate::error::AdapterError;

/// Lazy, finite, non-restartable sequence of text fragments.
///
/// Concatenating every `Ok` item in order yields the full completion text.
/// A transport failure surfaces as one `Err` item, after which the stream
/// ends. Dropping the stream releases the underlying connection.
pub type DeltaStream = Pin<Box<dyn Stream<Item = Result<String, AdapterError>> + Send>>;

/// Delta stream with a cancellation handle.
///
/// ```rust,ignore
/// let handle = adapter.chat_stream_with_cancel(&request).await?;
/// // hand `handle.cancel` to whoever may abort the stream
/// handle.cancel.cancel();
/// ```
pub struct DeltaStreamHandle {
    pub stream: DeltaStream,
    pub cancel: crate::utils::cancel::CancelHandle,
}
