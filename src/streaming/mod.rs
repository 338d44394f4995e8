//! Streaming Module
//!
//! Incremental text streaming shared by every provider:
//! - `DeltaStream` and its cancellable handle
//! - SSE line classification (`data:` payloads, the `[DONE]` sentinel)
//! - The stream factory that turns a response body into text deltas

mod factory;
mod sse;
mod types;

pub use factory::*;
pub use sse::*;
pub use types::*;
