//! # llm-gateway - A Multi-Provider Chat Gateway
//!
//! One chat contract over several mutually incompatible LLM HTTP APIs
//! (OpenAI-style, Gemini, DashScope), plus a sliding-window rate limiter.
//!
#![deny(unsafe_code)]

//! ## Features
//!
//! - **One Contract**: every provider implements [`ChatAdapter`]; callers only
//!   ever hold a `Box<dyn ChatAdapter>`.
//! - **Streaming**: SSE bodies are decoded into text deltas regardless of how
//!   the network splits them.
//! - **One Error Type**: provider failures are classified into a closed set of
//!   [`ErrorCode`]s with retry metadata.
//! - **Rate Limiting**: per-key sliding-window admission control.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use llm_gateway::prelude::*;
//! use futures::StreamExt;
//!
//! let adapter = create_adapter("deepseek", AdapterConfig::new("sk-..."))?;
//! let request = ChatRequest::new("deepseek-chat", vec![ChatMessage::user("Hello")]);
//!
//! let reply = adapter.chat(&request).await?;
//! println!("{}", reply.content);
//!
//! let mut stream = adapter.chat_stream(&request).await?;
//! while let Some(delta) = stream.next().await {
//!     print!("{}", delta?);
//! }
//! ```

pub mod error;
pub mod execution;
pub mod providers;
pub mod rate_limiter;
pub mod registry;
pub mod streaming;
pub mod telemetry;
pub mod traits;
pub mod types;
pub mod utils;

pub use error::{AdapterError, AiErrorResponse, ConfigError, ErrorCode, UnsupportedProvider};
pub use providers::{DashScopeAdapter, GeminiAdapter, OpenAiCompatibleAdapter};
pub use rate_limiter::{RateLimiter, RateLimiterConfig, RateLimiterConfigUpdate, global_rate_limiter};
pub use registry::{create_adapter, is_provider_supported, supported_providers};
pub use streaming::{DeltaStream, DeltaStreamHandle};
pub use traits::ChatAdapter;
pub use types::{
    AdapterConfig, ChatMessage, ChatRequest, ChatResponse, MessageRole, ProviderId, Usage,
};

/// Commonly used items.
pub mod prelude {
    pub use crate::error::{AdapterError, ErrorCode};
    pub use crate::providers::{DashScopeAdapter, GeminiAdapter, OpenAiCompatibleAdapter};
    pub use crate::rate_limiter::{RateLimiter, RateLimiterConfig};
    pub use crate::registry::{create_adapter, supported_providers};
    pub use crate::streaming::{DeltaStream, DeltaStreamHandle};
    pub use crate::traits::ChatAdapter;
    pub use crate::types::{AdapterConfig, ChatMessage, ChatRequest, ChatResponse, MessageRole, ProviderId, Usage};
}
