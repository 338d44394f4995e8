//! OpenAI-Compatible Providers
//!
//! OpenAI itself plus DeepSeek, Doubao (Volcengine Ark) and Zhipu GLM, which
//! all accept the chat-completions wire format at different base URLs.
//!
//! ```rust,ignore
//! use llm_gateway::prelude::*;
//!
//! let adapter = OpenAiCompatibleAdapter::deepseek(AdapterConfig::new("sk-..."));
//! let reply = adapter
//!     .chat(&ChatRequest::new("deepseek-chat", vec![ChatMessage::user("Hello")]))
//!     .await?;
//! ```

pub mod adapter;
pub mod models;
pub mod profile;
pub mod streaming;
pub mod transformers;
pub mod types;

pub use adapter::OpenAiCompatibleAdapter;
pub use models::{deepseek, doubao, openai, zhipu};
pub use profile::ProviderProfile;
