//! Provider Implementations
//!
//! Concrete [`ChatAdapter`](crate::traits::ChatAdapter) implementations:
//! - `openai_compatible`: OpenAI, DeepSeek, Doubao, Zhipu
//! - `gemini`: Google Gemini
//! - `dashscope`: Alibaba DashScope (Qwen)

pub mod common;
pub mod dashscope;
pub mod gemini;
pub mod openai_compatible;

pub use dashscope::DashScopeAdapter;
pub use gemini::GeminiAdapter;
pub use openai_compatible::OpenAiCompatibleAdapter;
