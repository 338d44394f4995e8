//! Alibaba DashScope Provider
//!
//! Qwen models through DashScope's native text-generation endpoint (not its
//! OpenAI-compatible mode).

pub mod client;
pub mod models;
pub mod streaming;
pub mod transformers;
pub mod types;

pub use client::{DASHSCOPE_DEFAULT_ENDPOINT, DashScopeAdapter};
