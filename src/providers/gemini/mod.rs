//! Google Gemini Provider
//!
//! Chat over the `generateContent` / `streamGenerateContent` endpoints of the
//! Generative Language API.

pub mod client;
pub mod convert;
pub mod models;
pub mod streaming;
pub mod types;

pub use client::{GEMINI_DEFAULT_ENDPOINT, GeminiAdapter};
