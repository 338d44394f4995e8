//! Shared data types
//!
//! Canonical chat shapes every provider adapter translates to and from, plus
//! the per-adapter configuration.

pub mod chat;
pub mod config;
pub mod provider;

pub use chat::*;
pub use config::*;
pub use provider::*;
