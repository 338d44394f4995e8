//! Error Handling Module
//!
//! Every adapter failure surfaces as one [`AdapterError`] carrying an
//! [`ErrorCode`] plus retry metadata. Provider-native error bodies only ever
//! travel inside [`AdapterError::details`].
//!
//! # Example
//!
//! ```rust,ignore
//! use llm_gateway::error::{AdapterError, ErrorCode};
//!
//! let error = AdapterError::rate_limited("slow down", None);
//! assert_eq!(error.code, ErrorCode::RateLimited);
//! assert!(error.is_retryable());
//! ```

mod conversions;
pub mod types;

pub use types::*;
