//! HTTP Utilities
//!
//! This module contains HTTP-related utilities:
//! - Header construction
//! - Deadline-bounded dispatch
//! - Status code classification

pub mod errors;
pub mod headers;
pub mod transport;

pub use errors::*;
pub use headers::*;
pub use transport::*;
