//! Execution Layer
//!
//! HTTP plumbing shared by all provider adapters.

pub mod executors;
pub mod http;
