//! Utility modules

pub mod cancel;
