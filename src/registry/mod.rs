//! Adapter registry
//!
//! The single place where provider identifiers turn into adapters.

pub mod factory;

pub use factory::{
    SUPPORTED_PROVIDERS, create_adapter, create_adapter_for, is_provider_supported,
    supported_providers,
};
