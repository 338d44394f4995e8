//! Capability traits
//!
//! Every provider adapter implements [`ChatAdapter`]; callers hold adapters
//! as `Box<dyn ChatAdapter>` and never need to know which provider sits
//! behind one.

pub mod chat;

pub use chat::ChatAdapter;
