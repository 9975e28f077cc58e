//! Knowledge-base adapters.

pub mod http;

pub use http::{HttpKnowledgeBase, NullKnowledgeBase};
