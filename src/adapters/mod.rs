//! Adapters: concrete implementations of the domain ports.

pub mod generators;
pub mod knowledge_base;
