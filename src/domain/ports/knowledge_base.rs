//! Knowledge-base search port.

use async_trait::async_trait;

use crate::domain::models::SearchResult;

/// Trait for knowledge-base search backends.
///
/// Implementations follow a degrade-gracefully policy: any transport or
/// service failure yields an empty result list (logged), never an error.
/// A knowledge-base outage must not break conversation handling.
#[async_trait]
pub trait KnowledgeBase: Send + Sync {
    /// Backend name (e.g., "http", "null").
    fn name(&self) -> &'static str;

    /// Search the knowledge base.
    ///
    /// `fuzziness` trades keyword matching (0) against semantic
    /// similarity (100); it is passed through, not interpreted here.
    async fn search(&self, query: &str, max_results: u32, fuzziness: u8) -> Vec<SearchResult>;
}
