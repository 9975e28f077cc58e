//! Knowledge-base search results and prompt-context formatting.

use serde::{Deserialize, Serialize};

/// Sentinel rendered when a search produced no results.
pub const NO_RESULTS_SENTINEL: &str = "No relevant information was found in the knowledge base.";

/// One hit returned by the knowledge-base service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Source document identifier.
    pub source: String,

    /// Matched content text.
    pub content: String,

    /// Relevance score assigned by the service.
    #[serde(default)]
    pub score: f64,
}

impl SearchResult {
    pub fn new(source: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            content: content.into(),
            score: 0.0,
        }
    }
}

/// Render search results as a prompt-context block.
///
/// Output is deterministic for a given ordered input: results are numbered
/// in the order received and rendered as `source: content` pairs. An empty
/// input yields [`NO_RESULTS_SENTINEL`]. Stability matters here because the
/// block is snapshot-tested and embedded verbatim in prompts.
pub fn format_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return NO_RESULTS_SENTINEL.to_string();
    }

    let mut out = String::from("Here is relevant information from the knowledge base:\n\n");
    for (i, result) in results.iter().enumerate() {
        out.push_str(&format!("[{}] {}:\n{}\n\n", i + 1, result.source, result.content));
    }
    out
}
