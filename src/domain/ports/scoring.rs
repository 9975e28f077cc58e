//! Scoring strategy port for delegation routing.

use crate::domain::models::AgentProfile;

/// Trait for message-to-agent relevance scoring.
///
/// The router only consumes raw scores; normalization, thresholding, and
/// tie-breaking live in the routing control flow. Keeping the weighting
/// scheme behind this seam lets it be swapped or tested independently.
pub trait ScoringStrategy: Send + Sync {
    /// Compute the raw (un-normalized) relevance of `agent` for `message`.
    ///
    /// Must be non-negative and deterministic for a given input pair.
    fn raw_score(&self, message: &str, agent: &AgentProfile) -> f64;
}
