use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inbound chat request: free-text message plus the augmentation flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Free-text user input.
    pub message: String,

    /// Whether knowledge-base augmentation is requested.
    #[serde(default)]
    pub use_kb: bool,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, use_kb: bool) -> Self {
        Self {
            message: message.into(),
            use_kb,
        }
    }
}

/// Response returned to the caller, with routing metadata for observability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Correlates log records for this request.
    pub request_id: Uuid,

    /// The generated answer, returned verbatim from the response generator.
    pub response: String,

    /// Role of the agent that answered.
    pub role: String,

    /// Confidence attached to the routing decision.
    pub confidence: f64,

    /// Whether a specialist was delegated to (false means director fallback).
    pub delegated: bool,

    /// Number of knowledge-base results folded into the prompt context.
    /// Zero when augmentation was not requested or degraded to nothing.
    pub kb_results: usize,

    pub generated_at: DateTime<Utc>,
}
