//! Domain errors for the Boardroom executive agent system.

use thiserror::Error;

/// Domain-level errors that can occur while handling a conversation.
///
/// Knowledge-base transport failures are deliberately absent: the
/// knowledge-base port degrades to empty results instead of erroring,
/// so an outage never blocks a response.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Agent not found: {0}")]
    AgentNotFound(String),

    #[error("Invalid agent definition: {0}")]
    InvalidAgentDefinition(String),

    #[error("Response generation failed: {0}")]
    GenerationFailed(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
