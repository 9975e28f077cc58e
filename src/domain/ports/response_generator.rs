//! Response generation port.
//!
//! The seam between routing and the LLM backend: the orchestrator hands
//! over the selected agent, the original message, and an optional
//! knowledge-base context block, and returns the generated text verbatim.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::AgentProfile;

/// Trait for response generation backends.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Backend name (e.g., "anthropic", "mock").
    fn name(&self) -> &'static str;

    /// Generate a response as the given agent.
    ///
    /// `context` carries the formatted knowledge-base block when
    /// augmentation was requested.
    async fn generate(
        &self,
        agent: &AgentProfile,
        message: &str,
        context: Option<&str>,
    ) -> DomainResult<String>;
}
