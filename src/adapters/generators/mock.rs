//! Mock response generator for tests and offline use.

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::AgentProfile;
use crate::domain::ports::ResponseGenerator;

/// What the mock should do when asked to generate.
#[derive(Debug, Clone)]
enum Behavior {
    /// Always return this text.
    Canned(String),
    /// Echo role, message, and context back; useful for asserting what
    /// the generator was handed.
    Echo,
    /// Fail with this message.
    Fail(String),
}

/// Response generator that never leaves the process.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    behavior: Behavior,
}

impl MockGenerator {
    pub fn canned(output: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Canned(output.into()),
        }
    }

    pub fn echoing() -> Self {
        Self {
            behavior: Behavior::Echo,
        }
    }

    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fail(error.into()),
        }
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::canned("This is a mock response.")
    }
}

#[async_trait]
impl ResponseGenerator for MockGenerator {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(
        &self,
        agent: &AgentProfile,
        message: &str,
        context: Option<&str>,
    ) -> DomainResult<String> {
        match &self.behavior {
            Behavior::Canned(output) => Ok(output.clone()),
            Behavior::Echo => match context {
                Some(context) => Ok(format!("[{}] {message}\n{context}", agent.role)),
                None => Ok(format!("[{}] {message}", agent.role)),
            },
            Behavior::Fail(error) => Err(DomainError::GenerationFailed(error.clone())),
        }
    }
}
