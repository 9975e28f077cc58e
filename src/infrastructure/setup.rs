//! Application wiring: config to running orchestrator.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::generators::{AnthropicGenerator, MockGenerator};
use crate::adapters::knowledge_base::HttpKnowledgeBase;
use crate::domain::models::Config;
use crate::domain::ports::ResponseGenerator;
use crate::services::{AgentRegistry, ConversationOrchestrator, DelegationRouter};

/// Assembled application components.
pub struct App {
    pub registry: Arc<AgentRegistry>,
    pub orchestrator: ConversationOrchestrator,
}

/// Build the orchestrator and its collaborators from validated config.
pub fn build(config: &Config) -> Result<App> {
    let registry = Arc::new(
        AgentRegistry::from_config(&config.agents).context("Failed to build agent registry")?,
    );

    let router = DelegationRouter::from_config(config.routing.clone());

    let knowledge_base = Arc::new(
        HttpKnowledgeBase::new(config.knowledge_base.clone())
            .context("Failed to build knowledge base client")?,
    );

    let generator: Arc<dyn ResponseGenerator> = match config.generator.provider.as_str() {
        "mock" => Arc::new(MockGenerator::default()),
        _ => Arc::new(
            AnthropicGenerator::new(config.generator.clone())
                .context("Failed to build response generator")?,
        ),
    };

    tracing::debug!(
        specialists = registry.len(),
        kb = %config.knowledge_base.url,
        generator = %config.generator.provider,
        "application wired"
    );

    let orchestrator = ConversationOrchestrator::new(
        registry.clone(),
        router,
        knowledge_base,
        generator,
        config.knowledge_base.clone(),
    );

    Ok(App {
        registry,
        orchestrator,
    })
}
