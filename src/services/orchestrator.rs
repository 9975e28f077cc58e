//! Conversation orchestration.
//!
//! Ties the pieces together: route the message, optionally augment the
//! prompt context from the knowledge base, hand off to the response
//! generator, and return its output verbatim.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::{format_results, ChatRequest, ChatResponse, KnowledgeBaseConfig};
use crate::domain::ports::{KnowledgeBase, ResponseGenerator};
use crate::services::agent_registry::AgentRegistry;
use crate::services::delegation_router::DelegationRouter;

/// Orchestrates one conversation turn per invocation.
///
/// Holds only read-only state, so a single instance can serve concurrent
/// requests from parallel workers.
pub struct ConversationOrchestrator {
    registry: Arc<AgentRegistry>,
    router: DelegationRouter,
    knowledge_base: Arc<dyn KnowledgeBase>,
    generator: Arc<dyn ResponseGenerator>,
    kb_config: KnowledgeBaseConfig,
}

impl ConversationOrchestrator {
    pub fn new(
        registry: Arc<AgentRegistry>,
        router: DelegationRouter,
        knowledge_base: Arc<dyn KnowledgeBase>,
        generator: Arc<dyn ResponseGenerator>,
        kb_config: KnowledgeBaseConfig,
    ) -> Self {
        Self {
            registry,
            router,
            knowledge_base,
            generator,
            kb_config,
        }
    }

    /// Handle one chat request end to end.
    ///
    /// Knowledge-base augmentation, when requested, is attempted before
    /// response generation; a failed search degrades to an empty context
    /// block and never blocks the response.
    pub async fn handle(&self, request: &ChatRequest) -> DomainResult<ChatResponse> {
        let request_id = Uuid::new_v4();

        let decision = self.router.route(&request.message, &self.registry);

        let mut kb_results = 0;
        let context = if request.use_kb {
            let results = self
                .knowledge_base
                .search(
                    &request.message,
                    self.kb_config.max_results,
                    self.kb_config.fuzziness,
                )
                .await;
            kb_results = results.len();
            Some(format_results(&results))
        } else {
            None
        };

        tracing::info!(
            %request_id,
            agent = %decision.agent.role,
            confidence = decision.confidence,
            delegated = decision.delegated,
            kb_augmented = request.use_kb,
            kb_results,
            "routing decision"
        );

        let response = self
            .generator
            .generate(&decision.agent, &request.message, context.as_deref())
            .await?;

        Ok(ChatResponse {
            request_id,
            response,
            role: decision.agent.role,
            confidence: decision.confidence,
            delegated: decision.delegated,
            kb_results,
            generated_at: Utc::now(),
        })
    }

    /// The registry this orchestrator routes over.
    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// The router, exposed for routing diagnostics (dry runs).
    pub fn router(&self) -> &DelegationRouter {
        &self.router
    }
}
