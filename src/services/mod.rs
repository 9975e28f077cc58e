//! Service layer: routing and orchestration.

pub mod agent_registry;
pub mod delegation_router;
pub mod keyword_scorer;
pub mod orchestrator;

pub use agent_registry::AgentRegistry;
pub use delegation_router::DelegationRouter;
pub use keyword_scorer::KeywordScorer;
pub use orchestrator::ConversationOrchestrator;
