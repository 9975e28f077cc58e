//! Domain models for the Boardroom system.

pub mod agent;
pub mod config;
pub mod message;
pub mod search;

pub use agent::{AgentProfile, KeywordWeight, RoutingDecision, ScoredCandidate};
pub use config::{
    AgentsConfig, Config, GeneratorConfig, KnowledgeBaseConfig, LoggingConfig, RoutingConfig,
};
pub use message::{ChatRequest, ChatResponse};
pub use search::{format_results, SearchResult, NO_RESULTS_SENTINEL};
