//! Boardroom - Executive Chat Agents
//!
//! Boardroom routes business queries to a roster of "executive" chat agents
//! (CEO, CTO, CFO, CMO, COO) via keyword-scored delegation, optionally
//! augmenting the prompt context with knowledge-base search results.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors, and ports
//! - **Service Layer** (`services`): Registry, routing, and orchestration
//! - **Adapters** (`adapters`): Knowledge-base HTTP client and response generators
//! - **Infrastructure Layer** (`infrastructure`): Configuration, logging, wiring
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use boardroom::domain::models::ChatRequest;
//! use boardroom::infrastructure::{config::ConfigLoader, setup};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let app = setup::build(&config)?;
//!     let response = app
//!         .orchestrator
//!         .handle(&ChatRequest::new("What were our Q3 sales numbers?", true))
//!         .await?;
//!     println!("{}", response.response);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    AgentProfile, ChatRequest, ChatResponse, Config, KeywordWeight, RoutingConfig,
    RoutingDecision, ScoredCandidate, SearchResult,
};
pub use domain::ports::{KnowledgeBase, ResponseGenerator, ScoringStrategy};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{AgentRegistry, ConversationOrchestrator, DelegationRouter, KeywordScorer};
