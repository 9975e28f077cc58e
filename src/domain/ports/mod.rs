//! Domain ports: trait seams between the core and the outside world.

pub mod knowledge_base;
pub mod response_generator;
pub mod scoring;

pub use knowledge_base::KnowledgeBase;
pub use response_generator::ResponseGenerator;
pub use scoring::ScoringStrategy;
