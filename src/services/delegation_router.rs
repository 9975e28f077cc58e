//! Scoring-based delegation routing.
//!
//! Scores each registered specialist against the incoming message and
//! either delegates to the best-matching specialist or falls back to the
//! director agent. No learning: plain scoring arithmetic against an
//! immutable configuration, so decisions are reproducible in tests.

use std::sync::Arc;

use crate::domain::models::{RoutingConfig, RoutingDecision, ScoredCandidate};
use crate::domain::ports::ScoringStrategy;
use crate::services::agent_registry::AgentRegistry;
use crate::services::keyword_scorer::KeywordScorer;

/// Router dispatching messages to the most relevant specialist.
pub struct DelegationRouter {
    scorer: Arc<dyn ScoringStrategy>,
    config: RoutingConfig,
}

impl DelegationRouter {
    pub fn new(scorer: Arc<dyn ScoringStrategy>, config: RoutingConfig) -> Self {
        Self { scorer, config }
    }

    /// Keyword scorer and routing knobs from a single config.
    pub fn from_config(config: RoutingConfig) -> Self {
        Self::new(Arc::new(KeywordScorer::new(config.clone())), config)
    }

    pub fn with_defaults() -> Self {
        Self::from_config(RoutingConfig::default())
    }

    /// Score every specialist, in registration order.
    ///
    /// Candidates are transient diagnostics; the routing decision is made
    /// by [`DelegationRouter::route`].
    pub fn score_all(&self, message: &str, registry: &AgentRegistry) -> Vec<ScoredCandidate> {
        registry
            .specialists()
            .iter()
            .map(|agent| {
                let raw_score = self.scorer.raw_score(message, agent);
                ScoredCandidate {
                    role: agent.role.clone(),
                    raw_score,
                    confidence: self.normalize(raw_score),
                }
            })
            .collect()
    }

    /// Pick exactly one agent to answer the message.
    ///
    /// The highest-confidence specialist wins when it clears the
    /// delegation threshold; otherwise the director answers at its
    /// baseline confidence. Exact ties go to the earlier-registered
    /// specialist: candidates are walked in registration order and only a
    /// strictly greater confidence displaces the current best. An empty
    /// registry is not an error, it routes to the director.
    pub fn route(&self, message: &str, registry: &AgentRegistry) -> RoutingDecision {
        let candidates = self.score_all(message, registry);

        let mut best: Option<(usize, f64)> = None;
        for (idx, candidate) in candidates.iter().enumerate() {
            match best {
                Some((_, confidence)) if candidate.confidence <= confidence => {}
                _ => best = Some((idx, candidate.confidence)),
            }
        }

        match best {
            // A zero score means no keyword matched at all; that is never
            // a delegation, no matter how low the threshold is tuned.
            Some((idx, confidence))
                if confidence > 0.0 && confidence >= self.config.delegation_threshold =>
            {
                RoutingDecision {
                    agent: registry.specialists()[idx].clone(),
                    confidence,
                    delegated: true,
                }
            }
            _ => RoutingDecision {
                agent: registry.director().clone(),
                confidence: registry.director().baseline_confidence,
                delegated: false,
            },
        }
    }

    /// Map a raw score into [0, 1) via `score / (score + k)`.
    fn normalize(&self, raw_score: f64) -> f64 {
        if raw_score <= 0.0 {
            return 0.0;
        }
        raw_score / (raw_score + self.config.confidence_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::AgentProfile;

    fn flat_router() -> DelegationRouter {
        DelegationRouter::from_config(RoutingConfig {
            positional_bonus: 0.0,
            repetition_bonus: 0.0,
            ..RoutingConfig::default()
        })
    }

    fn registry() -> AgentRegistry {
        AgentRegistry::new(
            AgentProfile::new("CEO").with_baseline_confidence(0.3),
            vec![
                AgentProfile::new("CTO")
                    .with_keyword("software", 3.0)
                    .with_keyword("infrastructure", 2.0),
                AgentProfile::new("CFO")
                    .with_keyword("sales", 3.0)
                    .with_keyword("revenue", 3.0)
                    .with_keyword("Q3", 2.0),
            ],
        )
        .expect("roster should be valid")
    }

    #[test]
    fn test_routes_to_best_specialist_above_threshold() {
        let decision = flat_router().route("What were our Q3 sales numbers?", &registry());
        assert_eq!(decision.agent.role, "CFO");
        assert!(decision.delegated);
        // raw 5.0, k = 2.0 -> 5/7
        assert!((decision.confidence - 5.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_matches_falls_back_to_director() {
        let decision = flat_router().route("Hello, how are you?", &registry());
        assert_eq!(decision.agent.role, "CEO");
        assert!(!decision.delegated);
        assert!((decision.confidence - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_below_threshold_falls_back_to_director() {
        let router = DelegationRouter::from_config(RoutingConfig {
            delegation_threshold: 0.4,
            positional_bonus: 0.0,
            repetition_bonus: 0.0,
            ..RoutingConfig::default()
        });
        let registry = AgentRegistry::new(
            AgentProfile::new("CEO"),
            vec![AgentProfile::new("CTO").with_keyword("software", 1.0)],
        )
        .expect("roster should be valid");

        // raw 1.0 -> confidence 1/3 < 0.4
        let decision = router.route("software", &registry);
        assert_eq!(decision.agent.role, "CEO");
        assert!(!decision.delegated);
    }

    #[test]
    fn test_zero_score_never_delegates_even_at_zero_threshold() {
        let router = DelegationRouter::from_config(RoutingConfig {
            delegation_threshold: 0.0,
            ..RoutingConfig::default()
        });
        let decision = router.route("completely unrelated chatter", &registry());
        assert_eq!(decision.agent.role, "CEO");
        assert!(!decision.delegated);
    }

    #[test]
    fn test_exact_tie_prefers_earlier_registered() {
        let registry = AgentRegistry::new(
            AgentProfile::new("CEO"),
            vec![
                AgentProfile::new("COO").with_keyword("plan", 3.0),
                AgentProfile::new("CMO").with_keyword("plan", 3.0),
            ],
        )
        .expect("roster should be valid");

        let decision = flat_router().route("what is the plan", &registry);
        assert_eq!(decision.agent.role, "COO");
        assert!(decision.delegated);
    }

    #[test]
    fn test_empty_registry_routes_to_director() {
        let registry = AgentRegistry::new(
            AgentProfile::new("CEO").with_baseline_confidence(0.3),
            vec![],
        )
        .expect("empty roster should construct");

        let decision = flat_router().route("anything at all", &registry);
        assert_eq!(decision.agent.role, "CEO");
        assert!(!decision.delegated);
    }

    #[test]
    fn test_score_all_preserves_registration_order() {
        let candidates = flat_router().score_all("software revenue", &registry());
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].role, "CTO");
        assert_eq!(candidates[1].role, "CFO");
        assert!((candidates[0].raw_score - 3.0).abs() < 1e-9);
        assert!((candidates[1].raw_score - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_curve() {
        let router = flat_router();
        assert!(router.normalize(0.0).abs() < f64::EPSILON);
        assert!((router.normalize(2.0) - 0.5).abs() < 1e-9);
        assert!(router.normalize(1000.0) < 1.0);
        assert!(router.normalize(-1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_confidence_in_unit_interval() {
        let router = DelegationRouter::with_defaults();
        for message in ["", "sales", "sales sales sales sales", "Q3 revenue sales"] {
            for candidate in router.score_all(message, &registry()) {
                assert!((0.0..=1.0).contains(&candidate.confidence), "message: {message}");
            }
        }
    }
}
