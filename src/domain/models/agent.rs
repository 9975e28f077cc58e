use serde::{Deserialize, Serialize};

/// A domain keyword with its scoring weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordWeight {
    /// Keyword term, matched case-insensitively as a substring.
    pub term: String,

    /// Contribution to the raw score when the term matches.
    pub weight: f64,
}

impl KeywordWeight {
    pub fn new(term: impl Into<String>, weight: f64) -> Self {
        Self {
            term: term.into(),
            weight,
        }
    }
}

/// Profile of an executive agent (e.g. "CEO", "CTO").
///
/// Profiles are built once at startup from static configuration and are
/// immutable for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Role name, e.g. "CFO".
    pub role: String,

    /// Weighted domain keywords used for delegation scoring.
    #[serde(default)]
    pub keywords: Vec<KeywordWeight>,

    /// Fallback confidence used when this agent answers by default
    /// rather than by winning the delegation scoring.
    #[serde(default = "default_baseline_confidence")]
    pub baseline_confidence: f64,

    /// System-prompt persona handed to the response generator.
    #[serde(default)]
    pub persona: String,
}

fn default_baseline_confidence() -> f64 {
    0.3
}

impl AgentProfile {
    /// Create a profile with no keywords and the default baseline.
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            keywords: Vec::new(),
            baseline_confidence: default_baseline_confidence(),
            persona: String::new(),
        }
    }

    pub fn with_keyword(mut self, term: impl Into<String>, weight: f64) -> Self {
        self.keywords.push(KeywordWeight::new(term, weight));
        self
    }

    pub fn with_baseline_confidence(mut self, confidence: f64) -> Self {
        self.baseline_confidence = confidence;
        self
    }

    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }
}

/// Per-specialist scoring outcome, produced transiently during routing.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    /// Role of the scored specialist.
    pub role: String,

    /// Raw keyword score before normalization.
    pub raw_score: f64,

    /// Normalized confidence in [0, 1].
    pub confidence: f64,
}

/// Final routing outcome: exactly one agent answers the message.
#[derive(Debug, Clone)]
pub struct RoutingDecision {
    /// The agent that will produce the response.
    pub agent: AgentProfile,

    /// Confidence attached to the selection. For a delegated specialist
    /// this is its normalized score; for the director fallback it is the
    /// director's baseline confidence.
    pub confidence: f64,

    /// Whether a specialist won delegation (false means director fallback).
    pub delegated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_builder() {
        let agent = AgentProfile::new("CFO")
            .with_keyword("revenue", 3.0)
            .with_keyword("budget", 2.0)
            .with_baseline_confidence(0.25)
            .with_persona("You are the Chief Financial Officer.");

        assert_eq!(agent.role, "CFO");
        assert_eq!(agent.keywords.len(), 2);
        assert_eq!(agent.keywords[0].term, "revenue");
        assert!((agent.keywords[0].weight - 3.0).abs() < f64::EPSILON);
        assert!((agent.baseline_confidence - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_baseline_confidence() {
        let agent = AgentProfile::new("CEO");
        assert!((agent.baseline_confidence - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_profile_yaml_roundtrip() {
        let yaml = r#"
role: CTO
keywords:
  - term: software
    weight: 3.0
  - term: infrastructure
    weight: 2.0
persona: You are the Chief Technology Officer.
"#;
        let agent: AgentProfile = serde_yaml::from_str(yaml).expect("YAML should parse");
        assert_eq!(agent.role, "CTO");
        assert_eq!(agent.keywords.len(), 2);
        // baseline_confidence falls back to its default when omitted
        assert!((agent.baseline_confidence - 0.3).abs() < f64::EPSILON);
    }
}
