//! Agent registry: the immutable roster of executive agents.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{AgentProfile, AgentsConfig};

/// Ordered, read-only roster of agents.
///
/// Built once at startup and never mutated afterwards, so it is safe for
/// concurrent reads without locking. Specialist order is registration
/// order and is load-bearing: exact scoring ties resolve to the
/// earlier-registered specialist.
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    director: AgentProfile,
    specialists: Vec<AgentProfile>,
}

impl AgentRegistry {
    /// Build a registry, validating every profile.
    ///
    /// An empty specialist list is accepted here: routing tolerates it by
    /// always falling back to the director. Rejecting an empty roster in
    /// production is the config loader's job at startup.
    pub fn new(director: AgentProfile, specialists: Vec<AgentProfile>) -> DomainResult<Self> {
        validate_profile(&director)?;
        for specialist in &specialists {
            validate_profile(specialist)?;
        }

        let mut seen: Vec<String> = Vec::with_capacity(specialists.len() + 1);
        seen.push(director.role.to_lowercase());
        for specialist in &specialists {
            let role = specialist.role.to_lowercase();
            if seen.contains(&role) {
                return Err(DomainError::InvalidAgentDefinition(format!(
                    "duplicate agent role: {}",
                    specialist.role
                )));
            }
            seen.push(role);
        }

        Ok(Self {
            director,
            specialists,
        })
    }

    /// Build a registry from the agents section of the configuration.
    pub fn from_config(config: &AgentsConfig) -> DomainResult<Self> {
        Self::new(config.director.clone(), config.specialists.clone())
    }

    pub fn director(&self) -> &AgentProfile {
        &self.director
    }

    pub fn specialists(&self) -> &[AgentProfile] {
        &self.specialists
    }

    /// Look up any agent (director included) by role, case-insensitively.
    pub fn get(&self, role: &str) -> Option<&AgentProfile> {
        if self.director.role.eq_ignore_ascii_case(role) {
            return Some(&self.director);
        }
        self.specialists
            .iter()
            .find(|a| a.role.eq_ignore_ascii_case(role))
    }

    /// Number of specialists (the director is not counted).
    pub fn len(&self) -> usize {
        self.specialists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specialists.is_empty()
    }
}

fn validate_profile(agent: &AgentProfile) -> DomainResult<()> {
    if agent.role.trim().is_empty() {
        return Err(DomainError::InvalidAgentDefinition(
            "agent role cannot be empty".to_string(),
        ));
    }

    if !agent.baseline_confidence.is_finite()
        || !(0.0..=1.0).contains(&agent.baseline_confidence)
    {
        return Err(DomainError::InvalidAgentDefinition(format!(
            "agent '{}' baseline_confidence {} must be in [0, 1]",
            agent.role, agent.baseline_confidence
        )));
    }

    for keyword in &agent.keywords {
        if keyword.term.trim().is_empty() {
            return Err(DomainError::InvalidAgentDefinition(format!(
                "agent '{}' has an empty keyword term",
                agent.role
            )));
        }
        if !keyword.weight.is_finite() || keyword.weight <= 0.0 {
            return Err(DomainError::InvalidAgentDefinition(format!(
                "agent '{}' keyword '{}' weight {} must be positive",
                agent.role, keyword.term, keyword.weight
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> AgentRegistry {
        AgentRegistry::new(
            AgentProfile::new("CEO"),
            vec![
                AgentProfile::new("CTO").with_keyword("software", 3.0),
                AgentProfile::new("CFO").with_keyword("revenue", 3.0),
            ],
        )
        .expect("roster should be valid")
    }

    #[test]
    fn test_registry_preserves_registration_order() {
        let registry = roster();
        let roles: Vec<&str> = registry.specialists().iter().map(|a| a.role.as_str()).collect();
        assert_eq!(roles, vec!["CTO", "CFO"]);
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let registry = roster();
        assert_eq!(registry.get("cfo").map(|a| a.role.as_str()), Some("CFO"));
        assert_eq!(registry.get("ceo").map(|a| a.role.as_str()), Some("CEO"));
        assert!(registry.get("CIO").is_none());
    }

    #[test]
    fn test_empty_specialists_accepted() {
        let registry = AgentRegistry::new(AgentProfile::new("CEO"), vec![])
            .expect("empty roster should construct");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_rejects_empty_role() {
        let result = AgentRegistry::new(AgentProfile::new("  "), vec![]);
        assert!(matches!(result, Err(DomainError::InvalidAgentDefinition(_))));
    }

    #[test]
    fn test_rejects_duplicate_roles() {
        let result = AgentRegistry::new(
            AgentProfile::new("CEO"),
            vec![AgentProfile::new("CTO"), AgentProfile::new("cto")],
        );
        assert!(matches!(result, Err(DomainError::InvalidAgentDefinition(_))));
    }

    #[test]
    fn test_rejects_nonpositive_keyword_weight() {
        let result = AgentRegistry::new(
            AgentProfile::new("CEO"),
            vec![AgentProfile::new("CTO").with_keyword("software", 0.0)],
        );
        assert!(matches!(result, Err(DomainError::InvalidAgentDefinition(_))));
    }

    #[test]
    fn test_rejects_out_of_range_baseline() {
        let result = AgentRegistry::new(
            AgentProfile::new("CEO").with_baseline_confidence(1.5),
            vec![],
        );
        assert!(matches!(result, Err(DomainError::InvalidAgentDefinition(_))));
    }

    #[test]
    fn test_from_config_defaults() {
        let registry = AgentRegistry::from_config(&AgentsConfig::default())
            .expect("default roster should be valid");
        assert_eq!(registry.director().role, "CEO");
        assert_eq!(registry.len(), 4);
    }
}
