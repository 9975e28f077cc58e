use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid delegation_threshold: {0}. Must be in [0, 1]")]
    InvalidDelegationThreshold(f64),

    #[error("Invalid confidence_scale: {0}. Must be positive and finite")]
    InvalidConfidenceScale(f64),

    #[error("Invalid first_token_window: {0}. Must be at least 1")]
    InvalidTokenWindow(usize),

    #[error("Invalid {name}: {value}. Bonuses must be non-negative and finite")]
    InvalidBonus { name: &'static str, value: f64 },

    #[error("Knowledge base URL cannot be empty")]
    EmptyKnowledgeBaseUrl,

    #[error("Invalid max_results: {0}. Must be at least 1")]
    InvalidMaxResults(u32),

    #[error("Invalid fuzziness: {0}. Must be in [0, 100]")]
    InvalidFuzziness(u8),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid generator provider: {0}. Must be one of: anthropic, mock")]
    InvalidProvider(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("No specialist agents configured")]
    NoSpecialists,

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Configuration loader with hierarchical merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .boardroom/config.yaml (project config)
    /// 3. .boardroom/local.yaml (local overrides, optional)
    /// 4. Environment variables (`BOARDROOM_*` prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".boardroom/config.yaml"))
            .merge(Yaml::file(".boardroom/local.yaml"))
            .merge(Env::prefixed("BOARDROOM_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading.
    ///
    /// An empty specialist roster is fatal here even though the router
    /// itself tolerates one: a production deployment that would silently
    /// answer everything through the director is a misconfiguration.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let routing = &config.routing;
        if !routing.delegation_threshold.is_finite()
            || !(0.0..=1.0).contains(&routing.delegation_threshold)
        {
            return Err(ConfigError::InvalidDelegationThreshold(
                routing.delegation_threshold,
            ));
        }
        if !routing.confidence_scale.is_finite() || routing.confidence_scale <= 0.0 {
            return Err(ConfigError::InvalidConfidenceScale(routing.confidence_scale));
        }
        if routing.first_token_window == 0 {
            return Err(ConfigError::InvalidTokenWindow(routing.first_token_window));
        }
        if !routing.positional_bonus.is_finite() || routing.positional_bonus < 0.0 {
            return Err(ConfigError::InvalidBonus {
                name: "positional_bonus",
                value: routing.positional_bonus,
            });
        }
        if !routing.repetition_bonus.is_finite() || routing.repetition_bonus < 0.0 {
            return Err(ConfigError::InvalidBonus {
                name: "repetition_bonus",
                value: routing.repetition_bonus,
            });
        }

        let kb = &config.knowledge_base;
        if kb.url.is_empty() {
            return Err(ConfigError::EmptyKnowledgeBaseUrl);
        }
        if kb.max_results == 0 {
            return Err(ConfigError::InvalidMaxResults(kb.max_results));
        }
        if kb.fuzziness > 100 {
            return Err(ConfigError::InvalidFuzziness(kb.fuzziness));
        }
        if kb.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(kb.timeout_secs));
        }

        let generator = &config.generator;
        if !matches!(generator.provider.as_str(), "anthropic" | "mock") {
            return Err(ConfigError::InvalidProvider(generator.provider.clone()));
        }
        if generator.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(generator.timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if config.agents.specialists.is_empty() {
            return Err(ConfigError::NoSpecialists);
        }
        for agent in std::iter::once(&config.agents.director).chain(&config.agents.specialists) {
            if agent.role.trim().is_empty() {
                return Err(ConfigError::ValidationFailed(
                    "agent role cannot be empty".to_string(),
                ));
            }
            for keyword in &agent.keywords {
                if keyword.term.trim().is_empty() || keyword.weight <= 0.0 {
                    return Err(ConfigError::ValidationFailed(format!(
                        "agent '{}' has an invalid keyword definition",
                        agent.role
                    )));
                }
            }
        }

        Ok(())
    }
}
