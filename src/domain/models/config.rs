use serde::{Deserialize, Serialize};

use crate::domain::models::agent::AgentProfile;

/// Main configuration structure for Boardroom.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Delegation scoring and threshold configuration.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Knowledge-base search endpoint configuration.
    #[serde(default)]
    pub knowledge_base: KnowledgeBaseConfig,

    /// Response generator configuration.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Agent roster: director plus ordered specialists.
    #[serde(default)]
    pub agents: AgentsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Delegation scoring knobs.
///
/// Immutable once loaded: the router and scorer take a copy at
/// construction so routing decisions stay reproducible in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RoutingConfig {
    /// Minimum specialist confidence required to delegate.
    #[serde(default = "default_delegation_threshold")]
    pub delegation_threshold: f64,

    /// Constant `k` in the confidence curve `score / (score + k)`.
    #[serde(default = "default_confidence_scale")]
    pub confidence_scale: f64,

    /// Token window counted as the "opening" of a message.
    #[serde(default = "default_first_token_window")]
    pub first_token_window: usize,

    /// Bonus added when a keyword occurs within the opening window.
    #[serde(default = "default_positional_bonus")]
    pub positional_bonus: f64,

    /// Bonus added per extra keyword occurrence beyond the first.
    #[serde(default = "default_repetition_bonus")]
    pub repetition_bonus: f64,
}

const fn default_delegation_threshold() -> f64 {
    0.4
}

const fn default_confidence_scale() -> f64 {
    2.0
}

const fn default_first_token_window() -> usize {
    5
}

const fn default_positional_bonus() -> f64 {
    0.5
}

const fn default_repetition_bonus() -> f64 {
    0.25
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            delegation_threshold: default_delegation_threshold(),
            confidence_scale: default_confidence_scale(),
            first_token_window: default_first_token_window(),
            positional_bonus: default_positional_bonus(),
            repetition_bonus: default_repetition_bonus(),
        }
    }
}

/// Knowledge-base search endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct KnowledgeBaseConfig {
    /// Search endpoint URL.
    #[serde(default = "default_kb_url")]
    pub url: String,

    /// Maximum results requested per search.
    #[serde(default = "default_max_results")]
    pub max_results: u32,

    /// Keyword-vs-semantic knob in [0, 100], passed through to the service.
    #[serde(default = "default_fuzziness")]
    pub fuzziness: u8,

    /// Request timeout in seconds. A hung service must not hang the chat.
    #[serde(default = "default_kb_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_kb_url() -> String {
    "http://localhost:8000/search".to_string()
}

const fn default_max_results() -> u32 {
    5
}

const fn default_fuzziness() -> u8 {
    50
}

const fn default_kb_timeout_secs() -> u64 {
    5
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            url: default_kb_url(),
            max_results: default_max_results(),
            fuzziness: default_fuzziness(),
            timeout_secs: default_kb_timeout_secs(),
        }
    }
}

/// Response generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GeneratorConfig {
    /// Provider: "anthropic" or "mock".
    #[serde(default = "default_provider")]
    pub provider: String,

    /// API key (falls back to ANTHROPIC_API_KEY env when unset).
    #[serde(default)]
    pub api_key: Option<String>,

    /// API base URL.
    #[serde(default = "default_generator_base_url")]
    pub base_url: String,

    /// Model to use.
    #[serde(default = "default_model")]
    pub model: String,

    /// Max tokens to generate.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in seconds.
    #[serde(default = "default_generator_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider() -> String {
    "anthropic".to_string()
}

fn default_generator_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

const fn default_max_tokens() -> u32 {
    1024
}

const fn default_generator_timeout_secs() -> u64 {
    120
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: None,
            base_url: default_generator_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_generator_timeout_secs(),
        }
    }
}

/// Agent roster configuration.
///
/// Specialist order is significant: exact scoring ties resolve to the
/// earlier-listed specialist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AgentsConfig {
    /// Director agent that answers when no specialist clears the threshold.
    #[serde(default = "default_director")]
    pub director: AgentProfile,

    /// Ordered specialist agents.
    #[serde(default = "default_specialists")]
    pub specialists: Vec<AgentProfile>,
}

fn default_director() -> AgentProfile {
    AgentProfile::new("CEO")
        .with_baseline_confidence(0.3)
        .with_persona(
            "You are the CEO. Answer general business questions with a broad, \
             strategic view of the company.",
        )
}

fn default_specialists() -> Vec<AgentProfile> {
    vec![
        AgentProfile::new("CTO")
            .with_keyword("technology", 3.0)
            .with_keyword("software", 3.0)
            .with_keyword("infrastructure", 2.0)
            .with_keyword("security", 2.0)
            .with_persona("You are the CTO. Answer questions about technology and engineering."),
        AgentProfile::new("CFO")
            .with_keyword("finance", 3.0)
            .with_keyword("revenue", 3.0)
            .with_keyword("sales", 3.0)
            .with_keyword("budget", 2.0)
            .with_persona("You are the CFO. Answer questions about finances and reporting."),
        AgentProfile::new("CMO")
            .with_keyword("marketing", 3.0)
            .with_keyword("brand", 3.0)
            .with_keyword("campaign", 2.0)
            .with_keyword("customers", 2.0)
            .with_persona("You are the CMO. Answer questions about marketing and customers."),
        AgentProfile::new("COO")
            .with_keyword("operations", 3.0)
            .with_keyword("logistics", 2.0)
            .with_keyword("process", 2.0)
            .with_keyword("staffing", 2.0)
            .with_persona("You are the COO. Answer questions about operations and execution."),
    ]
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            director: default_director(),
            specialists: default_specialists(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty.
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; stderr-only when unset.
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}
