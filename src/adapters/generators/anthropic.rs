//! Anthropic Messages API response generator.
//!
//! Non-streaming HTTP calls to the Messages API. The selected agent's
//! persona becomes the system prompt; a knowledge-base context block, when
//! present, is appended to it so the model answers from the retrieved
//! material.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{AgentProfile, GeneratorConfig};
use crate::domain::ports::ResponseGenerator;

/// Message role in the Messages API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum MessageRole {
    User,
    Assistant,
}

/// Content block in a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Message {
    role: MessageRole,
    content: Vec<ContentBlock>,
}

/// Request to the Messages API.
#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    messages: Vec<Message>,
}

/// Response from the Messages API.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

/// Response generator backed by the Anthropic Messages API.
pub struct AnthropicGenerator {
    config: GeneratorConfig,
    client: Client,
}

impl AnthropicGenerator {
    const API_VERSION: &'static str = "2023-06-01";

    pub fn new(config: GeneratorConfig) -> DomainResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                DomainError::ValidationFailed(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { config, client })
    }

    /// API key from config or the ANTHROPIC_API_KEY environment variable.
    fn api_key(&self) -> Option<String> {
        self.config
            .api_key
            .clone()
            .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
    }

    fn build_system_prompt(agent: &AgentProfile, context: Option<&str>) -> Option<String> {
        let mut system = agent.persona.clone();
        if let Some(context) = context {
            if !system.is_empty() {
                system.push_str("\n\n");
            }
            system.push_str(context);
        }
        if system.is_empty() {
            None
        } else {
            Some(system)
        }
    }
}

#[async_trait]
impl ResponseGenerator for AnthropicGenerator {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn generate(
        &self,
        agent: &AgentProfile,
        message: &str,
        context: Option<&str>,
    ) -> DomainResult<String> {
        let api_key = self.api_key().ok_or_else(|| {
            DomainError::GenerationFailed("ANTHROPIC_API_KEY not set".to_string())
        })?;

        let request = MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            system: Self::build_system_prompt(agent, context),
            messages: vec![Message {
                role: MessageRole::User,
                content: vec![ContentBlock::Text {
                    text: message.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.config.base_url))
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-api-key", &api_key)
            .header("anthropic-version", Self::API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::GenerationFailed(format!("API request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::GenerationFailed(format!(
                "API error {status}: {body}"
            )));
        }

        let result: MessagesResponse = response.json().await.map_err(|e| {
            DomainError::GenerationFailed(format!("Failed to parse response: {e}"))
        })?;

        let text = result
            .content
            .iter()
            .map(|block| match block {
                ContentBlock::Text { text } => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n");

        Ok(text)
    }
}
