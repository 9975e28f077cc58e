//! HTTP knowledge-base client.
//!
//! Thin client over the knowledge-base search endpoint: one JSON POST per
//! query. Every failure mode degrades to an empty result list so a
//! knowledge-base outage never breaks conversation handling.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{KnowledgeBaseConfig, SearchResult};
use crate::domain::ports::KnowledgeBase;

/// Wire request for the search endpoint.
#[derive(Debug, Serialize)]
struct SearchRequestBody<'a> {
    query: &'a str,
    max_results: u32,
    search_fuzziness: u8,
}

/// Wire response from the search endpoint. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct SearchResponseBody {
    status: String,
    #[serde(default)]
    results: Vec<SearchResult>,
    #[serde(default)]
    error: Option<String>,
}

/// Knowledge-base client over HTTP.
pub struct HttpKnowledgeBase {
    client: Client,
    config: KnowledgeBaseConfig,
}

impl HttpKnowledgeBase {
    /// Create a client with a finite request timeout from config.
    pub fn new(config: KnowledgeBaseConfig) -> DomainResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                DomainError::ValidationFailed(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    async fn try_search(
        &self,
        query: &str,
        max_results: u32,
        fuzziness: u8,
    ) -> Result<SearchResponseBody, reqwest::Error> {
        let body = SearchRequestBody {
            query,
            max_results: max_results.max(1),
            search_fuzziness: fuzziness.min(100),
        };

        let response = self
            .client
            .post(&self.config.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        response.json::<SearchResponseBody>().await
    }
}

#[async_trait]
impl KnowledgeBase for HttpKnowledgeBase {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn search(&self, query: &str, max_results: u32, fuzziness: u8) -> Vec<SearchResult> {
        match self.try_search(query, max_results, fuzziness).await {
            Ok(body) if body.status == "success" => {
                tracing::debug!(
                    results = body.results.len(),
                    "knowledge base search succeeded"
                );
                body.results
            }
            Ok(body) => {
                tracing::warn!(
                    status = %body.status,
                    error = body.error.as_deref().unwrap_or("none"),
                    "knowledge base reported failure, degrading to empty results"
                );
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    url = %self.config.url,
                    "knowledge base request failed, degrading to empty results"
                );
                Vec::new()
            }
        }
    }
}

/// Knowledge base that always returns nothing. Used when no backend is
/// configured and as a stand-in in tests.
pub struct NullKnowledgeBase;

#[async_trait]
impl KnowledgeBase for NullKnowledgeBase {
    fn name(&self) -> &'static str {
        "null"
    }

    async fn search(&self, _query: &str, _max_results: u32, _fuzziness: u8) -> Vec<SearchResult> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_serialization() {
        let body = SearchRequestBody {
            query: "IT support",
            max_results: 5,
            search_fuzziness: 50,
        };
        let json = serde_json::to_value(&body).expect("should serialize");
        assert_eq!(json["query"], "IT support");
        assert_eq!(json["max_results"], 5);
        assert_eq!(json["search_fuzziness"], 50);
    }

    #[test]
    fn test_response_body_parses_success() {
        let json = r#"{"status":"success","results":[{"source":"doc1","content":"text"}]}"#;
        let body: SearchResponseBody = serde_json::from_str(json).expect("should parse");
        assert_eq!(body.status, "success");
        assert_eq!(body.results.len(), 1);
        assert!(body.error.is_none());
    }

    #[test]
    fn test_response_body_parses_error_without_results() {
        let json = r#"{"status":"error","error":"index offline"}"#;
        let body: SearchResponseBody = serde_json::from_str(json).expect("should parse");
        assert_eq!(body.status, "error");
        assert!(body.results.is_empty());
        assert_eq!(body.error.as_deref(), Some("index offline"));
    }

    #[tokio::test]
    async fn test_null_knowledge_base_returns_empty() {
        let kb = NullKnowledgeBase;
        assert!(kb.search("anything", 5, 50).await.is_empty());
        assert_eq!(kb.name(), "null");
    }
}
