//! Integration tests for the HTTP knowledge-base client.
//!
//! Verifies the wire contract against a mock server and the
//! degrade-gracefully policy: every failure mode yields empty results,
//! never an error.

use boardroom::adapters::knowledge_base::HttpKnowledgeBase;
use boardroom::domain::models::KnowledgeBaseConfig;
use boardroom::domain::ports::KnowledgeBase;
use mockito::{Matcher, Server};

fn config_for(url: String) -> KnowledgeBaseConfig {
    KnowledgeBaseConfig {
        url,
        max_results: 5,
        fuzziness: 50,
        timeout_secs: 1,
    }
}

#[tokio::test]
async fn test_search_success_returns_results() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/search")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "query": "IT support",
            "max_results": 5,
            "search_fuzziness": 50,
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "status": "success",
                "results": [
                    {"source": "doc1", "content": "MyTGuy provides IT support.", "score": 0.92}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let kb = HttpKnowledgeBase::new(config_for(format!("{}/search", server.url())))
        .expect("client should build");
    let results = kb.search("IT support", 5, 50).await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].source, "doc1");
    assert_eq!(results[0].content, "MyTGuy provides IT support.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_http_500_returns_empty() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/search")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let kb = HttpKnowledgeBase::new(config_for(format!("{}/search", server.url())))
        .expect("client should build");
    let results = kb.search("anything", 5, 50).await;

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_error_status_returns_empty() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/search")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"error","error":"index offline"}"#)
        .create_async()
        .await;

    let kb = HttpKnowledgeBase::new(config_for(format!("{}/search", server.url())))
        .expect("client should build");
    let results = kb.search("anything", 5, 50).await;

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_malformed_body_returns_empty() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/search")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create_async()
        .await;

    let kb = HttpKnowledgeBase::new(config_for(format!("{}/search", server.url())))
        .expect("client should build");
    let results = kb.search("anything", 5, 50).await;

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_unreachable_service_returns_empty() {
    // Nothing listens on this port; connection is refused immediately.
    let kb = HttpKnowledgeBase::new(config_for("http://127.0.0.1:1/search".to_string()))
        .expect("client should build");
    let results = kb.search("anything", 5, 50).await;

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_hung_service_times_out_to_empty() {
    // A listener that accepts connections but never responds. The client's
    // 1s timeout must fire and degrade to empty results.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
    let url = format!("http://{}/search", listener.local_addr().unwrap());

    let kb = HttpKnowledgeBase::new(config_for(url)).expect("client should build");
    let results = kb.search("anything", 5, 50).await;

    assert!(results.is_empty());
    drop(listener);
}

#[tokio::test]
async fn test_search_clamps_out_of_range_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/search")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "max_results": 1,
            "search_fuzziness": 100,
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"success","results":[]}"#)
        .create_async()
        .await;

    let kb = HttpKnowledgeBase::new(config_for(format!("{}/search", server.url())))
        .expect("client should build");
    // max_results 0 is bumped to 1, fuzziness 255 is clamped to 100
    let results = kb.search("anything", 0, 255).await;

    assert!(results.is_empty());
    mock.assert_async().await;
}
