// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::http::StatusCode;
use reqwest::Client;
use search_tools::search::{SearchConfig, SearchError, SearchOutcome, SearchTool};

use super::mock_server::{bing_body, closed_port_url, MockServer};

fn bing_config(endpoint: String, key: Option<&str>) -> SearchConfig {
    let mut config = SearchConfig::default();
    config.provider = "bing".to_string();
    config.providers.bing_endpoint = endpoint;
    config.providers.bing_api_key = key.map(str::to_string);
    config
}

fn tool(config: &SearchConfig) -> SearchTool {
    SearchTool::from_config(config, Client::new()).unwrap()
}

#[tokio::test]
async fn test_bing_results_digest() {
    let server = MockServer::json(StatusCode::OK, bing_body(2)).await;
    let config = bing_config(server.bing_url(), Some("test-key"));

    let text = tool(&config).call("rust", Some(2)).await;
    assert_eq!(text, "# T1\n\nS1\n\n# T2\n\nS2");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].subscription_key.as_deref(), Some("test-key"));
    assert_eq!(requests[0].params.get("q").map(String::as_str), Some("rust"));
    assert_eq!(requests[0].params.get("count").map(String::as_str), Some("2"));
    assert_eq!(
        requests[0].params.get("responseFilter").map(String::as_str),
        Some("Webpages")
    );
}

#[tokio::test]
async fn test_bing_count_clamped() {
    let server = MockServer::json(StatusCode::OK, bing_body(60)).await;
    let config = bing_config(server.bing_url(), Some("test-key"));

    let outcome = tool(&config).search("rust", Some(100)).await.unwrap();
    assert_eq!(outcome.len(), 50);
    assert_eq!(
        server.requests()[0].params.get("count").map(String::as_str),
        Some("50")
    );
}

#[tokio::test]
async fn test_bing_truncates_overlong_response() {
    let server = MockServer::json(StatusCode::OK, bing_body(5)).await;
    let config = bing_config(server.bing_url(), Some("test-key"));

    let outcome = tool(&config).search("rust", Some(3)).await.unwrap();
    assert_eq!(outcome.len(), 3);
}

#[tokio::test]
async fn test_bing_no_results() {
    let server = MockServer::json(StatusCode::OK, "{}").await;
    let config = bing_config(server.bing_url(), Some("test-key"));

    let tool = tool(&config);
    assert_eq!(tool.search("nothing", Some(5)).await.unwrap(), SearchOutcome::Empty);
    assert_eq!(tool.call("nothing", Some(5)).await, "No results found");
}

#[tokio::test]
async fn test_bing_missing_key_makes_no_request() {
    let server = MockServer::json(StatusCode::OK, bing_body(1)).await;
    let config = bing_config(server.bing_url(), None);

    let tool = tool(&config);
    let err = tool.search("rust", Some(1)).await.unwrap_err();
    assert!(matches!(err, SearchError::MissingCredential { .. }));

    let text = tool.call("rust", Some(1)).await;
    assert!(text.starts_with("Error:"));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_bing_server_error() {
    let server = MockServer::json(StatusCode::INTERNAL_SERVER_ERROR, "upstream down").await;
    let config = bing_config(server.bing_url(), Some("test-key"));

    let text = tool(&config).call("rust", Some(1)).await;
    assert_eq!(text, "Error: Search API error: 500 - upstream down");
}

#[tokio::test]
async fn test_bing_unauthorized() {
    let server = MockServer::json(StatusCode::UNAUTHORIZED, "").await;
    let config = bing_config(server.bing_url(), Some("bad-key"));

    let err = tool(&config).search("rust", Some(1)).await.unwrap_err();
    assert!(matches!(err, SearchError::ApiError { status: 401, .. }));
}

#[tokio::test]
async fn test_bing_malformed_body() {
    let server = MockServer::json(StatusCode::OK, "{not json").await;
    let config = bing_config(server.bing_url(), Some("test-key"));

    let text = tool(&config).call("rust", Some(1)).await;
    assert!(text.starts_with("Error: Malformed response"));
}

#[tokio::test]
async fn test_bing_connection_refused() {
    let config = bing_config(closed_port_url().await, Some("test-key"));

    let tool = tool(&config);
    let err = tool.search("rust", Some(1)).await.unwrap_err();
    assert!(matches!(err, SearchError::Transport { .. }));

    let text = tool.call("rust", Some(1)).await;
    assert!(text.starts_with("Error: "));
    assert!(text.len() > "Error: ".len());
}
