// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::http::StatusCode;
use search_tools::search::{search_blocking, SearchConfig};

use super::mock_server::{bing_body, MockServer};

/// Run the blocking binding on a thread outside the test runtime
async fn blocking_call(config: SearchConfig, query: &str, num_results: Option<usize>) -> String {
    let query = query.to_string();
    let handle = std::thread::spawn(move || search_blocking(&config, &query, num_results));
    tokio::task::spawn_blocking(move || handle.join().unwrap())
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_blocking_bing_call() {
    let server = MockServer::json(StatusCode::OK, bing_body(1)).await;
    let mut config = SearchConfig::default();
    config.provider = "bing".to_string();
    config.providers.bing_endpoint = server.bing_url();
    config.providers.bing_api_key = Some("test-key".to_string());

    let text = blocking_call(config, "rust", Some(1)).await;
    assert_eq!(text, "# T1\n\nS1");
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_blocking_unknown_provider() {
    let mut config = SearchConfig::default();
    config.provider = "lycos".to_string();

    let text = blocking_call(config, "rust", None).await;
    assert!(text.starts_with("Error: Invalid search configuration"));
}

#[test]
fn test_blocking_missing_key_outside_runtime() {
    let mut config = SearchConfig::default();
    config.provider = "bing".to_string();

    let text = search_blocking(&config, "rust", Some(5));
    assert!(text.starts_with("Error:"));
}
