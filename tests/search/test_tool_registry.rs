// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::http::StatusCode;
use reqwest::Client;
use search_tools::search::{SearchConfig, SearchTool};
use search_tools::tools::{ToolRegistry, WebSearchTool};
use serde_json::json;
use std::sync::Arc;

use super::mock_server::{ddg_page, MockServer};

async fn registry_for(server: &MockServer) -> ToolRegistry {
    let mut config = SearchConfig::default();
    config.providers.ddg_endpoint = server.ddg_url();
    let search = SearchTool::from_config(&config, Client::new()).unwrap();

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(WebSearchTool::new(Arc::new(search))));
    registry
}

#[tokio::test]
async fn test_invoke_web_search() {
    let server = MockServer::html(StatusCode::OK, ddg_page(3)).await;
    let registry = registry_for(&server).await;

    let text = registry
        .invoke("web_search", json!({"query": "rust", "num_results": 2}))
        .await;
    assert_eq!(text, "# T1\n\n B1\n\n# T2\n\n B2");
}

#[tokio::test]
async fn test_invoke_with_bad_arguments() {
    let server = MockServer::html(StatusCode::OK, ddg_page(1)).await;
    let registry = registry_for(&server).await;

    let text = registry.invoke("web_search", json!({"num_results": 2})).await;
    assert!(text.starts_with("Error: invalid arguments"));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_manifest_lists_web_search() {
    let server = MockServer::html(StatusCode::OK, ddg_page(1)).await;
    let registry = registry_for(&server).await;

    let defs = registry.definitions();
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].name, "web_search");
    assert_eq!(defs[0].parameters["required"], json!(["query"]));
}
