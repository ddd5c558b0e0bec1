// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Bing Search API provider
//!
//! Implements web search using Microsoft Bing Web Search API v7.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::config::BING_API_KEY_ENV;
use super::provider::SearchProvider;
use super::types::{SearchError, SearchResult};

/// Most results Bing returns for one request
pub const BING_MAX_RESULTS: usize = 50;

/// Bing Search API provider
pub struct BingSearchProvider {
    api_key: Option<String>,
    endpoint: String,
    client: Client,
}

impl BingSearchProvider {
    /// Create a new Bing Search provider
    ///
    /// # Arguments
    /// * `api_key` - Bing subscription key; `None` makes every call fail fast
    /// * `endpoint` - Search endpoint URL
    /// * `client` - Shared HTTP client
    pub fn new(api_key: Option<String>, endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait]
impl SearchProvider for BingSearchProvider {
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SearchError::MissingCredential {
                provider: self.name().to_string(),
                env_var: BING_API_KEY_ENV.to_string(),
            })?;

        let count = num_results.min(BING_MAX_RESULTS);
        debug!("Bing request: count={}", count);

        let response = self
            .client
            .get(self.endpoint.as_str())
            .header("Ocp-Apim-Subscription-Key", api_key)
            .query(&[
                ("q", query),
                ("count", &count.to_string()),
                ("responseFilter", "Webpages"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                body
            };
            return Err(SearchError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let mut results = parse_bing_response(&body)?;
        results.truncate(count);
        Ok(results)
    }

    fn name(&self) -> &'static str {
        "bing"
    }

    fn max_results(&self) -> usize {
        BING_MAX_RESULTS
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Decode a Bing JSON body into results
///
/// A body without `webPages` means zero items.
fn parse_bing_response(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    let data: BingResponse =
        serde_json::from_str(body).map_err(|e| SearchError::MalformedResponse {
            message: format!("JSON parse error: {}", e),
        })?;

    Ok(data
        .web_pages
        .map(|pages| {
            pages
                .value
                .into_iter()
                .map(|r| SearchResult {
                    title: r.name,
                    snippet: r.snippet,
                    url: r.url,
                    source: "bing".to_string(),
                })
                .collect()
        })
        .unwrap_or_default())
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct BingResponse {
    web_pages: Option<BingWebPages>,
}

#[derive(Debug, serde::Deserialize)]
struct BingWebPages {
    #[serde(default)]
    value: Vec<BingResult>,
}

#[derive(Debug, serde::Deserialize)]
struct BingResult {
    name: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    snippet: String,
}
