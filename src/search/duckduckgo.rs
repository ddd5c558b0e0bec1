// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! DuckDuckGo search provider
//!
//! Implements web search using DuckDuckGo's HTML interface.
//! No API key required. Results are capped at 10 per call.

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use super::digest::DigestStyle;
use super::provider::SearchProvider;
use super::types::{SearchError, SearchResult};

/// Most results DuckDuckGo text search hands back for one call
pub const DDG_MAX_RESULTS: usize = 10;

/// Browser User-Agent sent with every request; DDG blocks obvious bots
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// DuckDuckGo search provider (no API key required)
pub struct DuckDuckGoProvider {
    endpoint: String,
    client: Client,
}

impl DuckDuckGoProvider {
    /// Create a new DuckDuckGo provider
    ///
    /// # Arguments
    /// * `endpoint` - HTML search endpoint URL
    /// * `client` - Shared HTTP client
    pub fn new(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoProvider {
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let max = num_results.min(DDG_MAX_RESULTS);
        debug!("DuckDuckGo request: max_results={}", max);

        let response = self
            .client
            .post(self.endpoint.as_str())
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .form(&[("q", query)])
            .send()
            .await?;

        // DDG answers throttled clients with 202 and an anomaly page, so
        // only 200 carries results
        let status = response.status();
        if status != StatusCode::OK {
            let message = if status == StatusCode::ACCEPTED {
                "DuckDuckGo rate limit: request was not served".to_string()
            } else {
                format!(
                    "DuckDuckGo request failed: {}",
                    status.canonical_reason().unwrap_or("unexpected status")
                )
            };
            return Err(SearchError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let html = response.text().await?;
        parse_ddg_html(&html, max)
    }

    fn name(&self) -> &'static str {
        "duckduckgo"
    }

    fn max_results(&self) -> usize {
        DDG_MAX_RESULTS
    }

    fn is_available(&self) -> bool {
        true // No API key needed
    }

    fn digest_style(&self) -> DigestStyle {
        DigestStyle::Padded
    }
}

fn selector(css: &str) -> Result<Selector, SearchError> {
    Selector::parse(css).map_err(|e| SearchError::MalformedResponse {
        message: format!("bad selector {}: {:?}", css, e),
    })
}

/// Parse a DuckDuckGo HTML result page
///
/// Sponsored blocks (`result--ad`) are skipped. Entries without a title are
/// dropped.
fn parse_ddg_html(html: &str, max_results: usize) -> Result<Vec<SearchResult>, SearchError> {
    let document = Html::parse_document(html);
    let result_sel = selector("div.result")?;
    let title_sel = selector("a.result__a")?;
    let snippet_sel = selector(".result__snippet")?;

    let mut results = Vec::new();
    for block in document.select(&result_sel) {
        if results.len() >= max_results {
            break;
        }
        if block.value().classes().any(|c| c == "result--ad") {
            continue;
        }

        let Some(link) = block.select(&title_sel).next() else {
            continue;
        };
        let title = element_text(&link);
        if title.is_empty() {
            continue;
        }
        let url = link
            .value()
            .attr("href")
            .map(extract_ddg_url)
            .unwrap_or_default();
        let snippet = block
            .select(&snippet_sel)
            .next()
            .map(|e| element_text(&e))
            .unwrap_or_default();

        results.push(SearchResult {
            title,
            snippet,
            url,
            source: "duckduckgo".to_string(),
        });
    }

    Ok(results)
}

/// Collapse an element's text nodes into single-spaced text
fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract actual URL from DuckDuckGo's redirect URL
///
/// DDG links look like `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`.
fn extract_ddg_url(href: &str) -> String {
    let absolute = if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    };

    match Url::parse(&absolute) {
        Ok(parsed) => parsed
            .query_pairs()
            .find(|(k, _)| k == "uddg")
            .map(|(_, v)| v.into_owned())
            .unwrap_or(absolute),
        Err(_) => String::new(),
    }
}
