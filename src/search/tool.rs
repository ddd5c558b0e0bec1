// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search tool binding
//!
//! Wraps one configured provider behind the `(query, num_results) -> text`
//! tool contract. Two modes are offered:
//! - async: the caller owns a `reqwest::Client` and shares it across calls
//! - blocking: [`search_blocking`] opens its own client and runtime for the
//!   duration of a single call

use reqwest::Client;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::bing::BingSearchProvider;
use super::config::{ProviderKind, SearchConfig};
use super::digest::{self, DigestStyle};
use super::duckduckgo::DuckDuckGoProvider;
use super::provider::{effective_count, SearchProvider};
use super::types::{SearchError, SearchOutcome};

/// A search provider bound to the tool contract
pub struct SearchTool {
    provider: Box<dyn SearchProvider>,
    default_num_results: usize,
}

/// Build an HTTP client with the configured timeout
pub fn build_client(config: &SearchConfig) -> Result<Client, SearchError> {
    Client::builder()
        .timeout(config.request_timeout())
        .user_agent(concat!("search-tools/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| SearchError::Runtime {
            message: format!("Failed to create HTTP client: {}", e),
        })
}

impl SearchTool {
    /// Create the tool for the provider named in `config`
    ///
    /// # Arguments
    /// * `config` - Search configuration, including any credential
    /// * `client` - Caller-owned HTTP client, shared by every call
    pub fn from_config(config: &SearchConfig, client: Client) -> Result<Self, SearchError> {
        let kind = config
            .provider_kind()
            .map_err(|reason| SearchError::InvalidConfig { reason })?;

        let provider: Box<dyn SearchProvider> = match kind {
            ProviderKind::DuckDuckGo => Box::new(DuckDuckGoProvider::new(
                config.providers.ddg_endpoint.clone(),
                client,
            )),
            ProviderKind::Bing => Box::new(BingSearchProvider::new(
                config.providers.bing_api_key.clone(),
                config.providers.bing_endpoint.clone(),
                client,
            )),
        };
        debug!("Search tool bound to provider: {}", provider.name());
        if !provider.is_available() {
            warn!(
                "Search provider {} has no credential; calls will return errors",
                provider.name()
            );
        }

        Ok(Self {
            provider,
            default_num_results: config.default_num_results.max(1),
        })
    }

    /// Create the tool around an arbitrary provider
    pub fn with_provider(provider: Box<dyn SearchProvider>) -> Self {
        Self {
            provider,
            default_num_results: 1,
        }
    }

    /// Name of the bound provider
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Digest template of the bound provider
    pub fn digest_style(&self) -> DigestStyle {
        self.provider.digest_style()
    }

    /// Default result count used when the caller passes `None`
    pub fn default_num_results(&self) -> usize {
        self.default_num_results
    }

    /// Perform one search and return the typed outcome
    ///
    /// The requested count is clamped to `[1, provider max]`. Exactly one
    /// outbound request is made; nothing is retried or cached.
    pub async fn search(
        &self,
        query: &str,
        num_results: Option<usize>,
    ) -> Result<SearchOutcome, SearchError> {
        let requested = num_results.unwrap_or(self.default_num_results);
        let count = effective_count(requested, self.provider.max_results());
        let start = Instant::now();

        match self.provider.search(query, count).await {
            Ok(mut results) => {
                results.truncate(count);
                info!(
                    "Search complete: {} results from {} in {}ms (requested {}, effective {})",
                    results.len(),
                    self.provider.name(),
                    start.elapsed().as_millis(),
                    requested,
                    count
                );
                Ok(SearchOutcome::from_results(results))
            }
            Err(e) => {
                warn!("Search provider {} failed: {}", self.provider.name(), e);
                Err(e)
            }
        }
    }

    /// Perform one search and render it into tool text
    ///
    /// Never fails: errors become `Error: {message}`.
    pub async fn call(&self, query: &str, num_results: Option<usize>) -> String {
        let result = self.search(query, num_results).await;
        digest::render(&result, self.digest_style())
    }

    /// Run several independent calls concurrently over the shared client
    pub async fn call_batch(&self, queries: &[String], num_results: Option<usize>) -> Vec<String> {
        let futures: Vec<_> = queries
            .iter()
            .map(|q| self.call(q, num_results))
            .collect();

        futures::future::join_all(futures).await
    }
}

/// Blocking search tool call
///
/// Opens a client and a current-thread runtime, performs one call and drops
/// both before returning. Must not be called from inside a Tokio runtime;
/// doing so yields an error string rather than a panic.
pub fn search_blocking(config: &SearchConfig, query: &str, num_results: Option<usize>) -> String {
    match run_blocking(config, query, num_results) {
        Ok(text) => text,
        Err(e) => digest::render_error(&e),
    }
}

fn run_blocking(
    config: &SearchConfig,
    query: &str,
    num_results: Option<usize>,
) -> Result<String, SearchError> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(SearchError::Runtime {
            message: "search_blocking called from within an async runtime".to_string(),
        });
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| SearchError::Runtime {
            message: format!("Failed to start runtime: {}", e),
        })?;

    runtime.block_on(async {
        let client = build_client(config)?;
        let tool = SearchTool::from_config(config, client)?;
        Ok::<_, SearchError>(tool.call(query, num_results).await)
    })
}
