// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for web search tool calls
//!
//! Built once at startup and injected into providers. Credentials are read
//! here and nowhere else.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Environment variable holding the Bing subscription key
pub const BING_API_KEY_ENV: &str = "BING_API_KEY";

/// Default Bing Web Search v7 endpoint
pub const DEFAULT_BING_ENDPOINT: &str = "https://api.bing.microsoft.com/v7.0/search";

/// Default DuckDuckGo HTML endpoint
pub const DEFAULT_DDG_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Search providers the tool can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    DuckDuckGo,
    Bing,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::DuckDuckGo => "duckduckgo",
            ProviderKind::Bing => "bing",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "duckduckgo" | "ddg" => Ok(ProviderKind::DuckDuckGo),
            "bing" => Ok(ProviderKind::Bing),
            other => Err(format!("Unknown search provider: {}", other)),
        }
    }
}

/// Configuration for web search tool calls
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Selected provider name ("duckduckgo" or "bing")
    pub provider: String,
    /// Provider-specific configuration
    pub providers: SearchProviderConfig,
    /// Default number of results when the caller gives none
    pub default_num_results: usize,
    /// Request timeout in milliseconds, applied to clients this crate builds
    pub request_timeout_ms: u64,
}

/// Provider-specific configuration
#[derive(Clone)]
pub struct SearchProviderConfig {
    /// Bing Search API key
    pub bing_api_key: Option<String>,
    /// Bing endpoint URL
    pub bing_endpoint: String,
    /// DuckDuckGo HTML endpoint URL
    pub ddg_endpoint: String,
}

impl fmt::Debug for SearchProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchProviderConfig")
            .field("bing_api_key", &self.bing_api_key.as_ref().map(|_| "<redacted>"))
            .field("bing_endpoint", &self.bing_endpoint)
            .field("ddg_endpoint", &self.ddg_endpoint)
            .finish()
    }
}

impl SearchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env::var("SEARCH_PROVIDER").unwrap_or(defaults.provider),
            providers: SearchProviderConfig {
                bing_api_key: env::var(BING_API_KEY_ENV)
                    .ok()
                    .filter(|k| !k.trim().is_empty()),
                bing_endpoint: env::var("BING_ENDPOINT")
                    .unwrap_or(defaults.providers.bing_endpoint),
                ddg_endpoint: env::var("DDG_ENDPOINT").unwrap_or(defaults.providers.ddg_endpoint),
            },
            default_num_results: env::var("SEARCH_DEFAULT_NUM_RESULTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_num_results),
            request_timeout_ms: env::var("SEARCH_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.provider_kind()?;
        if self.default_num_results == 0 {
            return Err("Default number of results must be greater than 0".to_string());
        }
        if self.request_timeout_ms == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Parse the selected provider
    pub fn provider_kind(&self) -> Result<ProviderKind, String> {
        self.provider.parse()
    }

    /// Request timeout as a duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::DuckDuckGo.as_str().to_string(),
            providers: SearchProviderConfig {
                bing_api_key: None,
                bing_endpoint: DEFAULT_BING_ENDPOINT.to_string(),
                ddg_endpoint: DEFAULT_DDG_ENDPOINT.to_string(),
            },
            default_num_results: 1,
            request_timeout_ms: 10000,
        }
    }
}
