// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for web search tool calls

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single search result from a web search provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Title of the search result
    pub title: String,
    /// Snippet/body text of the search result
    pub snippet: String,
    /// URL of the search result (empty when the provider gave none)
    #[serde(default)]
    pub url: String,
    /// Source provider (e.g., "bing", "duckduckgo")
    pub source: String,
}

/// Outcome of a successful provider call
///
/// An empty result set is a business outcome, not a failure, so it is kept
/// apart from [`SearchError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// One or more results, already capped at the effective count
    Found(Vec<SearchResult>),
    /// The provider answered but returned zero items
    Empty,
}

impl SearchOutcome {
    /// Build an outcome from raw provider results
    pub fn from_results(results: Vec<SearchResult>) -> Self {
        if results.is_empty() {
            SearchOutcome::Empty
        } else {
            SearchOutcome::Found(results)
        }
    }

    /// Number of results carried by this outcome
    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::Found(results) => results.len(),
            SearchOutcome::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchOutcome::Empty)
    }
}

/// Errors that can occur during a search tool call
#[derive(Debug, Error)]
pub enum SearchError {
    /// No credential configured for a provider that needs one
    #[error("{env_var} is not set; {provider} search requires an API key")]
    MissingCredential {
        /// Name of the provider missing its key
        provider: String,
        /// Environment variable the key is read from
        env_var: String,
    },

    /// DNS, connection or timeout failure before a response arrived
    #[error("{message}")]
    Transport {
        /// Underlying transport error message
        message: String,
    },

    /// Non-success HTTP status from the search provider
    #[error("Search API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// The provider answered with a payload we could not decode
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// Decoder error message
        message: String,
    },

    /// Search configuration could not be turned into a provider
    #[error("Invalid search configuration: {reason}")]
    InvalidConfig {
        /// What was wrong with the configuration
        reason: String,
    },

    /// Blocking mode could not set up its own runtime
    #[error("{message}")]
    Runtime {
        /// Reason the runtime was unavailable
        message: String,
    },
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SearchError::MalformedResponse {
                message: e.to_string(),
            }
        } else if let Some(status) = e.status() {
            SearchError::ApiError {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            SearchError::Transport {
                message: e.to_string(),
            }
        }
    }
}
