// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search provider trait definition

use async_trait::async_trait;

use super::digest::DigestStyle;
use super::types::{SearchError, SearchResult};

/// Trait for implementing search providers
///
/// Each provider performs exactly one outbound request per call. Providers
/// hold their credential and HTTP client; nothing is read from the
/// environment at call time.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Perform a web search
    ///
    /// # Arguments
    /// * `query` - The search query string, passed through unvalidated
    /// * `num_results` - Requested number of results, already clamped by the caller
    ///
    /// # Returns
    /// At most `num_results` results, or an error
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError>;

    /// Get the provider name for logging
    fn name(&self) -> &'static str;

    /// Upper bound on results a single request can return
    fn max_results(&self) -> usize;

    /// Check if the provider is usable (has API key, etc.)
    fn is_available(&self) -> bool;

    /// Template used when results are rendered into a digest
    fn digest_style(&self) -> DigestStyle {
        DigestStyle::Plain
    }
}

/// Clamp a requested result count to `[1, max]`
pub fn effective_count(requested: usize, max: usize) -> usize {
    requested.clamp(1, max.max(1))
}
