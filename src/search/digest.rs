// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Rendering of search outcomes into tool text
//!
//! This is the only place where typed results become the text contract
//! seen by agent callers. Callers may string-match on [`NO_RESULTS`] and
//! [`ERROR_PREFIX`], so both are fixed.

use super::types::{SearchError, SearchOutcome, SearchResult};

/// Text returned when the provider answered with zero items
pub const NO_RESULTS: &str = "No results found";

/// Prefix of every error response
pub const ERROR_PREFIX: &str = "Error: ";

/// Separator placed between rendered entries
const ENTRY_SEPARATOR: &str = "\n\n";

/// Per-provider entry template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestStyle {
    /// `# {title}\n\n{snippet}`
    Plain,
    /// `# {title}\n\n {snippet}` (body indented by one space)
    Padded,
}

impl DigestStyle {
    fn render_entry(self, result: &SearchResult) -> String {
        match self {
            DigestStyle::Plain => format!("# {}\n\n{}", result.title, result.snippet),
            DigestStyle::Padded => format!("# {}\n\n {}", result.title, result.snippet),
        }
    }
}

/// Render a successful outcome
pub fn render_outcome(outcome: &SearchOutcome, style: DigestStyle) -> String {
    match outcome {
        SearchOutcome::Empty => NO_RESULTS.to_string(),
        SearchOutcome::Found(results) => results
            .iter()
            .map(|r| style.render_entry(r))
            .collect::<Vec<_>>()
            .join(ENTRY_SEPARATOR),
    }
}

/// Render a failure as `Error: {message}`
pub fn render_error(error: &SearchError) -> String {
    format!("{}{}", ERROR_PREFIX, error)
}

/// Render either side of a search call
pub fn render(result: &Result<SearchOutcome, SearchError>, style: DigestStyle) -> String {
    match result {
        Ok(outcome) => render_outcome(outcome, style),
        Err(e) => render_error(e),
    }
}
