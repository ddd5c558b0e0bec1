// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Web search tool bindings
//!
//! Exposes web search to an agent layer as a single tool call:
//! `(query, num_results) -> text`.
//!
//! Key features:
//! - Two providers (DuckDuckGo, Bing) behind one [`provider::SearchProvider`] trait
//! - Provider and credential chosen by [`SearchConfig`], not by call site
//! - Typed outcomes internally, rendered to text only at the tool boundary
//! - Async mode over a shared client, blocking mode with scoped resources

pub mod bing;
pub mod config;
pub mod digest;
pub mod duckduckgo;
pub mod provider;
pub mod tool;
pub mod types;

// Re-export commonly used types
pub use config::{ProviderKind, SearchConfig};
pub use digest::{DigestStyle, ERROR_PREFIX, NO_RESULTS};
pub use provider::SearchProvider;
pub use tool::{build_client, search_blocking, SearchTool};
pub use types::{SearchError, SearchOutcome, SearchResult};
