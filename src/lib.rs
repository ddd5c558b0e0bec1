// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod cli;
pub mod preprocess;
pub mod search;
pub mod tools;

// Re-export main types
pub use preprocess::{PreprocessError, PreprocessOptions, PromptRecord};
pub use search::{
    search_blocking, SearchConfig, SearchError, SearchOutcome, SearchProvider, SearchResult,
    SearchTool,
};
pub use tools::{ToolDefinition, ToolFunction, ToolRegistry, WebSearchTool};
