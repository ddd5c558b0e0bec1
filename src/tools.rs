// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Named tool functions for an agent layer
//!
//! Every tool takes JSON arguments and returns text. Nothing here returns
//! an error to the caller: unknown tools and bad arguments are reported as
//! `Error: ...` strings, the same way failed searches are.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::search::{SearchTool, ERROR_PREFIX};

/// A callable capability exposed to an agent
#[async_trait]
pub trait ToolFunction: Send + Sync {
    /// Name the agent uses to invoke the tool
    fn name(&self) -> &str;

    /// One-line description for the agent's tool manifest
    fn description(&self) -> &str;

    /// JSON schema of the arguments object
    fn parameters(&self) -> Value;

    /// Run the tool
    async fn invoke(&self, args: Value) -> String;
}

/// Manifest entry describing one tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Deserialize)]
struct WebSearchArgs {
    query: String,
    #[serde(default)]
    num_results: Option<usize>,
}

/// Web search exposed as a tool function
pub struct WebSearchTool {
    search: Arc<SearchTool>,
}

impl WebSearchTool {
    pub const NAME: &'static str = "web_search";

    pub fn new(search: Arc<SearchTool>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl ToolFunction for WebSearchTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Search the web and return a digest of the top results"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query"
                },
                "num_results": {
                    "type": "integer",
                    "minimum": 1,
                    "default": 1,
                    "description": "Number of results to return"
                }
            },
            "required": ["query"]
        })
    }

    async fn invoke(&self, args: Value) -> String {
        match serde_json::from_value::<WebSearchArgs>(args) {
            Ok(args) => self.search.call(&args.query, args.num_results).await,
            Err(e) => format!("{}invalid arguments: {}", ERROR_PREFIX, e),
        }
    }
}

/// Collection of tools addressable by name
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn ToolFunction>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Arc<dyn ToolFunction>) -> &mut Self {
        let name = tool.name().to_string();
        if self.tools.insert(name.clone(), tool).is_some() {
            warn!("Tool {} registered twice; keeping the latest", name);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolFunction>> {
        self.tools.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Manifest of all tools, sorted by name
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<_> = self
            .tools
            .values()
            .map(|t| ToolDefinition {
                name: t.name().to_string(),
                description: t.description().to_string(),
                parameters: t.parameters(),
            })
            .collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Invoke a tool by name
    pub async fn invoke(&self, name: &str, args: Value) -> String {
        match self.get(name) {
            Some(tool) => {
                debug!("Invoking tool {}", name);
                tool.invoke(args).await
            }
            None => format!("{}unknown tool '{}'", ERROR_PREFIX, name),
        }
    }
}
