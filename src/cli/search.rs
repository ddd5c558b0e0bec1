// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Context, Result};
use clap::Args;
use std::sync::Arc;
use tracing::info;

use crate::search::{build_client, search_blocking, SearchConfig, SearchTool};
use crate::tools::{ToolRegistry, WebSearchTool};

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query
    pub query: String,

    /// Number of results (clamped to the provider maximum)
    #[arg(long, short = 'n')]
    pub num_results: Option<usize>,

    /// Provider to use (duckduckgo or bing); overrides SEARCH_PROVIDER
    #[arg(long)]
    pub provider: Option<String>,

    /// Use the blocking binding, which opens its own connection
    #[arg(long)]
    pub blocking: bool,
}

/// Arguments for the tools command
#[derive(Args, Debug)]
pub struct ToolsArgs {
    /// Name of the tool to invoke; prints the manifest when omitted
    #[arg(long)]
    pub invoke: Option<String>,

    /// JSON arguments for the invoked tool
    #[arg(long, default_value = "{}")]
    pub args: String,
}

fn load_config(provider: Option<String>) -> Result<SearchConfig> {
    dotenv::dotenv().ok();

    let mut config = SearchConfig::from_env();
    if let Some(provider) = provider {
        config.provider = provider;
    }
    config.validate().map_err(|e| anyhow!(e))?;
    Ok(config)
}

/// Run one search and print the tool text
pub async fn run_search(args: SearchArgs) -> Result<()> {
    let config = load_config(args.provider)?;
    info!("Searching with provider {}", config.provider);

    let text = if args.blocking {
        let query = args.query.clone();
        let num_results = args.num_results;
        std::thread::spawn(move || search_blocking(&config, &query, num_results))
            .join()
            .map_err(|_| anyhow!("blocking search thread panicked"))?
    } else {
        let tool = SearchTool::from_config(&config, build_client(&config)?)?;
        tool.call(&args.query, args.num_results).await
    };

    println!("{}", text);
    Ok(())
}

/// Print the tool manifest, or invoke one tool
pub async fn run_tools(args: ToolsArgs) -> Result<()> {
    let config = load_config(None)?;
    let search = SearchTool::from_config(&config, build_client(&config)?)?;

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(WebSearchTool::new(Arc::new(search))));

    match args.invoke {
        Some(name) => {
            let tool_args =
                serde_json::from_str(&args.args).context("--args must be a JSON object")?;
            println!("{}", registry.invoke(&name, tool_args).await);
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&registry.definitions())?);
        }
    }
    Ok(())
}
