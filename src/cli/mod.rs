// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod preprocess;
pub mod search;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Search tool bindings and dataset preprocessing
#[derive(Parser, Debug)]
#[command(name = "search-tools")]
#[command(version)]
#[command(about = "Web search tool functions and HotpotQA preprocessing", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one web search and print the tool text
    Search(search::SearchArgs),

    /// Print the tool manifest or invoke a tool by name
    Tools(search::ToolsArgs),

    /// Convert HotpotQA to train/test Parquet files
    PreprocessHotpotqa(preprocess::PreprocessArgs),
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search(args) => search::run_search(args).await,
        Commands::Tools(args) => search::run_tools(args).await,
        Commands::PreprocessHotpotqa(args) => preprocess::run_preprocess(args).await,
    }
}
