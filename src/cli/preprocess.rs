// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::preprocess::hotpotqa::{expand_home, preprocess, DatasetSource, PreprocessOptions};

/// Arguments for preprocess-hotpotqa command
#[derive(Args, Debug)]
pub struct PreprocessArgs {
    /// Directory receiving train.parquet and test.parquet
    #[arg(long, default_value = "~/data/hotpotqa")]
    pub local_dir: String,

    /// Optional destination the output directory is copied to (hdfs:// or a path)
    #[arg(long)]
    pub hdfs_dir: Option<String>,

    /// Read hotpotqa/train.jsonl and hotpotqa/dev.jsonl from here instead of the hub
    #[arg(long)]
    pub source_dir: Option<PathBuf>,
}

/// Convert the dataset and report row counts
pub async fn run_preprocess(args: PreprocessArgs) -> Result<()> {
    dotenv::dotenv().ok();

    let options = PreprocessOptions {
        source: args
            .source_dir
            .map(DatasetSource::Local)
            .unwrap_or_default(),
        local_dir: expand_home(&args.local_dir),
        hdfs_dir: args.hdfs_dir,
    };

    let summary = preprocess(&options).await?;
    println!(
        "train: {} rows -> {}",
        summary.train_rows,
        summary.train_path.display()
    );
    println!(
        "test:  {} rows -> {}",
        summary.test_rows,
        summary.test_path.display()
    );
    Ok(())
}
