// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Dataset preprocessing for RL training prompts
//!
//! Converts QA datasets into Parquet files of prompt records and optionally
//! stages them on a remote filesystem.

pub mod errors;
pub mod hotpotqa;
pub mod parquet_io;
pub mod remote;

pub use errors::PreprocessError;
pub use hotpotqa::{
    build_record, preprocess, DatasetSource, ExtraInfo, Message, PreprocessOptions,
    PreprocessSummary, PromptRecord, RewardModel, SourceExample, Split,
};
