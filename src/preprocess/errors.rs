// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while converting a dataset
#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid record in {split} at line {line}: {message}")]
    InvalidRecord {
        split: String,
        line: usize,
        message: String,
    },

    #[error("Row {index} of {split} has no golden answers")]
    MissingAnswer { split: String, index: usize },

    #[error("Dataset download failed: {0}")]
    Download(String),

    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Remote copy failed: {0}")]
    RemoteCopy(String),
}

impl PreprocessError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PreprocessError::Io {
            path: path.into(),
            source,
        }
    }
}
