// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Staging of output files to a remote or mounted filesystem
//!
//! `hdfs://` destinations go through the `hdfs dfs` command line client.
//! Anything else is treated as a local path.

use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

use super::errors::PreprocessError;

const HDFS_SCHEME: &str = "hdfs://";

pub fn is_hdfs_path(path: &str) -> bool {
    path.starts_with(HDFS_SCHEME)
}

/// Create `dst` and any missing parents
pub async fn makedirs(dst: &str) -> Result<(), PreprocessError> {
    if is_hdfs_path(dst) {
        run_hdfs(&["dfs", "-mkdir", "-p", dst]).await
    } else {
        tokio::fs::create_dir_all(dst)
            .await
            .map_err(|e| PreprocessError::io(dst, e))
    }
}

/// Copy every file directly under `src` into `dst`
pub async fn copy(src: &Path, dst: &str) -> Result<(), PreprocessError> {
    for file in list_files(src).await? {
        if is_hdfs_path(dst) {
            let file = file.to_string_lossy().into_owned();
            run_hdfs(&["dfs", "-put", "-f", &file, dst]).await?;
        } else {
            let name = file.file_name().ok_or_else(|| {
                PreprocessError::RemoteCopy(format!("{} has no file name", file.display()))
            })?;
            let target = Path::new(dst).join(name);
            tokio::fs::copy(&file, &target)
                .await
                .map_err(|e| PreprocessError::io(&target, e))?;
        }
        debug!("Staged {} to {}", file.display(), dst);
    }
    Ok(())
}

async fn list_files(dir: &Path) -> Result<Vec<PathBuf>, PreprocessError> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| PreprocessError::io(dir, e))?;
    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| PreprocessError::io(dir, e))?
    {
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

async fn run_hdfs(args: &[&str]) -> Result<(), PreprocessError> {
    let output = Command::new("hdfs")
        .args(args)
        .output()
        .await
        .map_err(|e| PreprocessError::RemoteCopy(format!("failed to run hdfs: {}", e)))?;

    if !output.status.success() {
        return Err(PreprocessError::RemoteCopy(format!(
            "hdfs {} exited with {}: {}",
            args.join(" "),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(())
}
