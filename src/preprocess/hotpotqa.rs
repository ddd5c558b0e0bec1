// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HotpotQA to Parquet conversion
//!
//! Reads the FlashRAG HotpotQA splits (`train`, `dev`) and writes
//! `train.parquet` and `test.parquet`. Each row becomes a prompt record
//! with a fixed system instruction, the question as the user turn and the
//! first golden answer as the rule-based reward target. The source columns
//! (`id`, `question`, `golden_answers`, `metadata`) are kept alongside.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::errors::PreprocessError;
use super::parquet_io::write_records;
use super::remote;

/// Tag stored in every record's `data_source`
pub const DATA_SOURCE: &str = "hotpotqa";

/// HuggingFace dataset repository holding the FlashRAG splits
pub const HF_DATASET_REPO: &str = "RUC-NLPIR/FlashRAG_datasets";

/// Instruction placed in the system turn of every prompt
pub const SYSTEM_PROMPT: &str = concat!(
    r"You FIRST think about the reasoning process as an internal monologue and then provide the final answer. ",
    r"During the reasoning process, you always generate search queries between <search>[INSERT QUERY]</search> to gather information.",
    r"The reasoning process MUST BE enclosed within <think> </think> tags. The final answer MUST BE put in \boxed{}."
);

/// Output split of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }

    /// File name of this split inside the FlashRAG dataset
    pub fn source_file(&self) -> &'static str {
        match self {
            Split::Train => "hotpotqa/train.jsonl",
            Split::Test => "hotpotqa/dev.jsonl",
        }
    }

    /// Parquet file name written for this split
    pub fn output_file(&self) -> String {
        format!("{}.parquet", self.as_str())
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the source dataset; unknown fields are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct SourceExample {
    #[serde(default)]
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub golden_answers: Vec<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardModel {
    pub style: String,
    pub ground_truth: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraInfo {
    pub split: String,
    pub index: i64,
}

/// Output record written to Parquet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub id: String,
    pub question: String,
    pub golden_answers: Vec<String>,
    /// Source `metadata` object, serialized as JSON text
    pub metadata: String,
    pub data_source: String,
    pub prompt: Vec<Message>,
    pub ability: String,
    pub reward_model: RewardModel,
    pub extra_info: ExtraInfo,
}

/// Map one source row to its prompt record
///
/// `index` is the zero-based position of the row within its split.
pub fn build_record(
    example: &SourceExample,
    split: Split,
    index: usize,
) -> Result<PromptRecord, PreprocessError> {
    let ground_truth = example
        .golden_answers
        .first()
        .cloned()
        .ok_or_else(|| PreprocessError::MissingAnswer {
            split: split.to_string(),
            index,
        })?;

    Ok(PromptRecord {
        id: example.id.clone(),
        question: example.question.clone(),
        golden_answers: example.golden_answers.clone(),
        metadata: example.metadata.to_string(),
        data_source: DATA_SOURCE.to_string(),
        prompt: vec![
            Message {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            Message {
                role: "user".to_string(),
                content: example.question.clone(),
            },
        ],
        ability: "math".to_string(),
        reward_model: RewardModel {
            style: "rule".to_string(),
            ground_truth,
        },
        extra_info: ExtraInfo {
            split: split.to_string(),
            index: index as i64,
        },
    })
}

/// Where the source splits come from
#[derive(Debug, Clone)]
pub enum DatasetSource {
    /// Download from the HuggingFace hub
    Hub { repo: String },
    /// Local directory laid out like the hub repo (`hotpotqa/*.jsonl`)
    Local(PathBuf),
}

impl Default for DatasetSource {
    fn default() -> Self {
        DatasetSource::Hub {
            repo: HF_DATASET_REPO.to_string(),
        }
    }
}

impl DatasetSource {
    /// Resolve a split to a local JSONL path, downloading if needed
    pub async fn resolve(&self, split: Split) -> Result<PathBuf, PreprocessError> {
        match self {
            DatasetSource::Local(dir) => Ok(dir.join(split.source_file())),
            DatasetSource::Hub { repo } => {
                let api = hf_hub::api::tokio::ApiBuilder::new()
                    .with_progress(false)
                    .build()
                    .map_err(|e| PreprocessError::Download(e.to_string()))?;
                debug!("Fetching {} from {}", split.source_file(), repo);
                api.dataset(repo.clone())
                    .get(split.source_file())
                    .await
                    .map_err(|e| {
                        PreprocessError::Download(format!("{}: {}", split.source_file(), e))
                    })
            }
        }
    }
}

/// Options for a preprocessing run
#[derive(Debug, Clone)]
pub struct PreprocessOptions {
    pub source: DatasetSource,
    pub local_dir: PathBuf,
    pub hdfs_dir: Option<String>,
}

/// Row counts and output paths of a finished run
#[derive(Debug, Clone)]
pub struct PreprocessSummary {
    pub train_rows: usize,
    pub test_rows: usize,
    pub train_path: PathBuf,
    pub test_path: PathBuf,
}

/// Read a JSONL split into source examples
pub fn read_split(path: &Path, split: Split) -> Result<Vec<SourceExample>, PreprocessError> {
    let file = File::open(path).map_err(|e| PreprocessError::io(path, e))?;
    let mut examples = Vec::new();

    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| PreprocessError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        let example =
            serde_json::from_str(&line).map_err(|e| PreprocessError::InvalidRecord {
                split: split.to_string(),
                line: i + 1,
                message: e.to_string(),
            })?;
        examples.push(example);
    }

    Ok(examples)
}

/// Convert every example of a split into records
pub fn convert_split(
    examples: &[SourceExample],
    split: Split,
) -> Result<Vec<PromptRecord>, PreprocessError> {
    examples
        .iter()
        .enumerate()
        .map(|(index, example)| build_record(example, split, index))
        .collect()
}

/// Run the full conversion
pub async fn preprocess(options: &PreprocessOptions) -> Result<PreprocessSummary, PreprocessError> {
    std::fs::create_dir_all(&options.local_dir)
        .map_err(|e| PreprocessError::io(&options.local_dir, e))?;

    let mut counts = [0usize; 2];
    let mut paths = [PathBuf::new(), PathBuf::new()];

    for (slot, split) in [Split::Train, Split::Test].into_iter().enumerate() {
        let source_path = options.source.resolve(split).await?;
        let examples = read_split(&source_path, split)?;
        let records = convert_split(&examples, split)?;

        let out_path = options.local_dir.join(split.output_file());
        write_records(&out_path, &records)?;
        info!("Wrote {} {} records to {}", records.len(), split, out_path.display());

        counts[slot] = records.len();
        paths[slot] = out_path;
    }

    if let Some(hdfs_dir) = &options.hdfs_dir {
        remote::makedirs(hdfs_dir).await?;
        remote::copy(&options.local_dir, hdfs_dir).await?;
        info!("Copied {} to {}", options.local_dir.display(), hdfs_dir);
    }

    let [train_path, test_path] = paths;
    Ok(PreprocessSummary {
        train_rows: counts[0],
        test_rows: counts[1],
        train_path,
        test_path,
    })
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    } else if path == "~" {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home);
        }
    }
    PathBuf::from(path)
}
