// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use search_tools::preprocess::hotpotqa::{preprocess, DatasetSource, PreprocessOptions, SYSTEM_PROMPT};
use search_tools::preprocess::parquet_io::read_records;
use search_tools::preprocess::PreprocessError;
use serde_json::json;
use std::fs;
use std::path::Path;

fn write_split(root: &Path, file: &str, rows: &[serde_json::Value]) {
    let dir = root.join("hotpotqa");
    fs::create_dir_all(&dir).unwrap();
    let body: Vec<String> = rows.iter().map(|r| r.to_string()).collect();
    fs::write(dir.join(file), body.join("\n") + "\n").unwrap();
}

fn sample_rows(prefix: &str, n: usize) -> Vec<serde_json::Value> {
    (0..n)
        .map(|i| {
            json!({
                "id": format!("{}-{}", prefix, i),
                "question": format!("{} question {}?", prefix, i),
                "golden_answers": [format!("{} answer {}", prefix, i), "alias"],
                "metadata": {"type": "bridge"}
            })
        })
        .collect()
}

#[tokio::test]
async fn test_preprocess_local_source() {
    let source = tempfile::tempdir().unwrap();
    let train_rows = sample_rows("train", 3);
    let dev_rows = sample_rows("dev", 2);
    write_split(source.path(), "train.jsonl", &train_rows);
    write_split(source.path(), "dev.jsonl", &dev_rows);

    let out = tempfile::tempdir().unwrap();
    let options = PreprocessOptions {
        source: DatasetSource::Local(source.path().to_path_buf()),
        local_dir: out.path().join("hotpotqa"),
        hdfs_dir: None,
    };

    let summary = preprocess(&options).await.unwrap();
    assert_eq!(summary.train_rows, 3);
    assert_eq!(summary.test_rows, 2);

    let train = read_records(&summary.train_path).unwrap();
    for (i, (record, row)) in train.iter().zip(&train_rows).enumerate() {
        assert_eq!(record.data_source, "hotpotqa");
        assert_eq!(record.ability, "math");
        assert_eq!(record.prompt[0].content, SYSTEM_PROMPT);
        assert_eq!(record.prompt[1].content, row["question"].as_str().unwrap());
        assert_eq!(
            record.reward_model.ground_truth,
            row["golden_answers"][0].as_str().unwrap()
        );
        assert_eq!(record.extra_info.split, "train");
        assert_eq!(record.extra_info.index, i as i64);

        assert_eq!(record.id, row["id"].as_str().unwrap());
        assert_eq!(record.question, row["question"].as_str().unwrap());
        assert_eq!(
            record.golden_answers,
            vec![format!("train answer {}", i), "alias".to_string()]
        );
        let metadata: serde_json::Value = serde_json::from_str(&record.metadata).unwrap();
        assert_eq!(metadata, row["metadata"]);
    }

    let test = read_records(&summary.test_path).unwrap();
    assert_eq!(test.len(), 2);
    assert_eq!(test[1].extra_info.split, "test");
    assert_eq!(test[1].extra_info.index, 1);
    assert_eq!(test[1].reward_model.ground_truth, "dev answer 1");
}

#[tokio::test]
async fn test_preprocess_copies_to_remote_dir() {
    let source = tempfile::tempdir().unwrap();
    write_split(source.path(), "train.jsonl", &sample_rows("train", 1));
    write_split(source.path(), "dev.jsonl", &sample_rows("dev", 1));

    let out = tempfile::tempdir().unwrap();
    let staged = out.path().join("remote/hotpotqa");
    let options = PreprocessOptions {
        source: DatasetSource::Local(source.path().to_path_buf()),
        local_dir: out.path().join("local"),
        hdfs_dir: Some(staged.to_string_lossy().into_owned()),
    };

    preprocess(&options).await.unwrap();
    assert!(staged.join("train.parquet").exists());
    assert!(staged.join("test.parquet").exists());
    assert_eq!(read_records(&staged.join("test.parquet")).unwrap().len(), 1);
}

#[tokio::test]
async fn test_preprocess_rejects_row_without_answers() {
    let source = tempfile::tempdir().unwrap();
    write_split(
        source.path(),
        "train.jsonl",
        &[json!({"question": "q?", "golden_answers": []})],
    );
    write_split(source.path(), "dev.jsonl", &sample_rows("dev", 1));

    let out = tempfile::tempdir().unwrap();
    let options = PreprocessOptions {
        source: DatasetSource::Local(source.path().to_path_buf()),
        local_dir: out.path().to_path_buf(),
        hdfs_dir: None,
    };

    let err = preprocess(&options).await.unwrap_err();
    assert!(matches!(err, PreprocessError::MissingAnswer { index: 0, .. }));
}

#[tokio::test]
async fn test_preprocess_reports_bad_line() {
    let source = tempfile::tempdir().unwrap();
    let dir = source.path().join("hotpotqa");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("train.jsonl"),
        "{\"question\": \"ok\", \"golden_answers\": [\"a\"]}\nnot json\n",
    )
    .unwrap();

    let out = tempfile::tempdir().unwrap();
    let options = PreprocessOptions {
        source: DatasetSource::Local(source.path().to_path_buf()),
        local_dir: out.path().to_path_buf(),
        hdfs_dir: None,
    };

    let err = preprocess(&options).await.unwrap_err();
    assert!(matches!(err, PreprocessError::InvalidRecord { line: 2, .. }));
}
