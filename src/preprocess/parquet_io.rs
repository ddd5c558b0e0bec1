// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Parquet encoding of prompt records
//!
//! Records are serialized through `arrow::json` into a fixed nested schema
//! and written with Snappy compression.

use arrow::datatypes::{DataType, Field, Fields, Schema, SchemaRef};
use arrow::json::{ArrayWriter, ReaderBuilder};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use super::errors::PreprocessError;
use super::hotpotqa::PromptRecord;

/// Rows encoded per record batch
const BATCH_SIZE: usize = 4096;

/// Arrow schema of a [`PromptRecord`]
pub fn prompt_schema() -> SchemaRef {
    let message = DataType::Struct(Fields::from(vec![
        Field::new("role", DataType::Utf8, false),
        Field::new("content", DataType::Utf8, false),
    ]));
    let reward_model = DataType::Struct(Fields::from(vec![
        Field::new("style", DataType::Utf8, false),
        Field::new("ground_truth", DataType::Utf8, false),
    ]));
    let extra_info = DataType::Struct(Fields::from(vec![
        Field::new("split", DataType::Utf8, false),
        Field::new("index", DataType::Int64, false),
    ]));

    Arc::new(Schema::new(vec![
        Field::new("id", DataType::Utf8, false),
        Field::new("question", DataType::Utf8, false),
        Field::new(
            "golden_answers",
            DataType::List(Arc::new(Field::new("item", DataType::Utf8, true))),
            false,
        ),
        Field::new("metadata", DataType::Utf8, false),
        Field::new("data_source", DataType::Utf8, false),
        Field::new(
            "prompt",
            DataType::List(Arc::new(Field::new("item", message, true))),
            false,
        ),
        Field::new("ability", DataType::Utf8, false),
        Field::new("reward_model", reward_model, false),
        Field::new("extra_info", extra_info, false),
    ]))
}

/// Write records to a Parquet file, replacing any existing file
pub fn write_records(path: &Path, records: &[PromptRecord]) -> Result<(), PreprocessError> {
    let schema = prompt_schema();
    let file = File::create(path).map_err(|e| PreprocessError::io(path, e))?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();

    let mut writer = ArrowWriter::try_new(file, schema.clone(), Some(props))?;
    let mut decoder = ReaderBuilder::new(schema)
        .with_batch_size(BATCH_SIZE)
        .build_decoder()?;

    for chunk in records.chunks(BATCH_SIZE) {
        decoder.serialize(chunk)?;
        if let Some(batch) = decoder.flush()? {
            writer.write(&batch)?;
        }
    }

    writer.close()?;
    Ok(())
}

/// Read records back from a Parquet file written by [`write_records`]
pub fn read_records(path: &Path) -> Result<Vec<PromptRecord>, PreprocessError> {
    let file = File::open(path).map_err(|e| PreprocessError::io(path, e))?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    let mut json = ArrayWriter::new(Vec::new());
    for batch in reader {
        json.write(&batch?)?;
    }
    json.finish()?;
    let bytes = json.into_inner();
    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_slice(&bytes).map_err(|e| PreprocessError::InvalidRecord {
        split: path.display().to_string(),
        line: e.line(),
        message: e.to_string(),
    })
}
