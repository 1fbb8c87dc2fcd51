//! Dataset loader for CSV and Parquet files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::utils::progress::{create_spinner, finish_with_success};

/// Scan a dataset lazily based on file extension.
fn scan_file(path: &Path, infer_schema_length: usize) -> Result<LazyFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let lf = match extension.as_str() {
        "csv" => {
            // 0 means full table scan for type inference
            let infer = if infer_schema_length == 0 {
                None
            } else {
                Some(infer_schema_length)
            };
            LazyCsvReader::new(path)
                .with_infer_schema_length(infer)
                .finish()
                .with_context(|| format!("Failed to load CSV file: {}", path.display()))?
        }
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => anyhow::bail!(
            "Unsupported file format: {}. Supported formats: csv, parquet",
            extension
        ),
    };

    Ok(lf)
}

/// Load a dataset into memory with a spinner, returning the frame
/// along with row count, column count, and estimated memory in MB.
pub fn load_dataset_with_progress(
    path: &Path,
    infer_schema_length: usize,
) -> Result<(DataFrame, usize, usize, f64)> {
    let lf = scan_file(path, infer_schema_length)?;

    let spinner = create_spinner(&format!("Loading {}...", path.display()));
    let df = lf
        .collect()
        .with_context(|| format!("Failed to load dataset: {}", path.display()))?;

    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    finish_with_success(&spinner, &format!("Loaded {} rows × {} columns", rows, cols));

    Ok((df, rows, cols, memory_mb))
}

/// Read only the column names from a dataset file.
pub fn get_column_names(path: &Path) -> Result<Vec<String>> {
    let mut lf = scan_file(path, 100)?;
    let schema = lf
        .collect_schema()
        .with_context(|| format!("Failed to read dataset schema: {}", path.display()))?;
    Ok(schema.iter_names().map(|name| name.to_string()).collect())
}
