//! Analysis export functionality

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{CategoricalCount, CorrelationMatrix};

/// Metadata about the analysis run
#[derive(Serialize)]
pub struct AnalysisMetadata {
    /// Timestamp of the analysis (ISO 8601 format)
    pub timestamp: String,
    /// Cardioviz version
    pub cardioviz_version: String,
    /// Input file path
    pub input_file: String,
    /// Records in the loaded dataset
    pub rows_loaded: usize,
    /// Records retained by the outlier filter
    pub rows_retained: usize,
    /// Lower percentile bound used for filtering
    pub lower_quantile: f64,
    /// Upper percentile bound used for filtering
    pub upper_quantile: f64,
}

/// Correlation matrix with its rendering mask
#[derive(Serialize)]
pub struct HeatmapExport<'a> {
    pub columns: &'a [String],
    pub matrix: &'a [Vec<f64>],
    pub mask: &'a [Vec<bool>],
}

/// Complete analysis export with metadata
#[derive(Serialize)]
pub struct AnalysisExport<'a> {
    pub metadata: AnalysisMetadata,
    pub categorical: &'a [CategoricalCount],
    pub heatmap: HeatmapExport<'a>,
}

/// Parameters for analysis export metadata
pub struct ExportParams<'a> {
    pub input_file: &'a str,
    pub rows_loaded: usize,
    pub rows_retained: usize,
    pub lower_quantile: f64,
    pub upper_quantile: f64,
}

/// Export the full analysis to a JSON file.
///
/// NaN matrix cells (zero-variance columns) serialize as JSON null.
pub fn export_analysis(
    categorical: &[CategoricalCount],
    corr: &CorrelationMatrix,
    mask: &[Vec<bool>],
    output_path: &Path,
    params: &ExportParams,
) -> Result<()> {
    let export = AnalysisExport {
        metadata: AnalysisMetadata {
            timestamp: Utc::now().to_rfc3339(),
            cardioviz_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            rows_loaded: params.rows_loaded,
            rows_retained: params.rows_retained,
            lower_quantile: params.lower_quantile,
            upper_quantile: params.upper_quantile,
        },
        categorical,
        heatmap: HeatmapExport {
            columns: &corr.columns,
            matrix: &corr.values,
            mask,
        },
    };

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize analysis to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write analysis to {}", output_path.display()))?;

    Ok(())
}
