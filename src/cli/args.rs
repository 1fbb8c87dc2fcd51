//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// Cardioviz - Risk-factor prevalence and masked correlation matrices
/// from medical-examination datasets
#[derive(Parser, Debug)]
#[command(name = "cardioviz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet), one row per examined individual
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output path for the JSON analysis report.
    /// Defaults to the input directory with an '_analysis.json' suffix
    /// (e.g., exam.csv → exam_analysis.json).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Lower percentile bound for height/weight outlier filtering
    #[arg(long, default_value = "0.025", value_parser = validate_quantile)]
    pub lower_quantile: f64,

    /// Upper percentile bound for height/weight outlier filtering
    #[arg(long, default_value = "0.975", value_parser = validate_quantile)]
    pub upper_quantile: f64,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Skip writing the JSON analysis report
    #[arg(long, default_value = "false")]
    pub no_export: bool,
}

impl Cli {
    /// Get the export path, deriving from the input if not explicitly
    /// provided. The derived path lives in the input directory with an
    /// '_analysis.json' suffix.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let parent = self
                .input
                .parent()
                .unwrap_or_else(|| std::path::Path::new("."));
            let stem = self
                .input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("output");
            parent.join(format!("{}_analysis.json", stem))
        })
    }
}

/// Validator for quantile parameters
fn validate_quantile(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !(value > 0.0 && value < 1.0) {
        Err(format!(
            "quantile must be strictly between 0.0 and 1.0, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}
