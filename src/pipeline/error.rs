//! Error types for the analysis pipeline.
//!
//! Every failure is fatal for the current invocation: no component
//! retries, substitutes defaults, or emits partial results.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised by the feature derivation, aggregation, and
/// correlation components.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A column required by the examination schema is absent.
    #[error("Required column '{0}' not found in dataset")]
    MissingColumn(String),

    /// A required column exists but cannot be treated as numeric.
    #[error("Column '{column}' must be numeric, found {dtype}")]
    NonNumericColumn { column: String, dtype: String },

    /// A required column contains a null value.
    ///
    /// The derivation and aggregation contracts are total over rows, so
    /// a null cannot be skipped without corrupting downstream counts.
    #[error("Column '{column}' contains a null value at row {row}")]
    NullValue { column: String, row: usize },

    /// Height or weight is zero or negative, making BMI undefined.
    #[error("Column '{column}' contains non-positive value {value} at row {row}: BMI is undefined")]
    NonPositiveMeasurement {
        column: String,
        row: usize,
        value: f64,
    },

    /// Quantile bounds outside the open unit interval, or inverted.
    #[error("Quantile bounds must satisfy 0 < lower < upper < 1, got lower={lower}, upper={upper}")]
    InvalidQuantile { lower: f64, upper: f64 },

    /// All rows were excluded by the outlier filter.
    #[error("No rows remain after outlier filtering: correlation is undefined")]
    EmptyDataset,

    /// Underlying polars engine failure.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
