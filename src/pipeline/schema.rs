//! Examination schema validation
//!
//! The pipeline requires a fixed set of numeric columns; anything else
//! in the dataset (id, age, gender, ...) is carried through untouched
//! and participates in the correlation matrix.

use polars::prelude::*;

use super::error::AnalysisError;

/// Columns every examination record must provide.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    "height",
    "weight",
    "cholesterol",
    "gluc",
    "smoke",
    "alco",
    "active",
    "cardio",
    "ap_hi",
    "ap_lo",
];

/// Verify that all required columns are present and numeric.
///
/// # Errors
/// `MissingColumn` if a required column is absent, `NonNumericColumn`
/// if one cannot be treated as numeric.
pub fn validate_schema(df: &DataFrame) -> Result<(), AnalysisError> {
    for name in REQUIRED_COLUMNS {
        let column = df
            .column(name)
            .map_err(|_| AnalysisError::MissingColumn(name.to_string()))?;

        if !column.dtype().is_primitive_numeric() {
            return Err(AnalysisError::NonNumericColumn {
                column: name.to_string(),
                dtype: column.dtype().to_string(),
            });
        }
    }
    Ok(())
}
