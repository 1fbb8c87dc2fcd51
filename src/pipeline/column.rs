//! Typed column extraction helpers
//!
//! Core components operate on plain vectors extracted from the
//! DataFrame; nulls in required columns are reported with their row
//! index rather than silently skipped.

use polars::prelude::*;

use super::error::AnalysisError;

/// Extract a column as `Vec<f64>`, casting from any numeric dtype.
pub(crate) fn float_values(df: &DataFrame, name: &str) -> Result<Vec<f64>, AnalysisError> {
    let column = df
        .column(name)
        .map_err(|_| AnalysisError::MissingColumn(name.to_string()))?;

    if !column.dtype().is_primitive_numeric() {
        return Err(AnalysisError::NonNumericColumn {
            column: name.to_string(),
            dtype: column.dtype().to_string(),
        });
    }
    let cast = column.cast(&DataType::Float64)?;
    let ca = cast.f64()?;

    let mut values = Vec::with_capacity(ca.len());
    for (row, opt_val) in ca.iter().enumerate() {
        match opt_val {
            Some(v) => values.push(v),
            None => {
                return Err(AnalysisError::NullValue {
                    column: name.to_string(),
                    row,
                })
            }
        }
    }
    Ok(values)
}

/// Extract a column as `Vec<i64>`, casting from any integer dtype.
pub(crate) fn int_values(df: &DataFrame, name: &str) -> Result<Vec<i64>, AnalysisError> {
    let column = df
        .column(name)
        .map_err(|_| AnalysisError::MissingColumn(name.to_string()))?;

    if !column.dtype().is_primitive_numeric() {
        return Err(AnalysisError::NonNumericColumn {
            column: name.to_string(),
            dtype: column.dtype().to_string(),
        });
    }
    let cast = column.cast(&DataType::Int64)?;
    let ca = cast.i64()?;

    let mut values = Vec::with_capacity(ca.len());
    for (row, opt_val) in ca.iter().enumerate() {
        match opt_val {
            Some(v) => values.push(v),
            None => {
                return Err(AnalysisError::NullValue {
                    column: name.to_string(),
                    row,
                })
            }
        }
    }
    Ok(values)
}
