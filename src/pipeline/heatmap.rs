//! Outlier filtering and masked correlation matrix
//!
//! Cleans physiologically invalid and outlier rows, then computes the
//! Pearson correlation matrix over all numeric columns of the retained
//! subset together with an upper-triangle mask for rendering.

use faer::Mat;
use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

use super::column::float_values;
use super::error::AnalysisError;
use super::features::DerivedFrame;

/// Default lower percentile bound for height/weight filtering (2.5%).
pub const DEFAULT_LOWER_QUANTILE: f64 = 0.025;

/// Default upper percentile bound for height/weight filtering (97.5%).
pub const DEFAULT_UPPER_QUANTILE: f64 = 0.975;

/// Inclusive height and weight bounds, computed once over the
/// unfiltered dataset.
///
/// Both bounds come from the same pass: recomputing quantiles after
/// dropping rows would shift them and change which rows survive.
#[derive(Debug, Clone, Copy)]
pub struct QuantileBounds {
    pub height_min: f64,
    pub height_max: f64,
    pub weight_min: f64,
    pub weight_max: f64,
}

impl QuantileBounds {
    /// Whether a record's measurements fall within both bounds.
    pub fn retain(&self, height: f64, weight: f64) -> bool {
        height >= self.height_min
            && height <= self.height_max
            && weight >= self.weight_min
            && weight <= self.weight_max
    }
}

/// Square Pearson correlation matrix over named numeric columns.
///
/// Symmetric, with the diagonal forced to exactly 1.0 for every column
/// with positive variance. Zero-variance columns stay in the matrix
/// but yield NaN cells, matching what the correlation coefficient
/// actually is for a constant series.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Matrix dimension (number of numeric columns).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Cell value by row/column index.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }
}

/// Compute height and weight percentile bounds over the unfiltered
/// dataset using linear interpolation.
pub fn compute_bounds(
    df: &DataFrame,
    lower: f64,
    upper: f64,
) -> Result<QuantileBounds, AnalysisError> {
    if !(lower > 0.0 && lower < upper && upper < 1.0) {
        return Err(AnalysisError::InvalidQuantile { lower, upper });
    }

    let (height_min, height_max) = quantile_pair(df, "height", lower, upper)?;
    let (weight_min, weight_max) = quantile_pair(df, "weight", lower, upper)?;

    Ok(QuantileBounds {
        height_min,
        height_max,
        weight_min,
        weight_max,
    })
}

fn quantile_pair(
    df: &DataFrame,
    name: &str,
    lower: f64,
    upper: f64,
) -> Result<(f64, f64), AnalysisError> {
    let column = df
        .column(name)
        .map_err(|_| AnalysisError::MissingColumn(name.to_string()))?;
    let cast = column.cast(&DataType::Float64)?;
    let ca = cast.f64()?;

    let lo = ca
        .quantile(lower, QuantileMethod::Linear)?
        .ok_or(AnalysisError::EmptyDataset)?;
    let hi = ca
        .quantile(upper, QuantileMethod::Linear)?
        .ok_or(AnalysisError::EmptyDataset)?;
    Ok((lo, hi))
}

/// Remove statistically invalid and outlier rows.
///
/// A row is retained iff `ap_lo <= ap_hi` and both height and weight
/// fall within the inclusive percentile bounds. Bounds are computed
/// once over the full dataset, then applied as a single combined
/// predicate; the input frame is untouched and a filtered copy is
/// returned.
pub fn clean_dataset(
    derived: &DerivedFrame,
    lower: f64,
    upper: f64,
) -> Result<DataFrame, AnalysisError> {
    let df = derived.data();
    let bounds = compute_bounds(df, lower, upper)?;

    let ap_hi = float_values(df, "ap_hi")?;
    let ap_lo = float_values(df, "ap_lo")?;
    let heights = float_values(df, "height")?;
    let weights = float_values(df, "weight")?;

    let keep: Vec<bool> = (0..df.height())
        .map(|i| ap_lo[i] <= ap_hi[i] && bounds.retain(heights[i], weights[i]))
        .collect();
    let mask = BooleanChunked::from_slice("keep".into(), &keep);

    Ok(df.filter(&mask)?)
}

/// Compute the Pearson correlation matrix over all numeric columns.
///
/// Each column is standardized to (x - mean) / (std * sqrt(n)), so the
/// matrix is a single `ZᵀZ` product. The upper triangle is computed and
/// mirrored, making the result exactly symmetric.
///
/// # Errors
/// `EmptyDataset` if the frame has no rows; `NullValue` if a numeric
/// column contains nulls.
pub fn correlation_matrix(df: &DataFrame) -> Result<CorrelationMatrix, AnalysisError> {
    let n_rows = df.height();
    if n_rows == 0 {
        return Err(AnalysisError::EmptyDataset);
    }

    let columns: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|col| col.dtype().is_primitive_numeric())
        .map(|col| col.name().to_string())
        .collect();

    let mut raw = Vec::with_capacity(columns.len());
    for name in &columns {
        raw.push(float_values(df, name)?);
    }

    // Standardize per column; zero-variance columns have no defined
    // correlation and are flagged rather than dropped.
    let n = n_rows as f64;
    let standardized: Vec<Option<Vec<f64>>> = raw
        .par_iter()
        .map(|values| {
            let mean = values.iter().sum::<f64>() / n;
            let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
            let std = variance.sqrt();
            if std == 0.0 {
                return None;
            }
            let scale = std * n.sqrt();
            Some(values.iter().map(|x| (x - mean) / scale).collect())
        })
        .collect();

    let n_cols = columns.len();
    let mut z = Mat::<f64>::zeros(n_rows, n_cols);
    for (col_idx, col_data) in standardized.iter().enumerate() {
        if let Some(col_data) = col_data {
            for (row_idx, &val) in col_data.iter().enumerate() {
                z[(row_idx, col_idx)] = val;
            }
        }
    }
    let product = z.transpose() * &z;

    let mut values = vec![vec![f64::NAN; n_cols]; n_cols];
    for i in 0..n_cols {
        if standardized[i].is_none() {
            continue;
        }
        values[i][i] = 1.0;
        for j in (i + 1)..n_cols {
            if standardized[j].is_none() {
                continue;
            }
            let corr = product[(i, j)];
            values[i][j] = corr;
            values[j][i] = corr;
        }
    }

    Ok(CorrelationMatrix { columns, values })
}

/// Build the rendering mask: `true` (suppressed) on and above the main
/// diagonal, `false` (shown) below it. Exactly n(n+1)/2 cells are true.
pub fn upper_triangle_mask(n: usize) -> Vec<Vec<bool>> {
    (0..n).map(|row| (0..n).map(|col| col >= row).collect()).collect()
}

/// Filter outlier rows, then compute the correlation matrix and its
/// rendering mask in one call.
///
/// # Errors
/// `EmptyDataset` if every row is excluded by the filter.
pub fn filter_and_correlate(
    derived: &DerivedFrame,
    lower: f64,
    upper: f64,
) -> Result<(CorrelationMatrix, Vec<Vec<bool>>), AnalysisError> {
    let cleaned = clean_dataset(derived, lower, upper)?;
    if cleaned.height() == 0 {
        return Err(AnalysisError::EmptyDataset);
    }

    let corr = correlation_matrix(&cleaned)?;
    let mask = upper_triangle_mask(corr.len());
    Ok((corr, mask))
}
