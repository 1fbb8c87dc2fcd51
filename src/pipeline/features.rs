//! Derived feature computation
//!
//! Adds the binary `overweight` indicator and normalizes the ordinal
//! `cholesterol`/`gluc` columns so that 0 is "normal" and 1 is "above
//! normal". The normalization is destructive (1→0, anything else→1),
//! so applying it twice would flip values: `derive_features` consumes
//! the raw DataFrame and returns a [`DerivedFrame`] wrapper, and both
//! downstream components only accept `&DerivedFrame`.

use polars::prelude::*;

use super::column::{float_values, int_values};
use super::error::AnalysisError;
use super::schema::validate_schema;

/// BMI above this value marks a record as overweight.
pub const BMI_OVERWEIGHT_THRESHOLD: f64 = 25.0;

/// Ordinal columns remapped in place to binary form (1→0, else→1).
pub const NORMALIZED_ORDINALS: [&str; 2] = ["cholesterol", "gluc"];

/// A dataset that has passed feature derivation exactly once.
///
/// The wrapper is the only way to obtain input for the aggregation and
/// correlation components, which rules out double-normalization.
#[derive(Debug, Clone)]
pub struct DerivedFrame {
    df: DataFrame,
}

impl DerivedFrame {
    /// Borrow the underlying DataFrame.
    pub fn data(&self) -> &DataFrame {
        &self.df
    }

    /// Unwrap into the underlying DataFrame.
    pub fn into_inner(self) -> DataFrame {
        self.df
    }

    /// Number of records.
    pub fn height(&self) -> usize {
        self.df.height()
    }
}

/// Derive features from a raw examination dataset.
///
/// Adds exactly one column (`overweight`, 1 iff
/// weight / (height/100)² > 25) and remaps `cholesterol` and `gluc`
/// to binary form. The operation is total: every row is processed or
/// the whole call fails.
///
/// # Errors
/// Schema violations, nulls in required columns, and non-positive
/// height/weight values (undefined BMI) are all fatal; the consumed
/// input is dropped and no partially-derived frame escapes.
pub fn derive_features(mut df: DataFrame) -> Result<DerivedFrame, AnalysisError> {
    validate_schema(&df)?;

    let heights = float_values(&df, "height")?;
    let weights = float_values(&df, "weight")?;

    let mut overweight = Vec::with_capacity(df.height());
    for (row, (&height, &weight)) in heights.iter().zip(weights.iter()).enumerate() {
        if height <= 0.0 {
            return Err(AnalysisError::NonPositiveMeasurement {
                column: "height".to_string(),
                row,
                value: height,
            });
        }
        if weight <= 0.0 {
            return Err(AnalysisError::NonPositiveMeasurement {
                column: "weight".to_string(),
                row,
                value: weight,
            });
        }

        let bmi = weight / (height / 100.0).powi(2);
        overweight.push(i64::from(bmi > BMI_OVERWEIGHT_THRESHOLD));
    }
    df.with_column(Column::new("overweight".into(), overweight))?;

    for name in NORMALIZED_ORDINALS {
        let values = int_values(&df, name)?;
        let normalized: Vec<i64> = values.iter().map(|&v| i64::from(v != 1)).collect();
        df.with_column(Column::new(name.into(), normalized))?;
    }

    Ok(DerivedFrame { df })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_df() -> DataFrame {
        df! {
            "height" => [170i32, 180, 160],
            "weight" => [80i32, 70, 90],
            "cholesterol" => [1i32, 2, 3],
            "gluc" => [3i32, 1, 2],
            "smoke" => [0i32, 1, 0],
            "alco" => [0i32, 0, 1],
            "active" => [1i32, 1, 0],
            "cardio" => [0i32, 0, 1],
            "ap_hi" => [120i32, 130, 140],
            "ap_lo" => [80i32, 85, 90],
        }
        .unwrap()
    }

    #[test]
    fn test_overweight_matches_bmi_threshold() {
        // 80 / 1.7² ≈ 27.68 → 1, 70 / 1.8² ≈ 21.6 → 0, 90 / 1.6² ≈ 35.2 → 1
        let derived = derive_features(raw_df()).unwrap();
        let col = derived.data().column("overweight").unwrap();
        let values: Vec<i64> = col.i64().unwrap().into_iter().flatten().collect();
        assert_eq!(values, vec![1, 0, 1]);
    }

    #[test]
    fn test_ordinal_normalization_mapping() {
        let derived = derive_features(raw_df()).unwrap();

        let chol: Vec<i64> = derived
            .data()
            .column("cholesterol")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(chol, vec![0, 1, 1], "1→0, 2→1, 3→1");

        let gluc: Vec<i64> = derived
            .data()
            .column("gluc")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(gluc, vec![1, 0, 1]);
    }

    #[test]
    fn test_adds_exactly_one_column() {
        let raw = raw_df();
        let width_before = raw.width();
        let derived = derive_features(raw).unwrap();
        assert_eq!(derived.data().width(), width_before + 1);
    }

    #[test]
    fn test_zero_height_rejected() {
        let mut df = raw_df().drop("height").unwrap();
        df.with_column(Column::new("height".into(), vec![170i32, 0, 160]))
            .unwrap();

        let result = derive_features(df);
        match result {
            Err(AnalysisError::NonPositiveMeasurement { column, row, .. }) => {
                assert_eq!(column, "height");
                assert_eq!(row, 1);
            }
            other => panic!("Expected NonPositiveMeasurement, got {:?}", other),
        }
    }

    #[test]
    fn test_bmi_exactly_25_is_not_overweight() {
        // 62.5 / 1.58² would not be exact; use height=200, weight=100 → BMI 25.0
        let mut df = raw_df();
        df.with_column(Column::new("height".into(), vec![200i32, 180, 160]))
            .unwrap();
        df.with_column(Column::new("weight".into(), vec![100i32, 70, 90]))
            .unwrap();

        let derived = derive_features(df).unwrap();
        let first = derived
            .data()
            .column("overweight")
            .unwrap()
            .i64()
            .unwrap()
            .get(0)
            .unwrap();
        assert_eq!(first, 0, "threshold is strict: BMI > 25, not >=");
    }
}
