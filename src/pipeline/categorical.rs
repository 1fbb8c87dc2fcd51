//! Categorical risk-factor aggregation
//!
//! Reshapes the derived dataset from wide to long form over the six
//! binary risk factors and counts occurrences per (cardio, variable,
//! value) combination, producing the rows the categorical renderer
//! consumes verbatim.

use std::collections::BTreeMap;

use serde::Serialize;

use super::column::int_values;
use super::error::AnalysisError;
use super::features::DerivedFrame;

/// Fixed melt order for the risk-factor columns. Output rows follow
/// this order within each cardio level.
pub const CATEGORICAL_VARIABLES: [&str; 6] = [
    "cholesterol",
    "gluc",
    "smoke",
    "alco",
    "active",
    "overweight",
];

/// One long-form aggregate row: the number of records with the given
/// outcome that hold the given value for the given risk factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoricalCount {
    pub cardio: i64,
    pub variable: String,
    pub value: i64,
    pub total: u64,
}

/// Melt the derived dataset over the six risk factors and count
/// per-group occurrences.
///
/// Rows are emitted in (cardio ascending, fixed variable order, value
/// ascending) order; combinations absent from the data are omitted
/// rather than zero-filled. For every cardio level, the totals over
/// all emitted rows sum to six times the number of records with that
/// outcome (one contribution per variable).
pub fn aggregate_categorical(
    derived: &DerivedFrame,
) -> Result<Vec<CategoricalCount>, AnalysisError> {
    let df = derived.data();
    let cardio = int_values(df, "cardio")?;

    // Key by variable index, not name, so BTreeMap iteration yields the
    // fixed melt order instead of alphabetical order.
    let mut counts: BTreeMap<(i64, usize, i64), u64> = BTreeMap::new();
    for (var_idx, name) in CATEGORICAL_VARIABLES.iter().enumerate() {
        let values = int_values(df, name)?;
        for (&outcome, &value) in cardio.iter().zip(values.iter()) {
            *counts.entry((outcome, var_idx, value)).or_insert(0) += 1;
        }
    }

    Ok(counts
        .into_iter()
        .map(|((outcome, var_idx, value), total)| CategoricalCount {
            cardio: outcome,
            variable: CATEGORICAL_VARIABLES[var_idx].to_string(),
            value,
            total,
        })
        .collect())
}
