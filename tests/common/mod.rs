//! Shared test utilities and fixture generators

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a ten-record examination DataFrame with known characteristics.
///
/// Notable records:
/// - row 0: height=170, weight=80 → BMI ≈ 27.68 → overweight
/// - row 1: height=180, weight=70 → BMI ≈ 21.6 → not overweight
/// - cholesterol/gluc cover all ordinal values 1, 2, 3
/// - cardio splits 5/5, all rows have ap_lo <= ap_hi
pub fn create_exam_dataframe() -> DataFrame {
    df! {
        "age" => [18393i32, 20228, 18857, 17623, 17474, 21914, 22113, 22584, 17668, 19834],
        "height" => [170i32, 180, 160, 175, 165, 168, 172, 158, 182, 169],
        "weight" => [80i32, 70, 90, 60, 85, 72, 95, 55, 77, 62],
        "cholesterol" => [1i32, 2, 3, 1, 2, 1, 3, 1, 2, 1],
        "gluc" => [1i32, 1, 2, 1, 3, 1, 2, 1, 1, 2],
        "smoke" => [0i32, 1, 0, 0, 1, 0, 0, 0, 1, 0],
        "alco" => [0i32, 0, 1, 0, 0, 0, 1, 0, 0, 0],
        "active" => [1i32, 1, 0, 1, 0, 1, 1, 1, 0, 1],
        "cardio" => [0i32, 1, 1, 0, 1, 0, 1, 0, 1, 0],
        "ap_hi" => [120i32, 140, 130, 110, 150, 125, 135, 115, 145, 120],
        "ap_lo" => [80i32, 90, 85, 70, 95, 80, 88, 75, 92, 78],
    }
    .unwrap()
}

/// Create a DataFrame whose height and weight are constant, so the
/// quantile filter retains every row (bounds collapse to the value
/// itself and the bounds are inclusive).
pub fn create_clean_exam_dataframe() -> DataFrame {
    df! {
        "age" => [18393i32, 20228, 18857, 17623, 17474, 21914, 22113, 22584, 17668, 19834],
        "height" => [170i32; 10],
        "weight" => [70i32; 10],
        "cholesterol" => [1i32, 2, 3, 1, 2, 1, 3, 1, 2, 1],
        "gluc" => [1i32, 1, 2, 1, 3, 1, 2, 1, 1, 2],
        "smoke" => [0i32, 1, 0, 0, 1, 0, 0, 0, 1, 0],
        "alco" => [0i32, 0, 1, 0, 0, 0, 1, 0, 0, 0],
        "active" => [1i32, 1, 0, 1, 0, 1, 1, 1, 0, 1],
        "cardio" => [0i32, 1, 1, 0, 1, 0, 1, 0, 1, 0],
        "ap_hi" => [120i32, 140, 130, 110, 150, 125, 135, 115, 145, 120],
        "ap_lo" => [80i32, 90, 85, 70, 95, 80, 88, 75, 92, 78],
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("exam_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("exam_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}

/// Replace one column of a DataFrame, keeping everything else.
pub fn with_replaced_column(mut df: DataFrame, name: &str, values: Vec<i32>) -> DataFrame {
    df.with_column(Column::new(name.into(), values)).unwrap();
    df
}
