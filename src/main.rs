//! Cardioviz: Medical-Examination Analysis CLI
//!
//! A command-line tool that derives binary risk-factor indicators from
//! examination data, summarizes their prevalence by cardiovascular
//! outcome, and renders a masked Pearson correlation matrix.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use cli::Cli;
use pipeline::{
    aggregate_categorical, clean_dataset, correlation_matrix, derive_features,
    load_dataset_with_progress, upper_triangle_mask, validate_schema,
};
use report::{
    display_categorical_summary, display_heatmap, export_analysis, ExportParams, RunSummary,
};
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let export_path = if cli.no_export {
        None
    } else {
        Some(cli.output_path())
    };

    // Print styled banner and configuration
    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(
        &cli.input,
        export_path.as_deref(),
        cli.lower_quantile,
        cli.upper_quantile,
    );

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");

    let step_start = Instant::now();
    let (df, rows, cols, memory_mb) = load_dataset_with_progress(&cli.input, cli.infer_schema_length)?;
    validate_schema(&df)?;
    print_success("Examination schema verified");

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);

    let mut summary = RunSummary::new(rows, cols);
    let load_elapsed = step_start.elapsed();
    summary.set_load_time(load_elapsed);
    print_step_time(load_elapsed);

    // Step 2: Feature derivation
    print_step_header(2, "Feature Derivation");

    let step_start = Instant::now();
    let spinner = create_spinner("Deriving overweight indicator and normalizing ordinals...");
    let derived = derive_features(df)?;
    finish_with_success(&spinner, "Features derived");
    print_info("Added 'overweight'; cholesterol and gluc normalized to 0/1");

    let derive_elapsed = step_start.elapsed();
    summary.set_derive_time(derive_elapsed);
    print_step_time(derive_elapsed);

    // Step 3: Categorical prevalence summary
    print_step_header(3, "Risk-Factor Prevalence");

    let step_start = Instant::now();
    let categorical_rows = aggregate_categorical(&derived)?;
    print_count("aggregate group(s)", categorical_rows.len(), None);
    display_categorical_summary(&categorical_rows);

    summary.aggregate_rows = categorical_rows.len();
    summary.overweight_records = categorical_rows
        .iter()
        .filter(|r| r.variable == "overweight" && r.value == 1)
        .map(|r| r.total)
        .sum();
    let categorical_elapsed = step_start.elapsed();
    summary.set_categorical_time(categorical_elapsed);
    print_step_time(categorical_elapsed);

    // Step 4: Correlation heat map
    print_step_header(4, "Correlation Matrix");

    let step_start = Instant::now();
    let spinner = create_spinner("Filtering outlier rows...");
    let cleaned = clean_dataset(&derived, cli.lower_quantile, cli.upper_quantile)?;
    finish_with_success(
        &spinner,
        &format!(
            "Retained {} of {} rows after outlier filtering",
            cleaned.height(),
            derived.height()
        ),
    );

    if cleaned.height() == 0 {
        anyhow::bail!(pipeline::AnalysisError::EmptyDataset);
    }

    let corr = correlation_matrix(&cleaned)?;
    let mask = upper_triangle_mask(corr.len());
    display_heatmap(&corr, &mask);

    summary.rows_retained = cleaned.height();
    summary.matrix_size = corr.len();
    let heatmap_elapsed = step_start.elapsed();
    summary.set_heatmap_time(heatmap_elapsed);
    print_step_time(heatmap_elapsed);

    // Step 5: Export
    if let Some(output_path) = &export_path {
        print_step_header(5, "Export Report");

        let spinner = create_spinner("Writing JSON analysis report...");
        let input_display = cli.input.display().to_string();
        export_analysis(
            &categorical_rows,
            &corr,
            &mask,
            output_path,
            &ExportParams {
                input_file: &input_display,
                rows_loaded: rows,
                rows_retained: cleaned.height(),
                lower_quantile: cli.lower_quantile,
                upper_quantile: cli.upper_quantile,
            },
        )?;
        finish_with_success(&spinner, &format!("Saved to {}", output_path.display()));
    }

    // Display summary
    summary.display();

    print_completion();

    Ok(())
}
