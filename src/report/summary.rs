//! Run summary report generation

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of a full analysis run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub columns_loaded: usize,
    pub rows_retained: usize,
    pub overweight_records: u64,
    pub aggregate_rows: usize,
    pub matrix_size: usize,
    load_time: Duration,
    derive_time: Duration,
    categorical_time: Duration,
    heatmap_time: Duration,
}

impl RunSummary {
    pub fn new(rows_loaded: usize, columns_loaded: usize) -> Self {
        Self {
            rows_loaded,
            columns_loaded,
            ..Default::default()
        }
    }

    pub fn set_load_time(&mut self, elapsed: Duration) {
        self.load_time = elapsed;
    }

    pub fn set_derive_time(&mut self, elapsed: Duration) {
        self.derive_time = elapsed;
    }

    pub fn set_categorical_time(&mut self, elapsed: Duration) {
        self.categorical_time = elapsed;
    }

    pub fn set_heatmap_time(&mut self, elapsed: Duration) {
        self.heatmap_time = elapsed;
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("ANALYSIS SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Records loaded"),
            Cell::new(self.rows_loaded),
        ]);
        table.add_row(vec![
            Cell::new("📐 Columns"),
            Cell::new(self.columns_loaded),
        ]);
        table.add_row(vec![
            Cell::new("⚖️  Overweight records"),
            Cell::new(self.overweight_records).fg(Color::Yellow),
        ]);
        table.add_row(vec![
            Cell::new("📊 Aggregate rows"),
            Cell::new(self.aggregate_rows),
        ]);

        let dropped = self.rows_loaded.saturating_sub(self.rows_retained);
        table.add_row(vec![
            Cell::new("🗑️  Outlier rows dropped"),
            Cell::new(dropped).fg(if dropped == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);
        table.add_row(vec![
            Cell::new("✅ Rows in correlation"),
            Cell::new(self.rows_retained)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("🔗 Matrix size"),
            Cell::new(format!("{0}×{0}", self.matrix_size)),
        ]);

        let total = self.load_time + self.derive_time + self.categorical_time + self.heatmap_time;
        table.add_row(vec![
            Cell::new("⏱️  Total time"),
            Cell::new(format!("{:.2}s", total.as_secs_f64())),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
