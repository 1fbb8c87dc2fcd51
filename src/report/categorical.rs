//! Categorical prevalence rendering
//!
//! The terminal counterpart of a faceted bar chart: one table per
//! cardio level, one row per risk factor, counts split by binary
//! value. Consumes the aggregate rows verbatim.

use std::collections::BTreeMap;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{CategoricalCount, CATEGORICAL_VARIABLES};

/// Build the count table for a single cardio level.
fn facet_table(rows: &[&CategoricalCount]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Risk factor").add_attribute(Attribute::Bold),
        Cell::new("value = 0").add_attribute(Attribute::Bold),
        Cell::new("value = 1").add_attribute(Attribute::Bold),
    ]);

    for variable in CATEGORICAL_VARIABLES {
        let count_for = |value: i64| -> u64 {
            rows.iter()
                .find(|r| r.variable == variable && r.value == value)
                .map(|r| r.total)
                .unwrap_or(0)
        };

        table.add_row(vec![
            Cell::new(variable),
            Cell::new(count_for(0)).fg(Color::Cyan),
            Cell::new(count_for(1)).fg(Color::Yellow),
        ]);
    }

    table
}

/// Print the prevalence summary, faceted by cardio outcome.
pub fn display_categorical_summary(rows: &[CategoricalCount]) {
    let mut facets: BTreeMap<i64, Vec<&CategoricalCount>> = BTreeMap::new();
    for row in rows {
        facets.entry(row.cardio).or_default().push(row);
    }

    for (outcome, facet_rows) in &facets {
        println!();
        println!(
            "      {} {}",
            style(format!("cardio = {}", outcome)).white().bold(),
            style(if *outcome == 0 {
                "(no cardiovascular disease)"
            } else {
                "(cardiovascular disease)"
            })
            .dim()
        );

        for line in facet_table(facet_rows).to_string().lines() {
            println!("      {}", line);
        }
    }
}
