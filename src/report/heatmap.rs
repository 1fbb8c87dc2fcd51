//! Masked correlation matrix rendering
//!
//! The terminal counterpart of a masked heat map: one cell per matrix
//! entry rounded to one decimal, with masked cells left blank so only
//! the lower triangle is shown.

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Table};
use console::style;

use crate::pipeline::CorrelationMatrix;

/// Build the masked matrix table.
fn heatmap_table(corr: &CorrelationMatrix, mask: &[Vec<bool>]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    let mut header = vec![Cell::new("")];
    header.extend(
        corr.columns
            .iter()
            .map(|name| Cell::new(name).add_attribute(Attribute::Bold)),
    );
    table.set_header(header);

    for (row_idx, name) in corr.columns.iter().enumerate() {
        let mut cells = vec![Cell::new(name).add_attribute(Attribute::Bold)];
        for col_idx in 0..corr.len() {
            if mask[row_idx][col_idx] {
                cells.push(Cell::new(""));
            } else {
                cells.push(Cell::new(format!("{:.1}", corr.get(row_idx, col_idx))));
            }
        }
        table.add_row(cells);
    }

    table
}

/// Print the masked correlation matrix.
pub fn display_heatmap(corr: &CorrelationMatrix, mask: &[Vec<bool>]) {
    println!();
    println!(
        "      {}",
        style("Pearson correlation (lower triangle)").white().bold()
    );
    for line in heatmap_table(corr, mask).to_string().lines() {
        println!("      {}", line);
    }
}
