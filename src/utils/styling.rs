//! Terminal styling utilities for a modern, visually appealing CLI

use console::{style, Emoji};
use std::path::Path;
use std::time::Duration;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static HEART: Emoji<'_, '_> = Emoji("❤️  ", "");

/// Print the application banner with ASCII art
pub fn print_banner(version: &str) {
    let banner = r#"
     ██████╗ █████╗ ██████╗ ██████╗ ██╗ ██████╗ ██╗   ██╗██╗███████╗
    ██╔════╝██╔══██╗██╔══██╗██╔══██╗██║██╔═══██╗██║   ██║██║╚══███╔╝
    ██║     ███████║██████╔╝██║  ██║██║██║   ██║██║   ██║██║  ███╔╝
    ██║     ██╔══██║██╔══██╗██║  ██║██║██║   ██║╚██╗ ██╔╝██║ ███╔╝
    ╚██████╗██║  ██║██║  ██║██████╔╝██║╚██████╔╝ ╚████╔╝ ██║███████╗
     ╚═════╝╚═╝  ╚═╝╚═╝  ╚═╝╚═════╝ ╚═╝ ╚═════╝   ╚═══╝  ╚═╝╚══════╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        HEART,
        style("Risk factors and correlations from examination data").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(input: &Path, output: Option<&Path>, lower_quantile: f64, upper_quantile: f64) {
    println!(
        "    {} Input:  {}",
        FOLDER,
        style(truncate_path(input, 48)).white()
    );
    match output {
        Some(path) => println!(
            "    {} Export: {}",
            SAVE,
            style(truncate_path(path, 48)).white()
        ),
        None => println!("    {} Export: {}", SAVE, style("disabled").dim()),
    }
    println!(
        "    {} Height/weight bounds: {} – {}",
        CHART,
        style(format!("{:.1}%", lower_quantile * 100.0)).yellow(),
        style(format!("{:.1}%", upper_quantile * 100.0)).yellow()
    );
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize, detail: Option<&str>) {
    if let Some(info) = detail {
        println!(
            "      Found {} {} {}",
            style(count).yellow().bold(),
            description,
            style(info).dim()
        );
    } else {
        println!(
            "      Found {} {}",
            style(count).yellow().bold(),
            description
        );
    }
}

/// Print the elapsed time of a pipeline step
pub fn print_step_time(elapsed: Duration) {
    println!(
        "      {}",
        style(format!("⏱  {:.2}s", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Cardioviz analysis complete!").green().bold()
    );
    println!();
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    if path_str.len() <= max_len {
        path_str
    } else {
        format!("...{}", &path_str[path_str.len() - max_len + 3..])
    }
}
