//! Report module - terminal renderers and JSON export

pub mod categorical;
pub mod export;
pub mod heatmap;
pub mod summary;

pub use categorical::display_categorical_summary;
pub use export::{export_analysis, ExportParams};
pub use heatmap::display_heatmap;
pub use summary::RunSummary;
