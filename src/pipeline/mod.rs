//! Pipeline module - loading, feature derivation, and the two analytical views

pub mod categorical;
mod column;
pub mod error;
pub mod features;
pub mod heatmap;
pub mod loader;
pub mod schema;

pub use categorical::*;
pub use error::*;
pub use features::*;
pub use heatmap::*;
pub use loader::*;
pub use schema::*;
