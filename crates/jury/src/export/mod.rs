//! Export formats for record sets.
//!
//! - **CSV**: the downloadable `scores.csv` artifact
//! - **JSON**: newline-delimited objects for programmatic access

mod csv;
mod format;
mod json;

pub use csv::*;
pub use format::ExportFormat;
pub use json::*;
