//! Data export
//!
//! Writes solver results to plain-text formats for external analysis.
//!
//! - **csv**: error histories ([`export_error_history_csv`]) and grids
//!   ([`export_grid_csv`]), with optional metadata header ([`CsvMetadata`])

pub mod csv;

pub use csv::{export_error_history_csv, export_grid_csv, CsvConfig, CsvMetadata};
