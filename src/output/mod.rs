//! Output module for solver results
//!
//! This module turns [`SolveResult`](crate::solver::SolveResult)s into
//! files:
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   ├── convergence.rs
//! │   └── heatmap.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Design Philosophy
//!
//! The output module separates concerns:
//! - **Visualization**: For human interpretation (plots)
//! - **Export**: For programmatic analysis (CSV)
//!
//! Neither depends on how a result was computed, and the solvers never
//! depend on this module. Every function reports failures through
//! [`LaplaceError`](crate::error::LaplaceError).

pub mod export;
pub mod visualization;

pub use export::{export_error_history_csv, export_grid_csv, CsvConfig, CsvMetadata};
pub use visualization::{plot_convergence, plot_heatmap, PlotConfig};
