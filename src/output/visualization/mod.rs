//! Visualization of solver results
//!
//! This module renders results with the `plotters` library. The backend is
//! chosen from the file extension: `.svg` gives a vector image, anything
//! else a PNG bitmap.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **convergence**: Error vs iteration, log scale, one line per method
//! - **heatmap**: Final grid as coloured cells with a colorbar
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use laplace_rs::comparison::compare;
//! use laplace_rs::grid::DirichletBoundary;
//! use laplace_rs::output::visualization::{plot_convergence, plot_heatmap, PlotConfig};
//! use laplace_rs::solver::{Scenario, SolverConfiguration};
//!
//! let scenario = Scenario::new(50, DirichletBoundary::default()).unwrap();
//! let comparison = compare(&scenario, &SolverConfiguration::default(), 1.7).unwrap();
//!
//! plot_convergence(&comparison.results(), "error_comparison.png", None).unwrap();
//!
//! let config = PlotConfig::heatmap("Potential (SOR)");
//! plot_heatmap(&comparison.sor.grid, "potential_heatmap.svg", Some(&config)).unwrap();
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Module | Function |
//! |----------|--------|----------|
//! | Compare convergence speed | `convergence` | `plot_convergence` |
//! | Inspect a solved potential | `heatmap` | `plot_heatmap` |

pub mod config;
pub mod convergence;
pub mod heatmap;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};
pub use convergence::{plot_convergence, ERROR_FLOOR};
pub use heatmap::{hot_colormap, plot_heatmap};
