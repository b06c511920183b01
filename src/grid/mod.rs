//! Discrete potential field and its boundary conditions
//!
//! This module provides the data the solvers work on:
//!
//! - [`Grid`]: an N×N field of `f64` (N ≥ 3) backed by `nalgebra::DMatrix`
//! - [`DirichletBoundary`]: fixed values on the four edges
//! - [`apply_boundary_conditions`]: the default heated-top boundary
//!
//! # Lifecycle
//!
//! ```text
//! Grid::new(N)  ──►  boundary.apply()  ──►  clone per solver  ──►  relaxed in place
//!  (zeros)            (edges fixed)          (independent)         (one owner)
//! ```

pub mod boundary;
pub mod field;

pub use boundary::{apply_boundary_conditions, DirichletBoundary};
pub use field::Grid;
