//! Relaxation methods
//!
//! This module contains the concrete implementations of the
//! [`Solver`](crate::solver::Solver) trait.
//!
//! # Available Methods
//!
//! | Method | Update | Buffers | Parallel |
//! |--------|--------|---------|----------|
//! | [`JacobiSolver`] | mean of previous iterate | 2 | yes (feature `parallel`) |
//! | [`GaussSeidelSolver`] | mean, in place | 1 | no |
//! | [`SorSolver`] | `(1-ω)·old + ω·mean`, in place | 1 | no |
//!
//! Each method is also available as a free function ([`jacobi`],
//! [`gauss_seidel`], [`sor`]) taking an already-initialised grid and the
//! default boundary.
//!
//! # Example
//!
//! ```rust
//! use laplace_rs::grid::{apply_boundary_conditions, Grid};
//! use laplace_rs::solver::{gauss_seidel, jacobi, sor};
//!
//! let grid = apply_boundary_conditions(Grid::new(20).unwrap());
//!
//! let j = jacobi(grid.clone(), 5000, 1e-6).unwrap();
//! let gs = gauss_seidel(grid.clone(), 5000, 1e-6).unwrap();
//! let s = sor(grid, 1.8, 5000, 1e-6).unwrap();
//!
//! assert!(s.iterations() < gs.iterations());
//! assert!(gs.iterations() < j.iterations());
//! ```
//!
//! # Design Philosophy
//!
//! Solvers are stateless: all sweep buffers live in a kernel built per
//! solve, so one solver value can be shared between threads and reused.

mod gauss_seidel;
mod jacobi;
mod sor;

pub use gauss_seidel::{gauss_seidel, GaussSeidelSolver};
pub use jacobi::{jacobi, JacobiSolver};
pub use sor::{sor, SorSolver};
