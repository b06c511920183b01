//! laplace-rs: Iterative Solvers for the 2D Laplace Equation
//!
//! Solves ∇²u = 0 on a square N×N grid with fixed (Dirichlet) edge values
//! using the three classical point-relaxation methods (Jacobi, Gauss-Seidel
//! and Successive Over-Relaxation) and compares how fast they converge.
//!
//! # Architecture
//!
//! laplace-rs is built on two core principles:
//!
//! 1. **Separation of Problem and Method**
//!    - A scenario defines the grid and its boundary (what to solve)
//!    - Solvers provide relaxation methods (how to solve)
//!
//! 2. **A Core Free of I/O**
//!    - `grid` and `solver` never print, prompt or touch the filesystem
//!    - `comparison`, `output` and `cli` build the application on top
//!
//! # Quick Start
//!
//! ```rust
//! use laplace_rs::prelude::*;
//!
//! // 1. Build the initial grid: top edge at 100, other edges at 0
//! let scenario = Scenario::new(20, DirichletBoundary::default()).unwrap();
//!
//! // 2. Configure the stopping rule
//! let config = SolverConfiguration::new(5000, 1e-6);
//!
//! // 3. Relax
//! let result = SorSolver::new(1.8).solve(&scenario, &config).unwrap();
//!
//! // 4. Access results
//! assert!(result.is_converged());
//! println!("SOR converged in {} iterations", result.iterations());
//! println!("centre potential: {:.3}", result.grid[(10, 10)]);
//! ```
//!
//! # Modules
//!
//! - [`grid`]: The N×N field and its Dirichlet boundary
//! - [`solver`]: Relaxation methods and convergence tracking
//! - [`comparison`]: Run all three methods on one scenario
//! - [`output`]: Plots (PNG/SVG) and CSV export
//! - [`cli`]: Parameter prompting for the `laplace` binary
//! - [`error`]: Crate-wide error type
//!
//! # Features
//!
//! - `parallel`: Jacobi sweeps on large grids and the three runs of a
//!   comparison use rayon

// Core modules
pub mod error;
pub mod grid;
pub mod solver;

// Application modules
pub mod cli;
pub mod comparison;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use laplace_rs::prelude::*;
    //! ```
    pub use crate::comparison::{compare, Comparison};
    pub use crate::error::LaplaceError;
    pub use crate::grid::{apply_boundary_conditions, DirichletBoundary, Grid};
    pub use crate::solver::{
        gauss_seidel, jacobi, sor, GaussSeidelSolver, JacobiSolver, Method, Scenario,
        SolveResult, SolveStatus, Solver, SolverConfiguration, SorSolver,
    };
}
