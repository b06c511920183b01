//! Gauss-Seidel relaxation
//!
//! # Mathematical Background
//!
//! Gauss-Seidel visits the interior in ascending row-major order and
//! overwrites each cell immediately. The neighbour average therefore mixes
//! values from the current sweep (up, left) with values from the previous
//! one (down, right):
//!
//! ```text
//! u[i,j] ← ( u_k[i+1,j] + u_{k+1}[i-1,j] + u_k[i,j+1] + u_{k+1}[i,j-1] ) / 4
//! ```
//!
//! # Characteristics
//!
//! - **Memory**: one N×N buffer, plus a snapshot to measure the change
//! - **Convergence**: about twice as fast as Jacobi on this problem
//! - **Parallelism**: none; each update depends on the previous one in
//!   traversal order
//!
//! The result depends on the traversal order, which is fixed, so the method
//! is deterministic.

use crate::error::Result;
use crate::grid::{DirichletBoundary, Grid};
use crate::solver::relaxation::{relax, sweep_in_place, SweepKernel};
use crate::solver::{Scenario, SolveResult, Solver, SolverConfiguration};

// =================================================================================================
// Gauss-Seidel Solver
// =================================================================================================

/// Gauss-Seidel relaxation solver
///
/// # Example
///
/// ```rust
/// use laplace_rs::grid::DirichletBoundary;
/// use laplace_rs::solver::{GaussSeidelSolver, Scenario, Solver, SolverConfiguration};
///
/// let scenario = Scenario::new(3, DirichletBoundary::default()).unwrap();
/// let result = GaussSeidelSolver::new()
///     .solve(&scenario, &SolverConfiguration::new(100, 1e-6))
///     .unwrap();
///
/// assert_eq!(result.grid[(1, 1)], 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussSeidelSolver;

impl GaussSeidelSolver {
    /// Method name
    pub const NAME: &'static str = "Gauss-Seidel";

    /// Create a new Gauss-Seidel solver
    pub fn new() -> Self {
        Self
    }
}

impl Solver for GaussSeidelSolver {
    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> Result<SolveResult> {
        config.validate()?;
        scenario.validate()?;

        let grid = scenario.initial_grid().clone();
        let kernel = GaussSeidelSweep::new(&grid);

        relax(Self::NAME, grid, scenario.boundary(), config, kernel)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

/// Solve with the Gauss-Seidel method and the default boundary
///
/// `grid` is the initial state and should already carry the boundary.
pub fn gauss_seidel(grid: Grid, max_iterations: usize, tolerance: f64) -> Result<SolveResult> {
    let config = SolverConfiguration::new(max_iterations, tolerance);
    config.validate()?;

    let boundary = DirichletBoundary::default();
    let kernel = GaussSeidelSweep::new(&grid);

    relax(GaussSeidelSolver::NAME, grid, &boundary, &config, kernel)
}

// =================================================================================================
// Sweep kernel
// =================================================================================================

struct GaussSeidelSweep {
    snapshot: Grid,
}

impl GaussSeidelSweep {
    fn new(initial: &Grid) -> Self {
        Self {
            snapshot: initial.clone(),
        }
    }
}

impl SweepKernel for GaussSeidelSweep {
    fn sweep(&mut self, grid: &mut Grid) -> f64 {
        sweep_in_place(grid, &mut self.snapshot, |_, mean| mean)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
