//! Jacobi relaxation
//!
//! # Mathematical Background
//!
//! For the 5-point Laplace stencil, one Jacobi sweep replaces every interior
//! value by the average of its four neighbours taken from the *previous*
//! iterate:
//!
//! ```text
//! u_{k+1}[i,j] = ( u_k[i+1,j] + u_k[i-1,j] + u_k[i,j+1] + u_k[i,j-1] ) / 4
//! ```
//!
//! # Characteristics
//!
//! - **Memory**: two N×N buffers (current and next iterate)
//! - **Convergence**: slowest of the three methods, spectral radius
//!   cos(π/(N-1)) for this problem
//! - **Parallelism**: every cell of a sweep is independent
//!
//! # Buffers
//!
//! The current iterate is only read and the next iterate is only written
//! during a sweep. After the sweep the two owned grids are swapped, so the
//! next sweep writes over the iterate before last.

use crate::error::Result;
use crate::grid::{DirichletBoundary, Grid};
use crate::solver::relaxation::{relax, SweepKernel};
use crate::solver::{parallel_threshold, Scenario, SolveResult, Solver, SolverConfiguration};

// =================================================================================================
// Jacobi Solver
// =================================================================================================

/// Jacobi relaxation solver
///
/// # Example
///
/// ```rust
/// use laplace_rs::grid::DirichletBoundary;
/// use laplace_rs::solver::{JacobiSolver, Scenario, Solver, SolverConfiguration};
///
/// let scenario = Scenario::new(3, DirichletBoundary::default()).unwrap();
/// let result = JacobiSolver::new()
///     .solve(&scenario, &SolverConfiguration::new(100, 1e-6))
///     .unwrap();
///
/// assert_eq!(result.grid[(1, 1)], 25.0);
/// assert_eq!(result.iterations(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JacobiSolver;

impl JacobiSolver {
    /// Method name
    pub const NAME: &'static str = "Jacobi";

    /// Create a new Jacobi solver
    pub fn new() -> Self {
        Self
    }
}

impl Solver for JacobiSolver {
    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> Result<SolveResult> {
        config.validate()?;
        scenario.validate()?;

        let grid = scenario.initial_grid().clone();
        let kernel = JacobiSweep::new(&grid, parallel_threshold());

        relax(Self::NAME, grid, scenario.boundary(), config, kernel)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

/// Solve with the Jacobi method and the default boundary
///
/// `grid` is the initial state and should already carry the boundary
/// (see [`apply_boundary_conditions`](crate::grid::apply_boundary_conditions)).
///
/// # Errors
///
/// Configuration error for a non-positive tolerance, divergence error for a
/// non-finite error norm.
pub fn jacobi(grid: Grid, max_iterations: usize, tolerance: f64) -> Result<SolveResult> {
    let config = SolverConfiguration::new(max_iterations, tolerance);
    config.validate()?;

    let boundary = DirichletBoundary::default();
    let kernel = JacobiSweep::new(&grid, parallel_threshold());

    relax(JacobiSolver::NAME, grid, &boundary, &config, kernel)
}

// =================================================================================================
// Sweep kernel
// =================================================================================================

/// Two-buffer Jacobi sweep
struct JacobiSweep {
    next: Grid,
    threshold: usize,
}

impl JacobiSweep {
    fn new(initial: &Grid, threshold: usize) -> Self {
        Self {
            next: initial.clone(),
            threshold,
        }
    }
}

impl SweepKernel for JacobiSweep {
    fn sweep(&mut self, grid: &mut Grid) -> f64 {
        jacobi_update(grid, &mut self.next, self.threshold);
        let error = self.next.l2_distance(grid);
        std::mem::swap(grid, &mut self.next);
        error
    }
}

/// Write the Jacobi update of `current` into the interior of `next`
///
/// Edge cells of `next` are left as they are. The grid is processed one
/// column at a time (nalgebra is column-major); columns are distributed over
/// rayon when the interior holds more than `threshold` cells and the
/// `parallel` feature is enabled. Both paths compute every cell with the
/// same expression, so results are bit-identical.
fn jacobi_update(current: &Grid, next: &mut Grid, threshold: usize) {
    let n = current.size();

    let update_column = |j: usize, column: &mut [f64]| {
        for (i, cell) in column.iter_mut().enumerate().take(n - 1).skip(1) {
            *cell = current.neighbour_mean(i, j);
        }
    };

    let columns = next.as_matrix_mut().as_mut_slice();

    if current.interior_len() > threshold {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            columns
                .par_chunks_mut(n)
                .enumerate()
                .take(n - 1)
                .skip(1)
                .for_each(|(j, column)| update_column(j, column));
            return;
        }
    }

    columns
        .chunks_mut(n)
        .enumerate()
        .take(n - 1)
        .skip(1)
        .for_each(|(j, column)| update_column(j, column));
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::apply_boundary_conditions;

    fn initial(n: usize) -> Grid {
        apply_boundary_conditions(Grid::new(n).unwrap())
    }

    #[test]
    fn test_jacobi_solver_creation() {
        assert_eq!(JacobiSolver::new().name(), "Jacobi");
        assert_eq!(JacobiSolver::default().name(), "Jacobi");
    }

    #[test]
    fn test_single_interior_cell() {
        let result = jacobi(initial(3), 100, 1e-6).unwrap();

        assert_eq!(result.grid[(1, 1)], 25.0);
        assert_eq!(result.errors, vec![25.0, 0.0]);
        assert!(result.is_converged());
    }

    #[test]
    fn test_first_sweep_reads_previous_iterate_only() {
        // After one Jacobi sweep only the row below the heated edge changes;
        // Gauss-Seidel would already have propagated further down.
        let result = jacobi(initial(5), 1, 1e-12).unwrap();

        for j in 1..4 {
            assert_eq!(result.grid[(1, j)], 25.0);
            assert_eq!(result.grid[(2, j)], 0.0);
            assert_eq!(result.grid[(3, j)], 0.0);
        }
        assert_eq!(result.iterations(), 1);
        assert!(!result.is_converged());
    }

    #[test]
    fn test_error_is_l2_norm_of_change() {
        // First sweep on a 5x5 grid: three cells change by 25.
        let result = jacobi(initial(5), 1, 1e-12).unwrap();
        let expected = (3.0_f64 * 25.0 * 25.0).sqrt();
        assert!((result.errors[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_iterations() {
        let grid = initial(6);
        let result = jacobi(grid.clone(), 0, 1e-6).unwrap();
        assert_eq!(result.grid, grid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_boundary_preserved() {
        let result = jacobi(initial(8), 50, 1e-6).unwrap();
        assert!(DirichletBoundary::default().is_satisfied_by(&result.grid));
    }

    #[test]
    fn test_invalid_tolerance() {
        assert!(jacobi(initial(4), 10, 0.0).unwrap_err().is_configuration());
    }

    #[test]
    #[cfg(feature = "parallel")]
    fn test_parallel_and_sequential_updates_agree() {
        let current = Grid::from_fn(16, |i, j| ((i * 31 + j * 17) % 11) as f64).unwrap();

        let mut sequential = current.clone();
        let mut split = current.clone();
        jacobi_update(&current, &mut sequential, usize::MAX);
        jacobi_update(&current, &mut split, 1);

        assert_eq!(sequential, split);
    }

    #[test]
    fn test_update_leaves_edges_alone() {
        let current = initial(6);
        let mut next = Grid::from_fn(6, |_, _| -1.0).unwrap();
        jacobi_update(&current, &mut next, usize::MAX);

        assert_eq!(next[(0, 3)], -1.0);
        assert_eq!(next[(5, 0)], -1.0);
        assert_eq!(next[(1, 1)], 25.0);
    }
}
