//! Iteration control shared by every relaxation method
//!
//! Jacobi, Gauss-Seidel and SOR differ only in how one sweep updates the
//! interior. Everything around the sweep is identical and lives here:
//!
//! 1. run one sweep ([`SweepKernel::sweep`]), which reports the L2 change
//! 2. reject a non-finite change as divergence
//! 3. record the change and apply the stopping rule
//! 4. re-impose the Dirichlet boundary, then stop or go on
//!
//! ```text
//! for k in 1..=max_iterations:
//!     error = kernel.sweep(grid)
//!     error not finite   → Err(Divergence)
//!     progress = tracker.record(error)
//!     boundary.apply(grid)
//!     progress != Running → stop, grid is the output
//! ```
//!
//! The change is measured before the boundary is re-imposed. Kernels never
//! write edge cells, so for a grid that starts on the boundary re-imposing
//! it is a no-op; it only matters for a custom initial grid whose edges do
//! not match the boundary yet.

use crate::error::{LaplaceError, Result};
use crate::grid::{DirichletBoundary, Grid};
use crate::solver::convergence::{ConvergenceTracker, Progress, SolveResult};
use crate::solver::traits::SolverConfiguration;

/// One sweep of a relaxation method
///
/// Implementations update every interior cell of `grid` exactly once and
/// return the Euclidean norm of the change between the grid before and
/// after the sweep. Edge cells must not be written.
pub trait SweepKernel {
    /// Perform one sweep, return the L2 norm of the change
    fn sweep(&mut self, grid: &mut Grid) -> f64;
}

/// Drive `kernel` until convergence or exhaustion
///
/// Configuration is expected to be validated by the caller.
pub(crate) fn relax<K: SweepKernel>(
    method: &'static str,
    mut grid: Grid,
    boundary: &DirichletBoundary,
    config: &SolverConfiguration,
    mut kernel: K,
) -> Result<SolveResult> {
    let mut tracker = ConvergenceTracker::new(config);

    log::debug!(
        "{method}: relaxing {n}x{n} grid (max {max} iterations, tolerance {tol:e})",
        n = grid.size(),
        max = config.max_iterations,
        tol = config.tolerance,
    );

    for iteration in 1..=config.max_iterations {
        let error = kernel.sweep(&mut grid);

        if !error.is_finite() {
            log::warn!("{method}: non-finite error norm at iteration {iteration}");
            return Err(LaplaceError::Divergence {
                method,
                iteration,
                error,
            });
        }

        log::trace!("{method}: iteration {iteration}, error {error:e}");

        let progress = tracker.record(error);
        boundary.apply(&mut grid);

        if progress != Progress::Running {
            break;
        }
    }

    let (errors, status) = tracker.finish();

    match errors.last() {
        Some(last) if status.is_converged() => log::info!(
            "{method}: converged after {} iterations (error {last:e})",
            errors.len()
        ),
        Some(last) => log::warn!(
            "{method}: tolerance {:e} not reached after {} iterations (last error {last:e})",
            config.tolerance,
            errors.len()
        ),
        None => log::debug!("{method}: zero iterations requested, grid returned unchanged"),
    }

    let mut result = SolveResult::new(method, grid, errors, status);
    result.add_metadata("solver", method);
    result.add_metadata("max iterations", &config.max_iterations.to_string());
    result.add_metadata("tolerance", &config.tolerance.to_string());

    Ok(result)
}

/// In-place sweep in ascending row-major order
///
/// Each interior cell is replaced by `update(old, mean)`, where `mean` is the
/// neighbour average computed from whatever the grid currently holds: cells
/// above and to the left were already updated in this sweep, cells below and
/// to the right still hold the previous sweep's values.
///
/// `snapshot` receives a copy of the grid before the sweep and is used to
/// measure the change.
pub(crate) fn sweep_in_place<F>(grid: &mut Grid, snapshot: &mut Grid, update: F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    snapshot.copy_from(grid);
    let n = grid.size();

    for i in 1..n - 1 {
        for j in 1..n - 1 {
            let old = grid[(i, j)];
            let mean = grid.neighbour_mean(i, j);
            grid[(i, j)] = update(old, mean);
        }
    }

    grid.l2_distance(snapshot)
}

// =================================================================================================
// Tests
// =================================================================================================
