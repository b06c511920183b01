//! Relaxation solvers
//!
//! This module provides the three classical point-relaxation methods for the
//! 5-point Laplace stencil, together with the machinery they share.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Initial grid (zero interior, edges fixed)
//!    - Dirichlet boundary to re-impose after every sweep
//!
//! 2. **Configuration** (`SolverConfiguration`) - WHEN to stop
//!    - Hard iteration cap
//!    - Convergence tolerance on the L2 change between sweeps
//!
//! 3. **Solver** (`Solver` trait) - HOW to relax
//!    - Jacobi, Gauss-Seidel or SOR point update
//!    - Returns the final grid and the per-iteration error sequence
//!
//! # Module Organization
//!
//! - **`traits`**: `Solver`, `SolverConfiguration`, `Method`
//! - **`convergence`**: `ConvergenceTracker`, `SolveStatus`, `SolveResult`
//! - **`relaxation`**: the iteration-control loop shared by every method
//! - **`scenario`**: `Scenario`
//! - **`methods`**: `JacobiSolver`, `GaussSeidelSolver`, `SorSolver`
//!
//! # State Machine
//!
//! ```text
//!            ┌──────────── error >= tol, k < max ───────────┐
//!            ▼                                              │
//!      ┌───────────┐   sweep k, record error          ┌─────┴─────┐
//!  ──► │  Running  │ ───────────────────────────────► │  checked  │
//!      └───────────┘                                  └─────┬─────┘
//!                                   error < tol             │       k == max
//!                        ┌──────────────────────────────────┼──────────────────┐
//!                        ▼                                  ▼                  ▼
//!                  ┌───────────┐                      ┌───────────┐      ┌────────────┐
//!                  │ Converged │                      │ Diverged  │      │ Exhausted  │
//!                  └───────────┘                      │  (error)  │      └────────────┘
//!                                                     └───────────┘
//! ```
//!
//! Both `Converged` and `Exhausted` are successful returns. Only a
//! non-finite error norm aborts the solve.
//!
//! # Quick Start
//!
//! ```rust
//! use laplace_rs::grid::DirichletBoundary;
//! use laplace_rs::solver::{Scenario, Solver, SolverConfiguration, SorSolver};
//!
//! let scenario = Scenario::new(20, DirichletBoundary::default()).unwrap();
//! let config = SolverConfiguration::new(5000, 1e-6);
//!
//! let result = SorSolver::new(1.8).solve(&scenario, &config).unwrap();
//! assert!(result.is_converged());
//! println!("SOR converged in {} iterations", result.iterations());
//! ```
//!
//! # Performance Considerations
//!
//! A Jacobi sweep reads only the previous iterate, so every interior cell is
//! independent within a sweep. With the `parallel` feature the sweep is
//! split by column across the rayon pool once the interior exceeds
//! [`parallel_threshold()`].
//!
//! Gauss-Seidel and SOR read neighbours that were already updated in the
//! same sweep; the ascending row-major order is part of their definition and
//! they always run sequentially. A red-black ordering would lift this
//! restriction but changes the iterates, so it is not offered.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod convergence;
mod methods;
mod relaxation;
mod scenario;
mod traits;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// The threshold is stored in an AtomicUsize so that benchmarks and tests can
// change it at runtime. Relaxed ordering is sufficient: the value is a
// performance hint, not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of interior cells above which a Jacobi sweep is handed to
/// rayon.
///
/// Below roughly a 100×100 interior the per-sweep dispatch overhead outweighs
/// the four additions per cell.
const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// The Jacobi sweep runs sequentially when the grid has at most this many
/// interior cells, and on the rayon pool above it, but only when the crate is
/// compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use laplace_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use laplace_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// RAII guard that sets the threshold and restores the previous value on drop.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use convergence::{ConvergenceTracker, Progress, SolveResult, SolveStatus};
pub use methods::{gauss_seidel, jacobi, sor, GaussSeidelSolver, JacobiSolver, SorSolver};
pub use relaxation::SweepKernel;
pub use scenario::Scenario;
pub use traits::{Method, Solver, SolverConfiguration};

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 10_000);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    // Only test that mutates the global threshold, so no other test can
    // observe the intermediate values.
    #[test]
    fn test_threshold_guard_sets_and_restores() {
        let before = parallel_threshold();
        {
            let _guard = ThresholdGuard::save(42);
            assert_eq!(parallel_threshold(), 42);
        }
        assert_eq!(parallel_threshold(), before);
    }
}
