//! Convergence tracking and solve results
//!
//! The [`ConvergenceTracker`] owns the error sequence while a solve runs and
//! decides, after every sweep, whether the solve goes on. Once the solve is
//! over the sequence is frozen into a [`SolveResult`].

use std::collections::HashMap;

use crate::grid::Grid;
use crate::solver::traits::SolverConfiguration;

// =================================================================================================
// Progress and terminal status
// =================================================================================================

/// Decision taken after recording one sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Tolerance not reached, iterations left
    Running,

    /// Last error strictly below the tolerance
    Converged,

    /// Iteration cap reached without convergence
    Exhausted,
}

/// How a solve terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Stopped because the error dropped below the tolerance
    Converged {
        /// Sweeps performed, including the converging one
        iterations: usize,
    },

    /// Stopped at the iteration cap
    Exhausted {
        /// Sweeps performed (equal to the cap)
        iterations: usize,
    },
}

impl SolveStatus {
    /// Sweeps performed
    pub fn iterations(&self) -> usize {
        match *self {
            SolveStatus::Converged { iterations } | SolveStatus::Exhausted { iterations } => {
                iterations
            }
        }
    }

    /// `true` for [`SolveStatus::Converged`]
    pub fn is_converged(&self) -> bool {
        matches!(self, SolveStatus::Converged { .. })
    }
}

// =================================================================================================
// Convergence tracker
// =================================================================================================

/// Append-only record of per-sweep error norms plus the stopping rule
///
/// # Example
///
/// ```rust
/// use laplace_rs::solver::{ConvergenceTracker, Progress, SolverConfiguration};
///
/// let mut tracker = ConvergenceTracker::new(&SolverConfiguration::new(3, 0.1));
///
/// assert_eq!(tracker.record(1.0), Progress::Running);
/// assert_eq!(tracker.record(0.05), Progress::Converged);
/// assert_eq!(tracker.errors(), &[1.0, 0.05]);
/// ```
#[derive(Debug, Clone)]
pub struct ConvergenceTracker {
    tolerance: f64,
    max_iterations: usize,
    errors: Vec<f64>,
}

impl ConvergenceTracker {
    /// Upper bound on the storage reserved up front
    const MAX_RESERVED: usize = 4096;

    /// Create an empty tracker for the given stopping rule
    pub fn new(config: &SolverConfiguration) -> Self {
        Self {
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
            errors: Vec::with_capacity(config.max_iterations.min(Self::MAX_RESERVED)),
        }
    }

    /// Record the error of one completed sweep and decide what happens next
    ///
    /// Convergence is checked before exhaustion, so a sweep that both
    /// reaches the cap and drops below the tolerance counts as converged.
    pub fn record(&mut self, error: f64) -> Progress {
        self.errors.push(error);

        if error < self.tolerance {
            Progress::Converged
        } else if self.errors.len() >= self.max_iterations {
            Progress::Exhausted
        } else {
            Progress::Running
        }
    }

    /// Sweeps recorded so far
    pub fn iterations(&self) -> usize {
        self.errors.len()
    }

    /// Errors recorded so far, oldest first
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// Most recent error
    pub fn last_error(&self) -> Option<f64> {
        self.errors.last().copied()
    }

    /// `true` when the last recorded error is below the tolerance
    pub fn is_converged(&self) -> bool {
        self.last_error().is_some_and(|e| e < self.tolerance)
    }

    /// Freeze the sequence and derive the terminal status
    pub fn finish(self) -> (Vec<f64>, SolveStatus) {
        let iterations = self.errors.len();
        let status = if self.is_converged() {
            SolveStatus::Converged { iterations }
        } else {
            SolveStatus::Exhausted { iterations }
        };
        (self.errors, status)
    }
}

// =================================================================================================
// Solve result
// =================================================================================================

/// Output of one solve: final grid, error sequence, terminal status
///
/// `metadata` carries the parameters of the run (method, tolerance, omega,
/// ...) as strings, for reports and exported files.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Name of the method that produced this result
    pub method: &'static str,

    /// Last computed grid
    pub grid: Grid,

    /// One error norm per sweep, oldest first
    pub errors: Vec<f64>,

    /// How the solve terminated
    pub status: SolveStatus,

    /// Run parameters
    pub metadata: HashMap<String, String>,
}

impl SolveResult {
    /// Assemble a result
    pub fn new(method: &'static str, grid: Grid, errors: Vec<f64>, status: SolveStatus) -> Self {
        Self {
            method,
            grid,
            errors,
            status,
            metadata: HashMap::new(),
        }
    }

    /// Sweeps performed
    pub fn iterations(&self) -> usize {
        self.errors.len()
    }

    /// Error of the last sweep, `None` when no sweep ran
    pub fn final_error(&self) -> Option<f64> {
        self.errors.last().copied()
    }

    /// `true` when the tolerance was reached
    pub fn is_converged(&self) -> bool {
        self.status.is_converged()
    }

    /// Attach a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Read a metadata entry
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(max_iterations: usize, tolerance: f64) -> ConvergenceTracker {
        ConvergenceTracker::new(&SolverConfiguration::new(max_iterations, tolerance))
    }

    #[test]
    fn test_running_until_tolerance() {
        let mut t = tracker(10, 0.5);
        assert_eq!(t.record(4.0), Progress::Running);
        assert_eq!(t.record(2.0), Progress::Running);
        assert_eq!(t.record(0.4), Progress::Converged);

        let (errors, status) = t.finish();
        assert_eq!(errors, vec![4.0, 2.0, 0.4]);
        assert_eq!(status, SolveStatus::Converged { iterations: 3 });
    }

    #[test]
    fn test_tolerance_is_strict() {
        let mut t = tracker(10, 0.5);
        assert_eq!(t.record(0.5), Progress::Running);
    }

    #[test]
    fn test_exhausted_at_cap() {
        let mut t = tracker(2, 1e-6);
        assert_eq!(t.record(1.0), Progress::Running);
        assert_eq!(t.record(1.0), Progress::Exhausted);

        let (errors, status) = t.finish();
        assert_eq!(errors.len(), 2);
        assert_eq!(status, SolveStatus::Exhausted { iterations: 2 });
    }

    #[test]
    fn test_convergence_wins_over_exhaustion() {
        let mut t = tracker(1, 1e-3);
        assert_eq!(t.record(1e-4), Progress::Converged);
        assert!(t.finish().1.is_converged());
    }

    #[test]
    fn test_empty_tracker_is_exhausted() {
        let t = tracker(0, 1e-6);
        assert_eq!(t.last_error(), None);
        let (errors, status) = t.finish();
        assert!(errors.is_empty());
        assert_eq!(status, SolveStatus::Exhausted { iterations: 0 });
    }

    #[test]
    fn test_result_accessors() {
        let grid = Grid::new(3).unwrap();
        let mut result = SolveResult::new(
            "Jacobi",
            grid,
            vec![3.0, 1.0],
            SolveStatus::Exhausted { iterations: 2 },
        );
        result.add_metadata("tolerance", "1e-6");

        assert_eq!(result.iterations(), 2);
        assert_eq!(result.final_error(), Some(1.0));
        assert!(!result.is_converged());
        assert_eq!(result.get_metadata("tolerance"), Some("1e-6"));
        assert_eq!(result.get_metadata("omega"), None);
    }
}
