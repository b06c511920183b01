//! Successive Over-Relaxation (SOR)
//!
//! # Mathematical Background
//!
//! SOR uses the Gauss-Seidel traversal and read pattern but extrapolates
//! each update with a relaxation factor ω:
//!
//! ```text
//! u[i,j] ← (1 - ω) · u[i,j] + ω · mean_of_neighbours
//! ```
//!
//! - ω = 1 is exactly Gauss-Seidel
//! - 1 < ω < 2 over-relaxes and, well chosen, cuts the iteration count by
//!   an order of magnitude
//! - ω outside (0, 2) diverges
//!
//! For the square Dirichlet problem the optimal factor is
//!
//! ```text
//! ω_opt = 2 / (1 + sin(π / (N - 1)))
//! ```
//!
//! see [`SorSolver::optimal_omega`].

use std::f64::consts::PI;

use crate::error::{LaplaceError, Result};
use crate::grid::{DirichletBoundary, Grid};
use crate::solver::relaxation::{relax, sweep_in_place, SweepKernel};
use crate::solver::{Scenario, SolveResult, Solver, SolverConfiguration};

// =================================================================================================
// SOR Solver
// =================================================================================================

/// Successive over-relaxation solver
///
/// # Example
///
/// ```rust
/// use laplace_rs::grid::DirichletBoundary;
/// use laplace_rs::solver::{Scenario, Solver, SolverConfiguration, SorSolver};
///
/// let scenario = Scenario::new(20, DirichletBoundary::default()).unwrap();
/// let result = SorSolver::new(1.8)
///     .solve(&scenario, &SolverConfiguration::default())
///     .unwrap();
///
/// assert!(result.is_converged());
/// assert_eq!(result.get_metadata("omega"), Some("1.8"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SorSolver {
    omega: f64,
}

impl Default for SorSolver {
    /// ω = 1.5
    fn default() -> Self {
        Self::new(Self::DEFAULT_OMEGA)
    }
}

impl SorSolver {
    /// Method name
    pub const NAME: &'static str = "SOR";

    /// Default relaxation factor
    pub const DEFAULT_OMEGA: f64 = 1.5;

    /// Create a solver with relaxation factor `omega`
    pub fn new(omega: f64) -> Self {
        Self { omega }
    }

    /// Solver using the optimal factor for an N×N grid
    pub fn optimal(size: usize) -> Self {
        Self::new(Self::optimal_omega(size))
    }

    /// Optimal relaxation factor for the N×N Dirichlet problem
    pub fn optimal_omega(size: usize) -> f64 {
        let h = 1.0 / (size.max(2) - 1) as f64;
        2.0 / (1.0 + (PI * h).sin())
    }

    /// Relaxation factor
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Reject a non-finite factor, warn outside the convergent range (0, 2)
    pub fn validate(&self) -> Result<()> {
        if !self.omega.is_finite() {
            return Err(LaplaceError::configuration(format!(
                "relaxation factor must be finite, got {}",
                self.omega
            )));
        }
        if self.omega <= 0.0 || self.omega >= 2.0 {
            log::warn!(
                "relaxation factor {} is outside (0, 2); SOR is not expected to converge",
                self.omega
            );
        }
        Ok(())
    }

    fn run(
        &self,
        grid: Grid,
        boundary: &DirichletBoundary,
        config: &SolverConfiguration,
    ) -> Result<SolveResult> {
        let kernel = SorSweep::new(self.omega, &grid);
        let mut result = relax(Self::NAME, grid, boundary, config, kernel)?;
        result.add_metadata("omega", &self.omega.to_string());
        Ok(result)
    }
}

impl Solver for SorSolver {
    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> Result<SolveResult> {
        config.validate()?;
        scenario.validate()?;
        self.validate()?;

        self.run(scenario.initial_grid().clone(), scenario.boundary(), config)
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}

/// Solve with SOR and the default boundary
///
/// `grid` is the initial state and should already carry the boundary.
///
/// # Errors
///
/// Configuration error for a non-positive tolerance or non-finite `omega`;
/// divergence error when the iteration blows up (typically ω ≥ 2).
pub fn sor(grid: Grid, omega: f64, max_iterations: usize, tolerance: f64) -> Result<SolveResult> {
    let config = SolverConfiguration::new(max_iterations, tolerance);
    config.validate()?;

    let solver = SorSolver::new(omega);
    solver.validate()?;
    solver.run(grid, &DirichletBoundary::default(), &config)
}

// =================================================================================================
// Sweep kernel
// =================================================================================================

struct SorSweep {
    omega: f64,
    snapshot: Grid,
}

impl SorSweep {
    fn new(omega: f64, initial: &Grid) -> Self {
        Self {
            omega,
            snapshot: initial.clone(),
        }
    }
}

impl SweepKernel for SorSweep {
    fn sweep(&mut self, grid: &mut Grid) -> f64 {
        let omega = self.omega;
        sweep_in_place(grid, &mut self.snapshot, |old, mean| {
            (1.0 - omega) * old + omega * mean
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::apply_boundary_conditions;
    use crate::solver::gauss_seidel;

    fn initial(n: usize) -> Grid {
        apply_boundary_conditions(Grid::new(n).unwrap())
    }

    #[test]
    fn test_sor_solver_creation() {
        let solver = SorSolver::new(1.7);
        assert_eq!(solver.name(), "SOR");
        assert_eq!(solver.omega(), 1.7);
        assert_eq!(SorSolver::default().omega(), 1.5);
    }

    #[test]
    fn test_omega_one_is_gauss_seidel() {
        let sor_result = sor(initial(10), 1.0, 200, 1e-8).unwrap();
        let gs_result = gauss_seidel(initial(10), 200, 1e-8).unwrap();

        assert_eq!(sor_result.grid, gs_result.grid);
        assert_eq!(sor_result.errors, gs_result.errors);
    }

    #[test]
    fn test_first_update_is_weighted() {
        // Single interior cell: (1 - 1.5) * 0 + 1.5 * 25
        let result = sor(initial(3), 1.5, 1, 1e-12).unwrap();
        assert_eq!(result.grid[(1, 1)], 37.5);
        assert_eq!(result.errors, vec![37.5]);
    }

    #[test]
    fn test_single_interior_cell_converges() {
        let result = sor(initial(3), 1.5, 100, 1e-6).unwrap();
        assert!(result.is_converged());
        assert!((result.grid[(1, 1)] - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_divergent_omega_is_reported() {
        let err = sor(initial(10), 3.0, 5000, 1e-6).unwrap_err();
        assert!(matches!(err, LaplaceError::Divergence { method: "SOR", .. }));
    }

    #[test]
    fn test_non_finite_omega_rejected() {
        let err = sor(initial(4), f64::NAN, 10, 1e-6).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_optimal_omega() {
        let omega = SorSolver::optimal_omega(20);
        assert!(omega > 1.7 && omega < 1.75, "omega = {}", omega);
        assert!(SorSolver::optimal_omega(3) >= 1.0);
    }

    #[test]
    fn test_omega_recorded_in_metadata() {
        let result = sor(initial(5), 1.25, 10, 1e-6).unwrap();
        assert_eq!(result.get_metadata("omega"), Some("1.25"));
        assert_eq!(result.get_metadata("solver"), Some("SOR"));
    }
}
