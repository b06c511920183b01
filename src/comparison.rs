//! Side-by-side comparison of the three relaxation methods
//!
//! [`compare`] runs Jacobi, Gauss-Seidel and SOR on the same [`Scenario`]
//! with the same stopping rule. Every solver works on its own copy of the
//! initial grid, so the runs are independent; with the `parallel` feature
//! they are dispatched with `rayon::join`.
//!
//! # Example
//!
//! ```rust
//! use laplace_rs::comparison::compare;
//! use laplace_rs::grid::DirichletBoundary;
//! use laplace_rs::solver::{Scenario, SolverConfiguration};
//!
//! let scenario = Scenario::new(20, DirichletBoundary::default()).unwrap();
//! let comparison = compare(&scenario, &SolverConfiguration::default(), 1.8).unwrap();
//!
//! assert_eq!(comparison.fastest().method, "SOR");
//! println!("{}", comparison.summary());
//! ```

use std::fmt;

use crate::error::Result;
use crate::solver::{
    GaussSeidelSolver, JacobiSolver, Scenario, SolveResult, Solver, SolverConfiguration, SorSolver,
};

/// Results of the three methods on one scenario
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Grid size the methods were run on
    pub size: usize,

    /// Relaxation factor used for SOR
    pub omega: f64,

    /// Jacobi result
    pub jacobi: SolveResult,

    /// Gauss-Seidel result
    pub gauss_seidel: SolveResult,

    /// SOR result
    pub sor: SolveResult,
}

impl Comparison {
    /// The three results, in the order Jacobi, Gauss-Seidel, SOR
    pub fn results(&self) -> [&SolveResult; 3] {
        [&self.jacobi, &self.gauss_seidel, &self.sor]
    }

    /// Converged result with the fewest sweeps
    ///
    /// Falls back to the result with the smallest final error when no method
    /// converged. Ties go to the earlier method.
    pub fn fastest(&self) -> &SolveResult {
        let converged = self
            .results()
            .into_iter()
            .filter(|r| r.is_converged())
            .min_by_key(|r| r.iterations());

        converged.unwrap_or_else(|| {
            self.results()
                .into_iter()
                .min_by(|a, b| {
                    let ea = a.final_error().unwrap_or(f64::INFINITY);
                    let eb = b.final_error().unwrap_or(f64::INFINITY);
                    ea.total_cmp(&eb)
                })
                .unwrap_or(&self.jacobi)
        })
    }

    /// Plain-text table: method, iterations, final error, status
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results for a {n}x{n} grid", n = self.size)?;
        writeln!(f, "{:<22} {:>10} {:>14}  {}", "Method", "Iterations", "Final error", "Status")?;
        writeln!(f, "{}", "-".repeat(60))?;

        for result in self.results() {
            let label = if result.method == SorSolver::NAME {
                format!("{} (omega = {})", result.method, self.omega)
            } else {
                result.method.to_string()
            };
            let error = result
                .final_error()
                .map(|e| format!("{:.3e}", e))
                .unwrap_or_else(|| "-".to_string());
            let status = if result.is_converged() { "converged" } else { "not converged" };

            writeln!(
                f,
                "{:<22} {:>10} {:>14}  {}",
                label,
                result.iterations(),
                error,
                status
            )?;
        }
        Ok(())
    }
}

/// Run the three methods on `scenario`
///
/// # Errors
///
/// The first error among the three runs (configuration or divergence).
pub fn compare(scenario: &Scenario, config: &SolverConfiguration, omega: f64) -> Result<Comparison> {
    let sor_solver = SorSolver::new(omega);
    sor_solver.validate()?;

    let (jacobi, (gauss_seidel, sor)) = run_all(scenario, config, &sor_solver);

    log::debug!("comparison on {n}x{n} grid finished", n = scenario.size());

    Ok(Comparison {
        size: scenario.size(),
        omega,
        jacobi: jacobi?,
        gauss_seidel: gauss_seidel?,
        sor: sor?,
    })
}

type RunTriple = (Result<SolveResult>, (Result<SolveResult>, Result<SolveResult>));

#[cfg(feature = "parallel")]
fn run_all(scenario: &Scenario, config: &SolverConfiguration, sor: &SorSolver) -> RunTriple {
    rayon::join(
        || JacobiSolver::new().solve(scenario, config),
        || {
            rayon::join(
                || GaussSeidelSolver::new().solve(scenario, config),
                || sor.solve(scenario, config),
            )
        },
    )
}

#[cfg(not(feature = "parallel"))]
fn run_all(scenario: &Scenario, config: &SolverConfiguration, sor: &SorSolver) -> RunTriple {
    (
        JacobiSolver::new().solve(scenario, config),
        (
            GaussSeidelSolver::new().solve(scenario, config),
            sor.solve(scenario, config),
        ),
    )
}

// =================================================================================================
// Tests
// =================================================================================================
