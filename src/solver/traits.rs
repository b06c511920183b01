//! Solver traits and configuration
//!
//! # Design Philosophy
//!
//! - `Solver` trait: one stable entry point for every relaxation method
//! - `SolverConfiguration`: the stopping rule (iteration cap + tolerance)
//! - `Method`: runtime selection of a method, carrying its own parameters
//!   (only SOR has one)

use std::fmt;

use crate::error::{LaplaceError, Result};
use crate::solver::convergence::SolveResult;
use crate::solver::methods::{GaussSeidelSolver, JacobiSolver, SorSolver};
use crate::solver::scenario::Scenario;

// =================================================================================================
// Solver trait
// =================================================================================================

/// A point-relaxation method for the 5-point Laplace stencil
///
/// # Contract
///
/// - `solve` works on its own copy of the scenario's initial grid; the
///   scenario is never mutated, so one scenario can feed several solvers,
///   sequentially or from different threads.
/// - The returned grid always satisfies the scenario's boundary.
/// - The error sequence has one entry per sweep performed, at most
///   `config.max_iterations`.
/// - Running out of iterations is reported through
///   [`SolveStatus::Exhausted`](crate::solver::SolveStatus::Exhausted), not
///   as an error.
///
/// # Implementing a New Method
///
/// ```rust,ignore
/// struct MySolver;
///
/// impl Solver for MySolver {
///     fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> Result<SolveResult> {
///         config.validate()?;
///         scenario.validate()?;
///         let grid = scenario.initial_grid().clone();
///         relax(self.name(), grid, scenario.boundary(), config, MyKernel::new())
///     }
///
///     fn name(&self) -> &'static str {
///         "My Method"
///     }
/// }
/// ```
pub trait Solver: Send + Sync {
    /// Relax the scenario's initial grid until convergence or exhaustion
    fn solve(&self, scenario: &Scenario, config: &SolverConfiguration) -> Result<SolveResult>;

    /// Human-readable method name
    fn name(&self) -> &'static str;
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Stopping rule shared by all methods
///
/// # Examples
///
/// ```rust
/// use laplace_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::default()
///     .max_iterations(10_000)
///     .tolerance(1e-8);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Hard cap on the number of sweeps
    ///
    /// Zero is accepted and returns the initial grid untouched.
    pub max_iterations: usize,

    /// A solve stops as soon as the L2 change of one sweep drops below this
    pub tolerance: f64,
}

impl Default for SolverConfiguration {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}

impl SolverConfiguration {
    /// Default iteration cap
    pub const DEFAULT_MAX_ITERATIONS: usize = 5000;

    /// Default convergence tolerance
    pub const DEFAULT_TOLERANCE: f64 = 1e-6;

    /// Create a configuration
    pub fn new(max_iterations: usize, tolerance: f64) -> Self {
        Self {
            max_iterations,
            tolerance,
        }
    }

    /// Builder pattern: set the iteration cap
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder pattern: set the tolerance
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validate that the tolerance is a positive finite number
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() {
            return Err(LaplaceError::configuration("tolerance must be finite"));
        }
        if self.tolerance <= 0.0 {
            return Err(LaplaceError::configuration(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

// =================================================================================================
// Method selection
// =================================================================================================

/// Relaxation method, selectable at runtime
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Method {
    /// Update from the previous iterate only
    Jacobi,

    /// In-place update, ascending row-major order
    GaussSeidel,

    /// Over-relaxed Gauss-Seidel with factor `omega`
    Sor {
        /// Relaxation factor
        omega: f64,
    },
}

impl Method {
    /// Method name, identical to the corresponding [`Solver::name`]
    pub fn name(&self) -> &'static str {
        match self {
            Method::Jacobi => JacobiSolver::NAME,
            Method::GaussSeidel => GaussSeidelSolver::NAME,
            Method::Sor { .. } => SorSolver::NAME,
        }
    }

    /// Build the solver for this method
    pub fn solver(&self) -> Box<dyn Solver> {
        match *self {
            Method::Jacobi => Box::new(JacobiSolver::new()),
            Method::GaussSeidel => Box::new(GaussSeidelSolver::new()),
            Method::Sor { omega } => Box::new(SorSolver::new(omega)),
        }
    }

    /// Check the method's own parameters
    pub fn validate(&self) -> Result<()> {
        match self {
            Method::Sor { omega } => SorSolver::new(*omega).validate(),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Sor { omega } => write!(f, "{} (omega = {})", self.name(), omega),
            _ => write!(f, "{}", self.name()),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
