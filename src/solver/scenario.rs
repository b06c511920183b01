//! Problem definition
//!
//! A scenario combines the initial grid with the Dirichlet boundary that is
//! re-imposed after every sweep.
use crate::error::{LaplaceError, Result};
use crate::grid::{DirichletBoundary, Grid};

/// Relaxation scenario
///
/// Defines a specific case to solve:
/// - Initial grid (edges fixed, interior zero)
/// - Boundary conditions (re-applied after every sweep)
///
/// # Design
///
/// The same scenario can be solved with different methods. Solvers only
/// borrow it and clone the initial grid, so every method starts from the
/// same state and no run can disturb another.
///
/// # Examples
///
/// ```rust
/// use laplace_rs::grid::DirichletBoundary;
/// use laplace_rs::solver::{GaussSeidelSolver, JacobiSolver, Scenario, Solver, SolverConfiguration};
///
/// let scenario = Scenario::new(10, DirichletBoundary::default()).unwrap();
/// let config = SolverConfiguration::default();
///
/// let jacobi = JacobiSolver::new().solve(&scenario, &config).unwrap();
/// let gauss_seidel = GaussSeidelSolver::new().solve(&scenario, &config).unwrap();
///
/// assert!(gauss_seidel.iterations() < jacobi.iterations());
/// ```
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Boundary re-imposed after every sweep
    boundary: DirichletBoundary,

    /// Starting grid
    initial: Grid,
}

impl Scenario {
    /// Zero-filled `size`×`size` grid with `boundary` applied
    ///
    /// # Errors
    ///
    /// Configuration error when `size < 3` or a boundary value is not finite.
    pub fn new(size: usize, boundary: DirichletBoundary) -> Result<Self> {
        boundary.validate()?;
        let initial = Grid::with_boundary(size, &boundary)?;
        Ok(Self { boundary, initial })
    }

    /// Start from an existing grid
    ///
    /// Interior cells are kept as the initial guess and may hold any finite
    /// value. Edge cells are overwritten with `boundary` before the scenario
    /// is stored, so the first sweep already sees the prescribed edges.
    pub fn from_grid(mut initial: Grid, boundary: DirichletBoundary) -> Result<Self> {
        boundary.validate()?;
        if !initial.is_finite() {
            return Err(LaplaceError::configuration(
                "initial grid contains NaN or infinite values",
            ));
        }
        if !boundary.is_satisfied_by(&initial) {
            log::debug!("initial grid edges differ from the boundary, overwriting them");
            boundary.apply(&mut initial);
        }
        Ok(Self { boundary, initial })
    }

    /// Verifying scenario content
    pub fn validate(&self) -> Result<()> {
        self.boundary.validate()
    }

    /// Points per side
    pub fn size(&self) -> usize {
        self.initial.size()
    }

    /// Boundary conditions
    pub fn boundary(&self) -> &DirichletBoundary {
        &self.boundary
    }

    /// Starting grid
    pub fn initial_grid(&self) -> &Grid {
        &self.initial
    }

    /// Consume the scenario and return its starting grid
    pub fn into_grid(self) -> Grid {
        self.initial
    }
}

// ================================================================================================
// Tests
// ================================================================================================
