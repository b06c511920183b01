//! Error types
//!
//! Every fallible operation of the crate returns [`LaplaceError`]. The
//! taxonomy is deliberately small:
//!
//! - **Configuration errors** are raised eagerly, before any sweep runs
//!   (grid too small, non-positive tolerance, non-finite relaxation factor).
//! - **Divergence** is raised when a sweep produces a non-finite error norm,
//!   so that a NaN-filled grid is never returned as if it had converged.
//! - **I/O, plot and parse errors** only come from the outer layers
//!   (`output`, `cli`), never from the solvers.
//!
//! Running out of iterations is *not* an error: see
//! [`SolveStatus::Exhausted`](crate::solver::SolveStatus::Exhausted).

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, LaplaceError>;

/// Primary error type
#[derive(Debug, thiserror::Error)]
pub enum LaplaceError {
    /// The grid has no interior point
    #[error("grid size must be at least 3 (one interior point), got {size}")]
    InvalidGridSize {
        /// Requested number of points per side
        size: usize,
    },

    /// A solver parameter is out of its admissible range
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A sweep produced a non-finite error norm
    #[error("{method} diverged at iteration {iteration} (error norm = {error})")]
    Divergence {
        /// Name of the relaxation method
        method: &'static str,
        /// 1-based iteration at which the non-finite norm was observed
        iteration: usize,
        /// The offending error norm (NaN or ±Inf)
        error: f64,
    },

    /// Filesystem failure while writing results
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure inside the plotting backend
    #[error("plot error: {0}")]
    Plot(String),

    /// Invalid user input on the command line
    #[error("could not parse {0}")]
    Parse(String),
}

impl LaplaceError {
    /// Shorthand for [`LaplaceError::InvalidConfiguration`]
    pub fn configuration(message: impl Into<String>) -> Self {
        LaplaceError::InvalidConfiguration(message.into())
    }

    /// `true` for errors raised before any computation started
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LaplaceError::InvalidGridSize { .. } | LaplaceError::InvalidConfiguration(_)
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
