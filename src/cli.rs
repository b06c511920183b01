//! Command-line interface
//!
//! The `laplace` binary takes its run parameters (grid size, iteration cap,
//! tolerance, relaxation factor) from flags when given, and asks for the
//! missing ones on stdin. An empty answer keeps the suggested default.
//!
//! ```text
//! $ laplace --size 80 --output out
//! Enter maximum iterations [5000]:
//! Enter tolerance [0.000001]: 1e-8
//! Enter SOR relaxation factor omega [1.7]:
//! ```
//!
//! Prompting is written against `BufRead`/`Write` rather than the process
//! stdin/stdout so it can be driven from tests.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use crate::error::{LaplaceError, Result};
use crate::grid::{DirichletBoundary, Grid};
use crate::solver::{Scenario, SolverConfiguration, SorSolver};

// =================================================================================================
// Command-line options
// =================================================================================================

/// Flags of the `laplace` binary
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "laplace", version, about = "2D Laplace equation solver using iterative methods")]
pub struct CliOptions {
    /// Root directory for `plots/` and `data/`
    #[arg(short, long, default_value = "results")]
    pub output: PathBuf,

    /// Skip the CSV export (plots are still written)
    #[arg(long)]
    pub no_export: bool,

    /// Grid size N, points per side (at least 3)
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Maximum number of sweeps per method (at least 1)
    #[arg(short, long)]
    pub max_iterations: Option<usize>,

    /// Convergence tolerance on the L2 change between sweeps
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// SOR relaxation factor
    #[arg(short = 'w', long)]
    pub omega: Option<f64>,

    /// Do not prompt; parameters not given as flags take their default
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl CliOptions {
    /// Directory receiving the images
    pub fn plots_dir(&self) -> PathBuf {
        self.output.join("plots")
    }

    /// Directory receiving the CSV files
    pub fn data_dir(&self) -> PathBuf {
        self.output.join("data")
    }
}

// =================================================================================================
// Run parameters
// =================================================================================================

/// Parameters of one comparison run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunParameters {
    /// Points per side
    pub grid_size: usize,

    /// Sweep cap per method
    pub max_iterations: usize,

    /// Convergence tolerance
    pub tolerance: f64,

    /// SOR relaxation factor
    pub omega: f64,
}

impl Default for RunParameters {
    /// N = 50, 5000 iterations, tolerance 1e-6, ω = 1.7
    fn default() -> Self {
        Self {
            grid_size: 50,
            max_iterations: SolverConfiguration::DEFAULT_MAX_ITERATIONS,
            tolerance: SolverConfiguration::DEFAULT_TOLERANCE,
            omega: 1.7,
        }
    }
}

impl RunParameters {
    /// Validate user input
    ///
    /// Stricter than the solvers themselves: zero iterations is a valid
    /// solver configuration but never a useful request from a user.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size < Grid::MIN_SIZE {
            return Err(LaplaceError::InvalidGridSize {
                size: self.grid_size,
            });
        }
        if self.max_iterations == 0 {
            return Err(LaplaceError::configuration(
                "maximum iterations must be at least 1",
            ));
        }
        self.solver_configuration().validate()?;
        SorSolver::new(self.omega).validate()
    }

    /// Stopping rule for the solvers
    pub fn solver_configuration(&self) -> SolverConfiguration {
        SolverConfiguration::new(self.max_iterations, self.tolerance)
    }

    /// Scenario with the default boundary (top 100, other edges 0)
    pub fn scenario(&self) -> Result<Scenario> {
        Scenario::new(self.grid_size, DirichletBoundary::default())
    }
}

// =================================================================================================
// Prompting
// =================================================================================================

/// Ask for one value, returning `default` on an empty line or end of input
///
/// The question is printed as `Enter <name> [<default>]: `.
///
/// # Errors
///
/// [`LaplaceError::Parse`] when the answer does not parse as `T`,
/// [`LaplaceError::Io`] when reading or writing fails.
///
/// # Example
///
/// ```rust
/// use laplace_rs::cli::prompt;
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("\n");
/// let mut output = Vec::new();
///
/// let n: usize = prompt(&mut input, &mut output, "grid size N", 50).unwrap();
/// assert_eq!(n, 50);
/// assert_eq!(String::from_utf8(output).unwrap(), "Enter grid size N [50]: ");
/// ```
pub fn prompt<T, R, W>(input: &mut R, output: &mut W, name: &str, default: T) -> Result<T>
where
    T: FromStr + Display,
    R: BufRead,
    W: Write,
{
    write!(output, "Enter {} [{}]: ", name, default)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line.trim();
    if answer.is_empty() {
        return Ok(default);
    }

    answer
        .parse()
        .map_err(|_| LaplaceError::Parse(format!("{} from '{}'", name, answer)))
}

/// Take a flag value if present, otherwise prompt (or use the default with `--yes`)
fn resolve<T, R, W>(
    given: Option<T>,
    interactive: bool,
    input: &mut R,
    output: &mut W,
    name: &str,
    default: T,
) -> Result<T>
where
    T: FromStr + Display,
    R: BufRead,
    W: Write,
{
    match given {
        Some(value) => Ok(value),
        None if interactive => prompt(input, output, name, default),
        None => Ok(default),
    }
}

/// Collect and validate the run parameters
pub fn read_parameters<R: BufRead, W: Write>(
    options: &CliOptions,
    input: &mut R,
    output: &mut W,
) -> Result<RunParameters> {
    let defaults = RunParameters::default();
    let interactive = !options.yes;

    let parameters = RunParameters {
        grid_size: resolve(
            options.size,
            interactive,
            input,
            output,
            "grid size N",
            defaults.grid_size,
        )?,
        max_iterations: resolve(
            options.max_iterations,
            interactive,
            input,
            output,
            "maximum iterations",
            defaults.max_iterations,
        )?,
        tolerance: resolve(
            options.tolerance,
            interactive,
            input,
            output,
            "tolerance",
            defaults.tolerance,
        )?,
        omega: resolve(
            options.omega,
            interactive,
            input,
            output,
            "SOR relaxation factor omega",
            defaults.omega,
        )?,
    };

    parameters.validate()?;
    Ok(parameters)
}

// =================================================================================================
// Tests
// =================================================================================================
