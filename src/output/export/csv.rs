//! CSV export of solver results
//!
//! This module writes error histories and grids to CSV, which can be read
//! by spreadsheets, pandas, MATLAB and most data analysis tools.
//!
//! # Features
//!
//! - **Error histories**: one column per method, padded when methods
//!   converged after a different number of sweeps
//! - **Grids**: N rows × N columns, row 0 first
//! - **Metadata support**: Optional `#` header with run parameters
//! - **Customizable**: Delimiter, precision, decimal separator
//!
//! # Quick Examples
//!
//! ## Error History
//!
//! ```rust,no_run
//! use laplace_rs::output::export::export_error_history_csv;
//! # use laplace_rs::grid::{apply_boundary_conditions, Grid};
//! # use laplace_rs::solver::{jacobi, gauss_seidel};
//! # let grid = apply_boundary_conditions(Grid::new(3).unwrap());
//! # let j = jacobi(grid.clone(), 100, 1e-6).unwrap();
//! # let gs = gauss_seidel(grid, 100, 1e-6).unwrap();
//!
//! export_error_history_csv(&[&j, &gs], "error_history.csv", None).unwrap();
//! ```
//!
//! **Output** (`error_history.csv`):
//! ```csv
//! Iteration,Jacobi,Gauss-Seidel
//! 1,2.500000e1,2.500000e1
//! 2,0.000000e0,0.000000e0
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! let metadata = CsvMetadata::from_run(50, 5000, 1e-6).omega(1.7);
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_grid_csv(&result.grid, "potential_sor.csv", Some(&config))?;
//! ```
//!
//! **Output** (`potential_sor.csv`):
//! ```csv
//! # Laplace Solver Data
//! # Generated: 2026-10-18T09:30:00+00:00
//! # Grid Size: 50
//! # Max Iterations: 5000
//! # Tolerance: 0.000001
//! # Omega: 1.7
//! #
//! 0.000000,100.000000,100.000000,...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::{LaplaceError, Result};
use crate::grid::Grid;
use crate::solver::SolveResult;

// =================================================================================================
// Configuration Structures
// =================================================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use laplace_rs::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// assert!(!config.include_metadata);
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header of the first column of an error history (default: "Iteration")
    pub iteration_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            iteration_header: "Iteration".to_string(),
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }

    /// Reject a delimiter that would collide with the number format
    pub fn validate(&self) -> Result<()> {
        if self.delimiter == self.decimal_separator {
            return Err(LaplaceError::configuration(format!(
                "CSV delimiter and decimal separator must differ, both are '{}'",
                self.delimiter
            )));
        }
        if self.delimiter.is_ascii_digit() || self.delimiter == '-' {
            return Err(LaplaceError::configuration(format!(
                "CSV delimiter '{}' would be ambiguous with numbers",
                self.delimiter
            )));
        }
        Ok(())
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields will be included in the CSV header.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Method name (e.g., "SOR")
    pub method: Option<String>,

    /// Grid size N
    pub grid_size: Option<usize>,

    /// Iteration cap
    pub max_iterations: Option<usize>,

    /// Convergence tolerance
    pub tolerance: Option<f64>,

    /// SOR relaxation factor
    pub omega: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata from the parameters of a run
    pub fn from_run(grid_size: usize, max_iterations: usize, tolerance: f64) -> Self {
        Self {
            grid_size: Some(grid_size),
            max_iterations: Some(max_iterations),
            tolerance: Some(tolerance),
            ..Default::default()
        }
    }

    /// Builder pattern: set the method name
    pub fn method(mut self, method: &str) -> Self {
        self.method = Some(method.to_string());
        self
    }

    /// Builder pattern: set the relaxation factor
    pub fn omega(mut self, omega: f64) -> Self {
        self.omega = Some(omega);
        self
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> Result<()> {
    writeln!(out, "# Laplace Solver Data")?;

    let now = chrono::Utc::now();
    writeln!(out, "# Generated: {}", now.to_rfc3339())?;

    if let Some(method) = &metadata.method {
        writeln!(out, "# Method: {}", method)?;
    }
    if let Some(n) = metadata.grid_size {
        writeln!(out, "# Grid Size: {}", n)?;
    }
    if let Some(max) = metadata.max_iterations {
        writeln!(out, "# Max Iterations: {}", max)?;
    }
    if let Some(tol) = metadata.tolerance {
        writeln!(out, "# Tolerance: {}", tol)?;
    }
    if let Some(omega) = metadata.omega {
        writeln!(out, "# Omega: {}", omega)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;
    Ok(())
}

fn write_metadata_if_enabled<W: Write>(out: &mut W, config: &CsvConfig) -> Result<()> {
    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(out, metadata)?;
        }
    }
    Ok(())
}

/// Replace '.' by the configured decimal separator
fn localise(formatted: String, config: &CsvConfig) -> String {
    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Fixed-point number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    localise(format!("{:.prec$}", value, prec = config.precision), config)
}

/// Scientific notation, used for error norms that span many decades
fn format_scientific(value: f64, config: &CsvConfig) -> String {
    localise(format!("{:.prec$e}", value, prec = config.precision), config)
}

// =================================================================================================
// Export Functions
// =================================================================================================

/// Export the error history of several solves side by side
///
/// The first column is the 1-based iteration index, followed by one column
/// per result, headed by its method name. There is one row per iteration up
/// to the longest sequence; a method that stopped earlier leaves its cells
/// empty.
///
/// # Errors
///
/// - Empty `results`
/// - Non-finite error values
/// - Invalid delimiter
/// - File creation or write errors
pub fn export_error_history_csv(
    results: &[&SolveResult],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<()> {
    // ============================= Validation =============================

    if results.is_empty() {
        return Err(LaplaceError::configuration(
            "Empty data: at least one result is required",
        ));
    }

    if let Some(bad) = results.iter().find(|r| r.errors.iter().any(|e| !e.is_finite())) {
        return Err(LaplaceError::configuration(format!(
            "Invalid data: NaN or Inf in the {} error history",
            bad.method
        )));
    }

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);
    configuration.validate()?;

    let delimiter = configuration.delimiter.to_string();

    // ============================= Write ==================================

    let mut out = BufWriter::new(File::create(output_path)?);
    write_metadata_if_enabled(&mut out, configuration)?;

    let mut header = vec![configuration.iteration_header.clone()];
    header.extend(results.iter().map(|r| r.method.to_string()));
    writeln!(out, "{}", header.join(&delimiter))?;

    let rows = results.iter().map(|r| r.errors.len()).max().unwrap_or(0);

    for k in 0..rows {
        let mut line = vec![(k + 1).to_string()];
        line.extend(results.iter().map(|r| {
            r.errors
                .get(k)
                .map(|&e| format_scientific(e, configuration))
                .unwrap_or_default()
        }));
        writeln!(out, "{}", line.join(&delimiter))?;
    }

    out.flush()?;
    log::debug!("error history ({} rows) written to {}", rows, output_path);
    Ok(())
}

/// Export a grid, one CSV row per grid row, row 0 first
///
/// No header line is written besides the optional metadata.
///
/// # Errors
///
/// - Non-finite grid values
/// - Invalid delimiter
/// - File creation or write errors
pub fn export_grid_csv(
    grid: &Grid,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<()> {
    if !grid.is_finite() {
        return Err(LaplaceError::configuration(
            "Invalid data: NaN or Inf detected in grid",
        ));
    }

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);
    configuration.validate()?;

    let delimiter = configuration.delimiter.to_string();

    let mut out = BufWriter::new(File::create(output_path)?);
    write_metadata_if_enabled(&mut out, configuration)?;

    for row in grid.to_rows() {
        let line: Vec<String> = row
            .iter()
            .map(|&v| format_number(v, configuration))
            .collect();
        writeln!(out, "{}", line.join(&delimiter))?;
    }

    out.flush()?;
    log::debug!("{n}x{n} grid written to {path}", n = grid.size(), path = output_path);
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
