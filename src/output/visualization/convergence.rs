//! Convergence plots
//!
//! Error norm vs iteration for one or more solves, on a logarithmic y axis.
//! A relaxation method converges geometrically, so on a log scale each curve
//! becomes roughly a straight line whose slope is the log of the spectral
//! radius; the steeper the line, the faster the method.
//!
//! # Zero errors
//!
//! A sweep can leave the grid exactly unchanged (error 0.0), which has no
//! logarithm. Such points are drawn at [`ERROR_FLOOR`].

use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use super::config::{PlotConfig, NO_TITLE};
use crate::error::{LaplaceError, Result};
use crate::solver::SolveResult;

/// Smallest error drawn on the log axis
pub const ERROR_FLOOR: f64 = 1e-16;

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Legend label of a result: the method name, plus ω for SOR
fn series_label(result: &SolveResult) -> String {
    match result.get_metadata("omega") {
        Some(omega) => format!("{} (omega = {})", result.method, omega),
        None => result.method.to_string(),
    }
}

/// `(iteration, error)` points, 1-based, errors clamped to the floor
fn series_points(errors: &[f64]) -> Vec<(f64, f64)> {
    errors
        .iter()
        .enumerate()
        .map(|(k, e)| ((k + 1) as f64, e.max(ERROR_FLOOR)))
        .collect()
}

/// Axis ranges covering every series: `(max_iteration, min_error, max_error)`
fn axis_bounds(series: &[(String, Vec<(f64, f64)>)]) -> (f64, f64, f64) {
    let max_iteration = series
        .iter()
        .map(|(_, points)| points.len())
        .max()
        .unwrap_or(1)
        .max(2) as f64;

    let (lo, hi) = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|&(_, e)| e))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), e| (lo.min(e), hi.max(e)));

    // One decade of headroom on each side; also keeps the range non-empty.
    (max_iteration, lo / 10.0, hi * 10.0)
}

// =================================================================================================
// Public API
// =================================================================================================

/// Plot the error history of several solves on one log-scale chart
///
/// One line per result, labelled with the method name.
///
/// # Arguments
///
/// * `results`     - Solves to compare (typically Jacobi, Gauss-Seidel, SOR)
/// * `output_path` - Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      - Optional plot configuration; `None` uses
///   [`PlotConfig::convergence`]
///
/// # Errors
///
/// [`LaplaceError::Plot`] when `results` is empty, when every error
/// sequence is empty, or when the backend cannot write to `output_path`.
///
/// # Example
///
/// ```rust,no_run
/// use laplace_rs::comparison::compare;
/// use laplace_rs::grid::DirichletBoundary;
/// use laplace_rs::output::visualization::plot_convergence;
/// use laplace_rs::solver::{Scenario, SolverConfiguration};
///
/// let scenario = Scenario::new(50, DirichletBoundary::default()).unwrap();
/// let comparison = compare(&scenario, &SolverConfiguration::default(), 1.7).unwrap();
///
/// plot_convergence(&comparison.results(), "error_comparison.png", None).unwrap();
/// ```
pub fn plot_convergence(
    results: &[&SolveResult],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<()> {
    let series: Vec<(String, Vec<(f64, f64)>)> = results
        .iter()
        .map(|r| (series_label(r), series_points(&r.errors)))
        .collect();

    if series.iter().all(|(_, points)| points.is_empty()) {
        return Err(LaplaceError::Plot("no error history to plot".to_string()));
    }

    let default_config = PlotConfig::convergence(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let bounds = axis_bounds(&series);

    let ext = Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    let rendered = match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_convergence_impl(backend, &series, config, bounds)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_convergence_impl(backend, &series, config, bounds)
        }
    };

    rendered.map_err(|e| LaplaceError::Plot(e.to_string()))?;
    log::debug!("convergence plot written to {}", output_path);
    Ok(())
}

// =================================================================================================
// Private Plot Implementation
// =================================================================================================

/// Render the log-scale convergence chart with the given drawing backend
fn plot_convergence_impl<DB: DrawingBackend>(
    backend: DB,
    series: &[(String, Vec<(f64, f64)>)],
    config: &PlotConfig,
    (max_iteration, min_error, max_error): (f64, f64, f64),
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(80)
        .build_cartesian_2d(1.0..max_iteration, (min_error..max_error).log_scale())?;

    let iteration_label = |x: &f64| format!("{:.0}", x);
    let error_label = |y: &f64| format!("{:.0e}", y);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .x_label_formatter(&iteration_label)
        .y_label_formatter(&error_label);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    for (idx, (label, points)) in series.iter().enumerate() {
        if points.is_empty() {
            continue;
        }
        let color = config.get_method_color(idx);

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{apply_boundary_conditions, Grid};
    use crate::solver::{gauss_seidel, jacobi, sor};

    fn initial(n: usize) -> Grid {
        apply_boundary_conditions(Grid::new(n).unwrap())
    }

    #[test]
    fn test_series_points_clamp_zero() {
        let points = series_points(&[25.0, 0.0]);
        assert_eq!(points, vec![(1.0, 25.0), (2.0, ERROR_FLOOR)]);
    }

    #[test]
    fn test_axis_bounds() {
        let series = vec![
            ("a".to_string(), series_points(&[10.0, 1.0, 0.1])),
            ("b".to_string(), series_points(&[100.0])),
        ];
        let (max_iteration, lo, hi) = axis_bounds(&series);
        assert_eq!(max_iteration, 3.0);
        assert!((lo - 0.01).abs() < 1e-15);
        assert!((hi - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_series_label_includes_omega() {
        let result = sor(initial(4), 1.5, 10, 1e-6).unwrap();
        assert_eq!(series_label(&result), "SOR (omega = 1.5)");

        let result = jacobi(initial(4), 10, 1e-6).unwrap();
        assert_eq!(series_label(&result), "Jacobi");
    }

    #[test]
    fn test_plot_convergence_png() {
        let j = jacobi(initial(8), 500, 1e-6).unwrap();
        let gs = gauss_seidel(initial(8), 500, 1e-6).unwrap();
        let s = sor(initial(8), 1.5, 500, 1e-6).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("convergence.png");
        plot_convergence(&[&j, &gs, &s], path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_convergence_svg_with_zero_error() {
        // N = 3 ends on an exact zero error.
        let j = jacobi(initial(3), 100, 1e-6).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("convergence.svg");
        plot_convergence(&[&j], path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_convergence_empty_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("convergence.png");
        let err = plot_convergence(&[], path.to_str().unwrap(), None).unwrap_err();
        assert!(matches!(err, LaplaceError::Plot(_)));

        let untouched = jacobi(initial(4), 0, 1e-6).unwrap();
        let err = plot_convergence(&[&untouched], path.to_str().unwrap(), None).unwrap_err();
        assert!(matches!(err, LaplaceError::Plot(_)));
    }
}
