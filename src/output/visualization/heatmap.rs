//! Potential heatmap
//!
//! Draws a solved grid as coloured cells with a colorbar on the right. Row 0
//! (the heated top edge) is drawn at the top of the image, so the picture
//! matches the physical layout of the plate.
//!
//! # Colormap
//!
//! [`hot_colormap`] follows the classic "hot" map: black → red → yellow →
//! white, the red channel saturating first, then green, then blue.

use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use super::config::{PlotConfig, NO_TITLE};
use crate::error::{LaplaceError, Result};
use crate::grid::Grid;

/// Number of colour steps drawn in the colorbar
const COLORBAR_STEPS: usize = 128;

/// Share of the canvas width given to the heatmap (the rest holds the colorbar)
const HEATMAP_WIDTH_RATIO: f64 = 0.82;

// =================================================================================================
// Colormap
// =================================================================================================

/// Map `t ∈ [0, 1]` to the "hot" colormap
///
/// Values outside the unit interval are clamped.
///
/// ```rust
/// use laplace_rs::output::visualization::hot_colormap;
/// use plotters::style::RGBColor;
///
/// assert_eq!(hot_colormap(0.0), RGBColor(0, 0, 0));
/// assert_eq!(hot_colormap(1.0), RGBColor(255, 255, 255));
/// ```
pub fn hot_colormap(t: f64) -> RGBColor {
    const RED_END: f64 = 0.365;
    const GREEN_END: f64 = 0.746;

    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

    let channel = |x: f64| (x.clamp(0.0, 1.0) * 255.0).round() as u8;

    let r = t / RED_END;
    let g = (t - RED_END) / (GREEN_END - RED_END);
    let b = (t - GREEN_END) / (1.0 - GREEN_END);

    RGBColor(channel(r), channel(g), channel(b))
}

/// Normalise `value` into `[0, 1]` over `[min, max]`; a flat range maps to 0
fn normalise(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span > 0.0 {
        (value - min) / span
    } else {
        0.0
    }
}

// =================================================================================================
// Public API
// =================================================================================================

/// Plot a grid as a heatmap with a colorbar
///
/// # Arguments
///
/// * `grid`        - Grid to draw (typically the SOR result)
/// * `output_path` - Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      - Optional plot configuration; `None` uses
///   [`PlotConfig::heatmap`]
///
/// # Errors
///
/// [`LaplaceError::Plot`] when the grid holds non-finite values or the
/// backend cannot write to `output_path`.
///
/// # Example
///
/// ```rust,no_run
/// use laplace_rs::grid::DirichletBoundary;
/// use laplace_rs::output::visualization::plot_heatmap;
/// use laplace_rs::solver::{Scenario, Solver, SolverConfiguration, SorSolver};
///
/// let scenario = Scenario::new(50, DirichletBoundary::default()).unwrap();
/// let result = SorSolver::new(1.7).solve(&scenario, &SolverConfiguration::default()).unwrap();
///
/// plot_heatmap(&result.grid, "potential_heatmap.png", None).unwrap();
/// ```
pub fn plot_heatmap(grid: &Grid, output_path: &str, config: Option<&PlotConfig>) -> Result<()> {
    if !grid.is_finite() {
        return Err(LaplaceError::Plot("grid contains NaN or infinite values".to_string()));
    }

    let default_config = PlotConfig::heatmap(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let ext = Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    let rendered = match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_heatmap_impl(backend, grid, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_heatmap_impl(backend, grid, config)
        }
    };

    rendered.map_err(|e| LaplaceError::Plot(e.to_string()))?;
    log::debug!("heatmap written to {}", output_path);
    Ok(())
}

// =================================================================================================
// Private Plot Implementation
// =================================================================================================

/// Render heatmap and colorbar with the given drawing backend
fn plot_heatmap_impl<DB: DrawingBackend>(
    backend: DB,
    grid: &Grid,
    config: &PlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let n = grid.size();
    let extent = n as f64;
    let (min, max) = grid.min_max();

    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let split = (config.width as f64 * HEATMAP_WIDTH_RATIO) as i32;
    let (map_area, bar_area) = root.split_horizontally(split);

    // ── 1. Cells ─────────────────────────────────────────────────────────────
    let mut chart = ChartBuilder::on(&map_area)
        .caption(&config.title, ("sans-serif", 36).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(0.0..extent, 0.0..extent)?;

    let column_label = |x: &f64| format!("{:.0}", x);
    let row_label = |y: &f64| format!("{:.0}", extent - y);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .x_label_formatter(&column_label)
        .y_label_formatter(&row_label);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    chart.draw_series((0..n).flat_map(|i| {
        (0..n).map(move |j| {
            let color = hot_colormap(normalise(grid[(i, j)], min, max));
            let top = (n - i) as f64;
            Rectangle::new(
                [(j as f64, top - 1.0), (j as f64 + 1.0, top)],
                color.filled(),
            )
        })
    }))?;

    // ── 2. Colorbar ──────────────────────────────────────────────────────────
    let (bar_min, bar_max) = if max > min { (min, max) } else { (min, min + 1.0) };
    let step = (bar_max - bar_min) / COLORBAR_STEPS as f64;

    let mut bar = ChartBuilder::on(&bar_area)
        .margin_top(70)
        .margin_bottom(60)
        .margin_right(15)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, bar_min..bar_max)?;

    bar.configure_mesh()
        .disable_mesh()
        .x_labels(0)
        .y_desc("Potential")
        .draw()?;

    bar.draw_series((0..COLORBAR_STEPS).map(|k| {
        let lo = bar_min + k as f64 * step;
        let color = hot_colormap(normalise(lo + 0.5 * step, bar_min, bar_max));
        Rectangle::new([(0.0, lo), (1.0, lo + step)], color.filled())
    }))?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
