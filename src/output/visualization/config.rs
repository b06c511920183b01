//! Plot configuration shared across visualization modules
//!
//! This module defines the configuration used by both the convergence plot
//! and the potential heatmap.

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `method_colors`: Optional colors for multi-method plots (one per method)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust
/// use laplace_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::convergence("N = 50");
/// config.width = 1920;
/// config.height = 1080;
/// config.method_colors = Some(vec![BLACK, BLUE, RED]);
///
/// assert_eq!(config.ylabel, "Error (L2 norm)");
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: auto-set by plot type)
    pub ylabel: String,

    /// Optional colors for multi-method plots (one per method)
    ///
    /// If None, uses default palette: [BLUE, GREEN, RED, MAGENTA, ...]
    pub method_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(),
            ylabel: String::new(),
            method_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Config for convergence curves (error vs iteration, log scale)
    ///
    /// ```rust
    /// use laplace_rs::output::visualization::{PlotConfig, NO_TITLE};
    ///
    /// let config = PlotConfig::convergence(NO_TITLE);
    /// assert_eq!(config.title, "Convergence Comparison");
    /// assert_eq!(config.xlabel, "Iteration");
    /// ```
    pub fn convergence(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "Iteration".to_string();
        config.ylabel = "Error (L2 norm)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Convergence Comparison".to_string());
        config
    }

    /// Config for the potential heatmap
    ///
    /// Square canvas, no mesh lines over the cells.
    pub fn heatmap(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.width = 900;
        config.height = 768;
        config.xlabel = "Column".to_string();
        config.ylabel = "Row".to_string();
        config.show_grid = false;
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Potential Distribution".to_string());
        config
    }

    /// Get color for the method at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_method_color(&self, method_index: usize) -> RGBColor {
        if let Some(colors) = &self.method_colors {
            if method_index < colors.len() {
                return colors[method_index];
            }
        }

        const DEFAULT_COLORS: [RGBColor; 6] = [
            BLUE,
            GREEN,
            RED,
            MAGENTA,
            CYAN,
            RGBColor(255, 165, 0), // Orange
        ];

        DEFAULT_COLORS[method_index % DEFAULT_COLORS.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
