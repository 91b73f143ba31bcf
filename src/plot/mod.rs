//! Chart rendering for performance profiles.
//!
//! Draws one curve per algorithm with the `plotters` crate: x-axis is the
//! tolerance θ, y-axis the success fraction p. Line colors, line styles
//! and marker shapes cycle through fixed palettes by algorithm index.
//! The output format follows the file extension (.svg, .png, .bmp, .jpg).
//!
//! Rendering is stateless: the canvas is created, drawn and written
//! entirely within the call.

use std::path::Path;

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf32;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use serde::{Deserialize, Serialize};

use crate::error::{PerfilarError, Result};
use crate::primitives::Matrix;
use crate::profile::PerformanceProfile;

/// Presentation options for a rendered profile chart.
///
/// # Examples
///
/// ```
/// use perfilar::plot::PlotConfig;
///
/// let config = PlotConfig::new()
///     .with_file_name("comparison.svg")
///     .with_legend(vec!["bisection", "newton"])
///     .with_mark_every(5);
/// assert_eq!(config.n_intervals, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Output path; the extension selects the image format.
    pub file_name: String,
    /// Legend labels, one per algorithm. No legend is drawn when absent.
    pub alg_legend: Option<Vec<String>>,
    /// Number of θ samples used by [`performance_profile`].
    pub n_intervals: usize,
    /// Curve stroke width in pixels.
    pub line_width: u32,
    /// Marker diameter in pixels.
    pub marker_size: u32,
    /// Draw a marker every n-th θ sample. Useful when `n_intervals` is
    /// large, to keep the chart readable.
    pub mark_every: usize,
    /// Optional chart caption.
    pub caption: Option<String>,
    /// Canvas size in pixels (width, height).
    pub size: (u32, u32),
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            file_name: "plot.svg".to_string(),
            alg_legend: None,
            n_intervals: 100,
            line_width: 2,
            marker_size: 12,
            mark_every: 1,
            caption: None,
            size: (1000, 700),
        }
    }
}

impl PlotConfig {
    /// Creates a config with default presentation options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output path.
    #[must_use]
    pub fn with_file_name(mut self, file_name: &str) -> Self {
        self.file_name = file_name.to_string();
        self
    }

    /// Sets legend labels, one per algorithm.
    #[must_use]
    pub fn with_legend<S: Into<String>>(mut self, labels: Vec<S>) -> Self {
        self.alg_legend = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the number of θ samples.
    #[must_use]
    pub fn with_n_intervals(mut self, n_intervals: usize) -> Self {
        self.n_intervals = n_intervals;
        self
    }

    /// Sets the curve stroke width.
    #[must_use]
    pub fn with_line_width(mut self, line_width: u32) -> Self {
        self.line_width = line_width;
        self
    }

    /// Sets the marker diameter.
    #[must_use]
    pub fn with_marker_size(mut self, marker_size: u32) -> Self {
        self.marker_size = marker_size;
        self
    }

    /// Sets the marker stride.
    #[must_use]
    pub fn with_mark_every(mut self, mark_every: usize) -> Self {
        self.mark_every = mark_every;
        self
    }

    /// Sets the chart caption.
    #[must_use]
    pub fn with_caption(mut self, caption: &str) -> Self {
        self.caption = Some(caption.to_string());
        self
    }

    /// Sets the canvas size in pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }
}

// Color cycle, matplotlib tab10 order.
const LINE_COLORS: [RGBColor; 8] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
];

#[derive(Debug, Clone, Copy)]
enum LineStyle {
    Solid,
    Dashed { dash: u32, gap: u32 },
}

// Solid, dashed, dotted, long-dash cycle by algorithm index.
const LINE_STYLES: [LineStyle; 4] = [
    LineStyle::Solid,
    LineStyle::Dashed { dash: 10, gap: 6 },
    LineStyle::Dashed { dash: 3, gap: 5 },
    LineStyle::Dashed { dash: 16, gap: 4 },
];

#[derive(Debug, Clone, Copy)]
enum Marker {
    CircleOpen,
    TriangleUp,
    Cross,
    CircleFilled,
    TriangleDown,
    Diamond,
    Square,
    Plus,
}

const MARKERS: [Marker; 8] = [
    Marker::CircleOpen,
    Marker::TriangleUp,
    Marker::Cross,
    Marker::CircleFilled,
    Marker::TriangleDown,
    Marker::Diamond,
    Marker::Square,
    Marker::Plus,
];

/// Renders a computed profile to the image file named by `config`.
///
/// # Errors
///
/// Returns [`PerfilarError::InvalidParameter`] if the legend length does
/// not match the number of algorithms or `mark_every` is zero, and
/// [`PerfilarError::Render`] for unsupported extensions or backend
/// failures (e.g. unwritable path).
pub fn render(profile: &PerformanceProfile, config: &PlotConfig) -> Result<()> {
    if let Some(legend) = &config.alg_legend {
        if legend.len() != profile.n_algorithms() {
            return Err(PerfilarError::InvalidParameter {
                param: "alg_legend".to_string(),
                value: format!("{} labels", legend.len()),
                constraint: format!("one label per algorithm ({})", profile.n_algorithms()),
            });
        }
    }
    if config.mark_every < 1 {
        return Err(PerfilarError::InvalidParameter {
            param: "mark_every".to_string(),
            value: "0".to_string(),
            constraint: ">= 1".to_string(),
        });
    }

    let path = Path::new(&config.file_name);
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "svg" => {
            let root = SVGBackend::new(path, config.size).into_drawing_area();
            draw_chart(&root, profile, config)
                .map_err(|e| PerfilarError::Render(e.to_string()))
        }
        "png" | "bmp" | "jpg" | "jpeg" => {
            let root = BitMapBackend::new(path, config.size).into_drawing_area();
            draw_chart(&root, profile, config)
                .map_err(|e| PerfilarError::Render(e.to_string()))
        }
        other => Err(PerfilarError::Render(format!(
            "unsupported output format {other:?} for {:?} (use .svg, .png, .bmp or .jpg)",
            config.file_name
        ))),
    }
}

/// Computes a profile from `a` and renders it in one call.
///
/// The θ resolution comes from `config.n_intervals` and the output path
/// from `config.file_name`. Returns the computed profile so callers can
/// inspect the numbers behind the chart.
///
/// # Errors
///
/// Propagates every computation error of
/// [`PerformanceProfile::compute`] and every rendering error of
/// [`render`].
///
/// # Examples
///
/// ```no_run
/// use perfilar::prelude::*;
///
/// let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 1.0]).unwrap();
/// let config = PlotConfig::new()
///     .with_file_name("profile.svg")
///     .with_legend(vec!["algorithm A", "algorithm B"]);
/// let profile = performance_profile(&a, 2.0, &config).unwrap();
/// assert_eq!(profile.n_algorithms(), 2);
/// ```
pub fn performance_profile(
    a: &Matrix<f32>,
    th_max: f32,
    config: &PlotConfig,
) -> Result<PerformanceProfile> {
    let profile = PerformanceProfile::compute(a, th_max, config.n_intervals)?;
    render(&profile, config)?;
    Ok(profile)
}

type ChartResult<DB> = std::result::Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    profile: &PerformanceProfile,
    config: &PlotConfig,
) -> ChartResult<DB> {
    root.fill(&WHITE)?;

    let th_max = profile.th_max();
    // Degenerate axis when th_max == 1.
    let x_max = if th_max > 1.0 { th_max } else { 1.01 };

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(56);
    if let Some(caption) = &config.caption {
        builder.caption(caption, ("sans-serif", 24));
    }
    let mut chart = builder.build_cartesian_2d(1.0f32..x_max, 0.0f32..1.01f32)?;

    chart
        .configure_mesh()
        .x_desc("θ")
        .y_desc("p")
        .axis_desc_style(("sans-serif", 20))
        .label_style(("sans-serif", 14))
        .draw()?;

    for j in 0..profile.n_algorithms() {
        let color = LINE_COLORS[j % LINE_COLORS.len()];
        let stroke = color.stroke_width(config.line_width);
        let points: Vec<(f32, f32)> = profile
            .theta()
            .iter()
            .copied()
            .zip(profile.curve(j).iter().copied())
            .collect();

        let series = match LINE_STYLES[j % LINE_STYLES.len()] {
            LineStyle::Solid => chart.draw_series(LineSeries::new(points.clone(), stroke))?,
            LineStyle::Dashed { dash, gap } => {
                chart.draw_series(DashedLineSeries::new(points.clone(), dash, gap, stroke))?
            }
        };
        if let Some(legend) = &config.alg_legend {
            series.label(legend[j].as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], stroke)
            });
        }

        draw_markers(&mut chart, &points, j, config)?;
    }

    if config.alg_legend.is_some() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 16))
            .draw()?;
    }

    root.present()?;
    Ok(())
}

fn draw_markers<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf32, RangedCoordf32>>,
    points: &[(f32, f32)],
    j: usize,
    config: &PlotConfig,
) -> ChartResult<DB> {
    let color = LINE_COLORS[j % LINE_COLORS.len()];
    let stroke = color.stroke_width(config.line_width);
    let fill = color.filled();
    let r = (config.marker_size / 2).max(1) as i32;
    let pts: Vec<(f32, f32)> = points.iter().copied().step_by(config.mark_every).collect();

    match MARKERS[j % MARKERS.len()] {
        Marker::CircleOpen => {
            chart.draw_series(pts.iter().map(|&c| Circle::new(c, r, stroke)))?;
        }
        Marker::CircleFilled => {
            chart.draw_series(pts.iter().map(|&c| Circle::new(c, r, fill)))?;
        }
        Marker::TriangleUp => {
            chart.draw_series(pts.iter().map(|&c| TriangleMarker::new(c, r, fill)))?;
        }
        Marker::Cross => {
            chart.draw_series(pts.iter().map(|&c| Cross::new(c, r, stroke)))?;
        }
        Marker::TriangleDown => {
            chart.draw_series(pts.iter().map(|&c| {
                EmptyElement::at(c)
                    + PathElement::new(vec![(-r, -r), (r, -r), (0, r), (-r, -r)], stroke)
            }))?;
        }
        Marker::Diamond => {
            chart.draw_series(pts.iter().map(|&c| {
                EmptyElement::at(c)
                    + PathElement::new(vec![(-r, 0), (0, -r), (r, 0), (0, r), (-r, 0)], stroke)
            }))?;
        }
        Marker::Square => {
            chart.draw_series(
                pts.iter()
                    .map(|&c| EmptyElement::at(c) + Rectangle::new([(-r, -r), (r, r)], stroke)),
            )?;
        }
        Marker::Plus => {
            chart.draw_series(pts.iter().map(|&c| {
                EmptyElement::at(c)
                    + PathElement::new(vec![(-r, 0), (r, 0)], stroke)
                    + PathElement::new(vec![(0, -r), (0, r)], stroke)
            }))?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
