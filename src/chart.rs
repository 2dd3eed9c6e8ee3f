//! Bar chart rendering
//!
//! The presenter hands a [`ChartRequest`] to a [`ChartSink`]. [`SvgChart`]
//! is the default sink and draws the request with [`plotters`] into an SVG
//! file. SVG keeps the renderer free of native font and image dependencies.

use crate::stats::RankedSeries;
use log::debug;
use plotters::coord::combinators::BindKeyPoints;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// X axis title for ranked delay charts
pub const X_LABEL: &str = "symbol";
/// Y axis title for ranked delay charts
pub const Y_LABEL: &str = "average delay (ms)";

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Everything a sink needs to draw one bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    /// Categorical x axis values
    pub labels: Vec<String>,
    /// Bar heights, index-aligned with `labels`
    pub values: Vec<f64>,
    pub x_label: String,
    pub y_label: String,
    /// File the chart is persisted to
    pub output: PathBuf,
}

impl ChartRequest {
    /// Build the request for a ranked delay series
    pub fn from_series(series: &RankedSeries, output: impl Into<PathBuf>) -> Self {
        Self {
            labels: series.labels.clone(),
            values: series.average_delays.clone(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            output: output.into(),
        }
    }

    /// Upper bound of the value axis: 10% headroom, never below 1
    pub fn y_max(&self) -> f64 {
        let max = self.values.iter().copied().fold(0.0, f64::max);
        (max * 1.1).max(1.0)
    }
}

/// Something that can render and persist a bar chart
pub trait ChartSink {
    fn render(&mut self, request: &ChartRequest) -> Result<(), ChartError>;
}

const DEFAULT_WIDTH: u32 = 1024;
const DEFAULT_HEIGHT: u32 = 768;

/// Space left on each side of a bar, as a fraction of its category width
const BAR_GAP: f64 = 0.1;

/// Renders bar charts to SVG files
#[derive(Debug, Clone, Copy)]
pub struct SvgChart {
    width: u32,
    height: u32,
}

impl SvgChart {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for SvgChart {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl ChartSink for SvgChart {
    fn render(&mut self, request: &ChartRequest) -> Result<(), ChartError> {
        if request.labels.len() != request.values.len() {
            return Err(ChartError::InvalidData(format!(
                "{} labels for {} values",
                request.labels.len(),
                request.values.len()
            )));
        }
        if let Some(v) = request.values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(ChartError::InvalidData(format!("bar height {} is not a valid delay", v)));
        }

        draw_bars(request, &request.output, (self.width, self.height))?;
        debug!(
            "Wrote {} bar(s) to {}",
            request.values.len(),
            request.output.display()
        );
        Ok(())
    }
}

fn draw_bars(request: &ChartRequest, path: &Path, size: (u32, u32)) -> Result<(), ChartError> {
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    // Category i spans [i, i + 1) and is labelled at its centre. An empty
    // chart still gets a unit-wide axis so the mesh can be drawn.
    let categories = request.labels.len();
    let x_end = categories.max(1) as f64;
    let centres: Vec<f64> = (0..categories).map(|i| i as f64 + 0.5).collect();

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0f64..x_end).with_key_points(centres), 0f64..request.y_max())
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    let label_for = |x: &f64| {
        let index = (x - 0.5).round();
        if index < 0.0 {
            return String::new();
        }
        request
            .labels
            .get(index as usize)
            .cloned()
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&label_for)
        .x_desc(request.x_label.as_str())
        .y_desc(request.y_label.as_str())
        .draw()
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    let bar_style = GREEN.mix(0.9).filled();
    chart
        .draw_series(request.values.iter().enumerate().map(|(i, value)| {
            let left = i as f64 + BAR_GAP;
            let right = (i + 1) as f64 - BAR_GAP;
            Rectangle::new([(left, 0.0), (right, *value)], bar_style)
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;
    Ok(())
}
