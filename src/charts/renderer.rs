//! Static Chart Renderer
//! Draws chart configurations to SVG files using plotters.
//!
//! Bar charts keep the legend hidden and label only the value axis; the pie
//! chart draws its title above the plot. An empty mapping produces a valid
//! chart surface with nothing plotted.

use std::path::Path;

use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use thiserror::Error;

use crate::charts::color::Rgba;
use crate::charts::config::{ChartConfig, ChartStyle};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to draw chart '{title}': {message}")]
    Draw { title: String, message: String },
}

impl RenderError {
    fn draw(title: &str, err: impl std::fmt::Display) -> Self {
        Self::Draw {
            title: title.to_string(),
            message: err.to_string(),
        }
    }
}

/// Renders `ChartConfig`s to standalone SVG files.
///
/// Each call re-renders from scratch and overwrites the target file;
/// identical inputs produce identical output.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Render a chart configuration to `output` at the given pixel size.
    pub fn render_svg(
        config: &ChartConfig,
        output: &Path,
        size: (u32, u32),
    ) -> Result<(), RenderError> {
        let root = SVGBackend::new(output, size).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| RenderError::draw(&config.title, e))?;

        match &config.style {
            ChartStyle::Bar {
                fill,
                border,
                value_axis_label,
            } => Self::draw_vertical_bars(&root, config, *fill, *border, value_axis_label)?,
            ChartStyle::HorizontalBar {
                fill,
                border,
                value_axis_label,
            } => Self::draw_horizontal_bars(&root, config, *fill, *border, value_axis_label)?,
            ChartStyle::Pie { slice_colors } => Self::draw_pie(&root, config, slice_colors)?,
        }

        root.present()
            .map_err(|e| RenderError::draw(&config.title, e))?;
        Ok(())
    }

    fn draw_vertical_bars(
        root: &DrawingArea<SVGBackend, Shift>,
        config: &ChartConfig,
        fill: Rgba,
        border: Rgba,
        axis_label: &str,
    ) -> Result<(), RenderError> {
        let n = config.labels.len();
        if n == 0 {
            return Ok(());
        }

        let y_max = Self::value_ceiling(&config.values);
        let labels = config.labels.clone();

        let mut chart = ChartBuilder::on(root)
            .margin(12)
            .x_label_area_size(44)
            .y_label_area_size(70)
            .build_cartesian_2d((0u32..n as u32).into_segmented(), 0f64..y_max)
            .map_err(|e| RenderError::draw(&config.title, e))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .y_desc(axis_label)
            .x_labels(n)
            .x_label_formatter(&|seg| Self::segment_label(&labels, seg))
            .draw()
            .map_err(|e| RenderError::draw(&config.title, e))?;

        chart
            .draw_series(config.values.iter().enumerate().map(|(i, &v)| {
                Rectangle::new(
                    Self::vertical_bar_span(i, v),
                    fill.to_plotters().filled(),
                )
            }))
            .map_err(|e| RenderError::draw(&config.title, e))?;
        chart
            .draw_series(config.values.iter().enumerate().map(|(i, &v)| {
                Rectangle::new(
                    Self::vertical_bar_span(i, v),
                    border.to_plotters().stroke_width(1),
                )
            }))
            .map_err(|e| RenderError::draw(&config.title, e))?;

        Ok(())
    }

    fn draw_horizontal_bars(
        root: &DrawingArea<SVGBackend, Shift>,
        config: &ChartConfig,
        fill: Rgba,
        border: Rgba,
        axis_label: &str,
    ) -> Result<(), RenderError> {
        let n = config.labels.len();
        if n == 0 {
            return Ok(());
        }

        // Reversed so the first category sits at the top of the chart.
        let labels: Vec<String> = config.labels.iter().rev().cloned().collect();
        let values: Vec<f64> = config.values.iter().rev().copied().collect();
        let x_max = Self::value_ceiling(&values);

        let mut chart = ChartBuilder::on(root)
            .margin(12)
            .x_label_area_size(44)
            .y_label_area_size(130)
            .build_cartesian_2d(0f64..x_max, (0u32..n as u32).into_segmented())
            .map_err(|e| RenderError::draw(&config.title, e))?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc(axis_label)
            .y_labels(n)
            .y_label_formatter(&|seg| Self::segment_label(&labels, seg))
            .draw()
            .map_err(|e| RenderError::draw(&config.title, e))?;

        chart
            .draw_series(values.iter().enumerate().map(|(i, &v)| {
                Rectangle::new(
                    Self::horizontal_bar_span(i, v),
                    fill.to_plotters().filled(),
                )
            }))
            .map_err(|e| RenderError::draw(&config.title, e))?;
        chart
            .draw_series(values.iter().enumerate().map(|(i, &v)| {
                Rectangle::new(
                    Self::horizontal_bar_span(i, v),
                    border.to_plotters().stroke_width(1),
                )
            }))
            .map_err(|e| RenderError::draw(&config.title, e))?;

        Ok(())
    }

    fn draw_pie(
        root: &DrawingArea<SVGBackend, Shift>,
        config: &ChartConfig,
        slice_colors: &[Rgba],
    ) -> Result<(), RenderError> {
        let titled = root
            .titled(&config.title, ("sans-serif", 22))
            .map_err(|e| RenderError::draw(&config.title, e))?;

        let total: f64 = config.values.iter().sum();
        if config.values.is_empty() || total <= 0.0 {
            return Ok(());
        }

        let (w, h) = titled.dim_in_pixel();
        let center = (w as i32 / 2, h as i32 / 2);
        let radius = f64::from(w.min(h)) * 0.36;
        let colors: Vec<RGBColor> = slice_colors.iter().map(|c| c.flattened()).collect();

        let mut pie = Pie::new(&center, &radius, &config.values, &colors, &config.labels);
        pie.label_style(("sans-serif", 14).into_font().color(&BLACK));
        titled
            .draw(&pie)
            .map_err(|e| RenderError::draw(&config.title, e))?;

        Ok(())
    }

    /// Value-axis upper bound: slightly above the tallest bar, never degenerate.
    fn value_ceiling(values: &[f64]) -> f64 {
        let max = values.iter().copied().fold(0.0f64, f64::max);
        if max > 0.0 {
            max * 1.05
        } else {
            1.0
        }
    }

    fn vertical_bar_span(i: usize, v: f64) -> [(SegmentValue<u32>, f64); 2] {
        [
            (SegmentValue::Exact(i as u32), 0.0),
            (SegmentValue::Exact(i as u32 + 1), v),
        ]
    }

    fn horizontal_bar_span(i: usize, v: f64) -> [(f64, SegmentValue<u32>); 2] {
        [
            (0.0, SegmentValue::Exact(i as u32)),
            (v, SegmentValue::Exact(i as u32 + 1)),
        ]
    }

    fn segment_label(labels: &[String], seg: &SegmentValue<u32>) -> String {
        match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => labels
                .get(*i as usize)
                .cloned()
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        }
    }
}
