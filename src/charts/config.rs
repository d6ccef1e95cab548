//! Chart Configuration Module
//! Per-invocation chart descriptions derived from a category mapping.

use crate::charts::color::{Rgba, PIE_PALETTE};
use crate::data::CategoryMapping;

/// Kind-specific presentation options.
#[derive(Debug, Clone)]
pub enum ChartStyle {
    /// Vertical bars, value axis starting at zero, legend hidden.
    Bar {
        fill: Rgba,
        border: Rgba,
        value_axis_label: String,
    },
    /// Horizontal bars, value axis starting at zero, legend hidden.
    HorizontalBar {
        fill: Rgba,
        border: Rgba,
        value_axis_label: String,
    },
    /// One slice per key, colors cycled from the fixed palette, title shown.
    Pie { slice_colors: Vec<Rgba> },
}

/// Everything a renderer needs to draw one chart.
///
/// Built fresh for each render call and discarded afterwards. Label and value
/// sequences follow mapping order.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub style: ChartStyle,
}

impl ChartConfig {
    /// Vertical bar chart. Border is the opaque variant of the base color.
    pub fn bar(
        title: impl Into<String>,
        mapping: &CategoryMapping,
        base: Rgba,
        value_axis_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            labels: mapping.labels(),
            values: mapping.values(),
            style: ChartStyle::Bar {
                fill: base,
                border: base.opaque(),
                value_axis_label: value_axis_label.into(),
            },
        }
    }

    /// Horizontal bar chart. Border is the opaque variant of the base color.
    pub fn horizontal_bar(
        title: impl Into<String>,
        mapping: &CategoryMapping,
        base: Rgba,
        value_axis_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            labels: mapping.labels(),
            values: mapping.values(),
            style: ChartStyle::HorizontalBar {
                fill: base,
                border: base.opaque(),
                value_axis_label: value_axis_label.into(),
            },
        }
    }

    /// Pie chart with one slice per key, colored from `PIE_PALETTE` in
    /// declared order and cycling past four keys.
    pub fn pie(title: impl Into<String>, mapping: &CategoryMapping) -> Self {
        let n = mapping.len();
        Self {
            title: title.into(),
            labels: mapping.labels(),
            values: mapping.values(),
            style: ChartStyle::Pie {
                slice_colors: (0..n).map(|i| PIE_PALETTE[i % PIE_PALETTE.len()]).collect(),
            },
        }
    }

    /// Bar charts never show a legend; the pie relies on slice labels instead.
    pub fn shows_legend(&self) -> bool {
        false
    }

    /// Only the pie draws its title in-chart.
    pub fn shows_title(&self) -> bool {
        matches!(self.style, ChartStyle::Pie { .. })
    }
}
