// File: crates/chart-core/src/spec.rs
// Summary: ChartSpec model (datasets, scales, interaction, legend, tooltip).

use std::fmt;

use skia_safe as skia;

use crate::axis::ScaleConfig;
use crate::tooltip::{TooltipConfig, TooltipItem};

/// Label of the zero-reference dataset; legends and tooltips skip it.
pub const ZERO_REFERENCE: &str = "y = 0";

/// Area fill under a line.
#[derive(Clone)]
pub enum Fill {
    Solid(skia::Color),
    /// Vertical gradient created on the target surface.
    Gradient {
        top: skia::Color,
        bottom: skia::Color,
        height: f32,
        shader: skia::Shader,
    },
}

impl Fill {
    /// Color used for legend swatches and as the flat stand-in.
    pub fn base_color(&self) -> skia::Color {
        match self {
            Fill::Solid(c) => *c,
            Fill::Gradient { top, .. } => *top,
        }
    }
}

impl fmt::Debug for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Solid(c) => f.debug_tuple("Solid").field(c).finish(),
            Fill::Gradient { top, bottom, height, .. } => f
                .debug_struct("Gradient")
                .field("top", top)
                .field("bottom", bottom)
                .field("height", height)
                .finish_non_exhaustive(),
        }
    }
}

impl PartialEq for Fill {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Fill::Solid(a), Fill::Solid(b)) => a == b,
            (
                Fill::Gradient { top: t1, bottom: b1, height: h1, .. },
                Fill::Gradient { top: t2, bottom: b2, height: h2, .. },
            ) => t1 == t2 && b1 == b2 && h1 == h2,
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisId {
    /// Primary (left) value axis.
    Y,
    /// Secondary (right) value axis.
    Y1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointStyle {
    Circle,
}

/// Stroke, fill and point styling for one dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub border_color: skia::Color,
    pub border_width: f32,
    pub border_dash: Option<[f32; 2]>,
    pub fill: Option<Fill>,
    /// Bezier smoothing, 0 draws straight segments.
    pub tension: f32,
    pub show_line: bool,
    pub point_style: PointStyle,
    pub point_radius: f32,
    pub point_hover_radius: f32,
    pub point_background: Option<skia::Color>,
    pub point_border_color: Option<skia::Color>,
    pub point_border_width: f32,
    pub point_hover_background: Option<skia::Color>,
}

impl LineStyle {
    pub fn stroke(color: skia::Color, width: f32) -> Self {
        Self {
            border_color: color,
            border_width: width,
            border_dash: None,
            fill: None,
            tension: 0.0,
            show_line: true,
            point_style: PointStyle::Circle,
            point_radius: 0.0,
            point_hover_radius: 0.0,
            point_background: None,
            point_border_color: None,
            point_border_width: 1.0,
            point_hover_background: None,
        }
    }

    /// Fill color for point markers.
    pub fn point_fill(&self) -> skia::Color {
        self.point_background.unwrap_or(self.border_color)
    }
}

/// One plotted series; `None` entries are gaps, never interpolated.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub axis: AxisId,
    pub style: LineStyle,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<Option<f64>>, style: LineStyle) -> Self {
        Self { label: label.into(), data, axis: AxisId::Y, style }
    }

    /// Dataset without gaps.
    pub fn dense(label: impl Into<String>, values: &[f64], style: LineStyle) -> Self {
        Self::new(label, values.iter().copied().map(Some).collect(), style)
    }

    pub fn on_axis(mut self, axis: AxisId) -> Self {
        self.axis = axis;
        self
    }

    /// Values that are present, in order.
    pub fn present(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().flatten().copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    /// Hovering a column reports every dataset at that index.
    Index,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interaction {
    pub intersect: bool,
    pub mode: InteractionMode,
}

impl Default for Interaction {
    fn default() -> Self {
        Self { intersect: false, mode: InteractionMode::Index }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendConfig {
    pub color: skia::Color,
    /// Dataset labels left out of the legend.
    pub hidden: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct Scales {
    pub x: ScaleConfig,
    pub y: ScaleConfig,
    pub y1: Option<ScaleConfig>,
}

/// Everything needed to draw one chart.
#[derive(Clone, Debug)]
pub struct ChartSpec {
    /// One category label per column.
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub scales: Scales,
    pub interaction: Interaction,
    pub legend: LegendConfig,
    pub tooltip: TooltipConfig,
}

impl ChartSpec {
    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|d| d.label == label)
    }

    /// Datasets drawn in the legend, in order.
    pub fn legend_items(&self) -> impl Iterator<Item = &Dataset> + '_ {
        self.datasets.iter().filter(|d| !self.legend.hidden.contains(&d.label))
    }

    /// Tooltip line for one dataset at one column.
    pub fn tooltip_line(&self, dataset_index: usize, data_index: usize) -> Option<String> {
        let ds = self.datasets.get(dataset_index)?;
        let label = self.labels.get(data_index)?;
        let item = TooltipItem {
            dataset_index,
            dataset_label: ds.label.as_str(),
            data_index,
            label: label.as_str(),
            value: ds.data.get(data_index).copied().flatten(),
        };
        self.tooltip.line(&item)
    }

    /// Tooltip lines for a hovered column (index interaction mode).
    pub fn tooltip_lines(&self, data_index: usize) -> Vec<String> {
        (0..self.datasets.len())
            .filter_map(|i| self.tooltip_line(i, data_index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_fills_compare_by_color() {
        let c = skia::Color::from_argb(56, 14, 165, 233);
        assert_eq!(Fill::Solid(c), Fill::Solid(c));
        assert_ne!(Fill::Solid(c), Fill::Solid(skia::Color::BLACK));
        assert_eq!(Fill::Solid(c).base_color(), c);
    }

    #[test]
    fn dense_dataset_has_no_gaps() {
        let d = Dataset::dense("f(x)", &[1.0, 2.0], LineStyle::stroke(skia::Color::WHITE, 2.0));
        assert_eq!(d.data, vec![Some(1.0), Some(2.0)]);
        assert_eq!(d.axis, AxisId::Y);
        assert_eq!(d.present().count(), 2);
    }
}
