// File: crates/chart-core/src/tooltip.rs
// Summary: Tooltip configuration fragment and label callbacks.

use std::fmt;
use std::sync::Arc;

use skia_safe as skia;

use crate::theme::ThemeTokens;

/// What a tooltip line is being produced for.
#[derive(Clone, Copy, Debug)]
pub struct TooltipItem<'a> {
    pub dataset_index: usize,
    pub dataset_label: &'a str,
    pub data_index: usize,
    /// Category label of the hovered column.
    pub label: &'a str,
    /// Plotted value; `None` on a gap.
    pub value: Option<f64>,
}

/// Returns the tooltip line, or `None` to suppress it.
pub type LabelCallback = Arc<dyn Fn(&TooltipItem<'_>) -> Option<String> + Send + Sync>;

#[derive(Clone, Default)]
pub struct TooltipCallbacks {
    pub label: Option<LabelCallback>,
}

impl TooltipCallbacks {
    pub fn label(f: impl Fn(&TooltipItem<'_>) -> Option<String> + Send + Sync + 'static) -> Self {
        Self { label: Some(Arc::new(f)) }
    }
}

impl fmt::Debug for TooltipCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipCallbacks")
            .field("label", &self.label.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct TooltipConfig {
    pub background: skia::Color,
    pub title_color: skia::Color,
    pub body_color: skia::Color,
    pub border_color: skia::Color,
    pub border_width: f32,
    pub padding: f32,
    pub corner_radius: f32,
    pub display_colors: bool,
    pub box_width: f32,
    pub box_height: f32,
    pub callbacks: TooltipCallbacks,
}

impl TooltipConfig {
    /// Text for one hovered item. Without a label callback this is `"<dataset>: <value>"`.
    pub fn line(&self, item: &TooltipItem<'_>) -> Option<String> {
        match &self.callbacks.label {
            Some(cb) => cb(item),
            None => item.value.map(|v| format!("{}: {}", item.dataset_label, v)),
        }
    }
}

/// Reusable tooltip fragment seeded from the theme.
pub fn tooltip_options(theme: &ThemeTokens, callbacks: TooltipCallbacks) -> TooltipConfig {
    TooltipConfig {
        background: theme.tooltip_bg,
        title_color: theme.tooltip_title,
        body_color: theme.tooltip_body,
        border_color: theme.tooltip_border,
        border_width: 1.0,
        padding: 12.0,
        corner_radius: 8.0,
        display_colors: true,
        box_width: 10.0,
        box_height: 10.0,
        callbacks,
    }
}
