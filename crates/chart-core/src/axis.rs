// File: crates/chart-core/src/axis.rs
// Summary: Axis (scale) configuration fragments seeded from theme tokens.

use std::fmt;
use std::sync::Arc;

use skia_safe as skia;

use crate::theme::ThemeTokens;

/// Formats a tick value into its label.
pub type TickCallback = Arc<dyn Fn(f64) -> String + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisPosition {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStyle {
    pub color: skia::Color,
    pub draw_border: bool,
    /// False keeps a secondary axis from doubling the grid.
    pub draw_on_chart_area: bool,
}

#[derive(Clone)]
pub struct TickStyle {
    pub color: skia::Color,
    pub padding: f32,
    pub max_ticks_limit: Option<usize>,
    pub callback: Option<TickCallback>,
}

impl fmt::Debug for TickStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickStyle")
            .field("color", &self.color)
            .field("padding", &self.padding)
            .field("max_ticks_limit", &self.max_ticks_limit)
            .field("callback", &self.callback.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl TickStyle {
    pub fn label(&self, value: f64) -> String {
        match &self.callback {
            Some(cb) => cb(value),
            None => crate::format::format_tick(value),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTitle {
    pub text: String,
    pub color: skia::Color,
    pub font_size: f32,
    pub font_weight: u16,
}

/// Per-chart tick overrides; unset fields keep the theme defaults.
#[derive(Clone, Default)]
pub struct TickOverrides {
    pub color: Option<skia::Color>,
    pub padding: Option<f32>,
    pub max_ticks_limit: Option<usize>,
    pub callback: Option<TickCallback>,
}

impl TickOverrides {
    pub fn max_ticks(limit: usize) -> Self {
        Self { max_ticks_limit: Some(limit), ..Self::default() }
    }

    pub fn color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn callback(mut self, f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.callback = Some(Arc::new(f));
        self
    }
}

#[derive(Clone, Debug)]
pub struct ScaleConfig {
    pub position: Option<AxisPosition>,
    pub grid: GridStyle,
    pub ticks: TickStyle,
    pub title: Option<AxisTitle>,
}

impl ScaleConfig {
    pub fn at(mut self, position: AxisPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn without_chart_area_grid(mut self) -> Self {
        self.grid.draw_on_chart_area = false;
        self
    }
}

/// Reusable axis fragment: theme grid and ticks, optional title, overrides on top.
pub fn scale_options(
    theme: &ThemeTokens,
    title: Option<&str>,
    title_color: Option<skia::Color>,
    ticks: TickOverrides,
) -> ScaleConfig {
    ScaleConfig {
        position: None,
        grid: GridStyle { color: theme.grid, draw_border: false, draw_on_chart_area: true },
        ticks: TickStyle {
            color: ticks.color.unwrap_or(theme.tick),
            padding: ticks.padding.unwrap_or(6.0),
            max_ticks_limit: ticks.max_ticks_limit,
            callback: ticks.callback,
        },
        title: title.map(|text| AxisTitle {
            text: text.to_string(),
            color: title_color.unwrap_or(theme.axis_title),
            font_size: 11.0,
            font_weight: 500,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_theme() {
        let theme = ThemeTokens::dark();
        let s = scale_options(&theme, None, None, TickOverrides::default());
        assert_eq!(s.grid.color, theme.grid);
        assert!(!s.grid.draw_border);
        assert_eq!(s.ticks.color, theme.tick);
        assert_eq!(s.ticks.padding, 6.0);
        assert!(s.title.is_none());
    }

    #[test]
    fn overrides_take_precedence() {
        let theme = ThemeTokens::dark();
        let s = scale_options(
            &theme,
            Some("x"),
            Some(theme.accent),
            TickOverrides::max_ticks(8).color(theme.emerald).callback(|v| format!("<{v}>")),
        );
        assert_eq!(s.ticks.color, theme.emerald);
        assert_eq!(s.ticks.max_ticks_limit, Some(8));
        assert_eq!(s.ticks.label(2.0), "<2>");
        let title = s.title.unwrap();
        assert_eq!(title.text, "x");
        assert_eq!(title.color, theme.accent);
        assert_eq!(title.font_size, 11.0);
    }

    #[test]
    fn untitled_axis_ignores_title_color() {
        let theme = ThemeTokens::dark();
        let s = scale_options(&theme, None, Some(theme.accent), TickOverrides::max_ticks(10));
        assert!(s.title.is_none());
        assert_eq!(s.ticks.label(-2.5), "-2.5");
    }
}
