// File: crates/chart-core/src/theme.rs
// Summary: Theme tokens (palette + typography) shared read-only by every chart builder.

use skia_safe as skia;

/// Build a color from 8-bit RGB and a CSS-style alpha in `0.0..=1.0`.
pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> skia::Color {
    skia::Color::from_argb(alpha_byte(a), r, g, b)
}

/// Same color with a CSS-style alpha.
pub fn with_alpha(color: skia::Color, a: f32) -> skia::Color {
    color.with_a(alpha_byte(a))
}

fn alpha_byte(a: f32) -> u8 {
    (a.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Palette and typography for all three charts.
///
/// Passed explicitly into every builder call; nothing reads a global default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeTokens {
    pub name: &'static str,
    pub background: skia::Color,
    pub font_families: &'static [&'static str],
    pub font_size: f32,

    pub grid: skia::Color,
    pub tick: skia::Color,
    pub legend: skia::Color,
    pub axis_title: skia::Color,
    pub tooltip_bg: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_title: skia::Color,
    pub tooltip_body: skia::Color,

    pub primary: skia::Color,
    pub accent: skia::Color,
    pub emerald: skia::Color,
    /// Zero-reference line color.
    pub reference: skia::Color,
}

const SANS: &[&str] = &["Inter", "Segoe UI", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

impl ThemeTokens {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: rgba(6, 11, 20, 1.0),
            font_families: SANS,
            font_size: 12.0,

            grid: rgba(255, 255, 255, 0.055),
            tick: rgba(255, 255, 255, 0.45),
            legend: rgba(255, 255, 255, 0.68),
            axis_title: rgba(255, 255, 255, 0.45),
            tooltip_bg: rgba(6, 11, 20, 0.96),
            tooltip_border: rgba(255, 255, 255, 0.10),
            tooltip_title: rgba(255, 255, 255, 0.92),
            tooltip_body: rgba(255, 255, 255, 0.68),

            primary: rgba(14, 165, 233, 1.0),
            accent: rgba(139, 92, 246, 1.0),
            emerald: rgba(16, 185, 129, 1.0),
            reference: rgba(255, 255, 255, 0.28),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: rgba(250, 250, 252, 1.0),
            font_families: SANS,
            font_size: 12.0,

            grid: rgba(15, 23, 42, 0.07),
            tick: rgba(15, 23, 42, 0.55),
            legend: rgba(15, 23, 42, 0.75),
            axis_title: rgba(15, 23, 42, 0.55),
            tooltip_bg: rgba(255, 255, 255, 0.96),
            tooltip_border: rgba(15, 23, 42, 0.12),
            tooltip_title: rgba(15, 23, 42, 0.92),
            tooltip_body: rgba(15, 23, 42, 0.70),

            primary: rgba(2, 132, 199, 1.0),
            accent: rgba(124, 58, 237, 1.0),
            emerald: rgba(5, 150, 105, 1.0),
            reference: rgba(15, 23, 42, 0.35),
        }
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<ThemeTokens> {
    vec![ThemeTokens::dark(), ThemeTokens::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> ThemeTokens {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(ThemeTokens::dark)
}
