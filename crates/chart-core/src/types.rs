// File: crates/chart-core/src/types.rs
// Summary: Shared constants (surface sizes, paddings) and render options.

/// Default surface width in pixels.
pub const WIDTH: i32 = 960;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 420;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // Top leaves room for the legend row.
        Self::new(72, 24, 44, 56)
    }
}

/// Knobs for drawing a `ChartSpec` onto a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub insets: Insets,
    /// Text (ticks, titles, legend). Tests switch it off to avoid font variance.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { insets: Insets::default(), draw_labels: true }
    }
}

impl RenderOptions {
    /// Widen the right inset so a secondary axis has room for its labels.
    pub fn with_secondary_axis(mut self) -> Self {
        self.insets.right = self.insets.right.max(72);
        self
    }
}
