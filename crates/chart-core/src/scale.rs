// File: crates/chart-core/src/scale.rs
// Summary: Category (X) and value (Y) pixel transforms.

/// Horizontal category scale: `count` evenly spaced columns across `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count }
    }

    /// Pixel x of column `i`; a single column sits in the middle.
    #[inline]
    pub fn to_px(&self, i: usize) -> f32 {
        if self.count < 2 {
            return (self.left_px + self.right_px) * 0.5;
        }
        let spacing = (self.right_px - self.left_px) / (self.count - 1) as f32;
        self.left_px + i as f32 * spacing
    }
}

/// Vertical value scale mapping data range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }
    /// Pixel y of `y` clamped into the visible band.
    #[inline]
    pub fn to_px_clamped(&self, y: f64) -> f32 {
        crate::geometry::clamp(self.to_px(y), self.top_px, self.bottom_px)
    }
}
