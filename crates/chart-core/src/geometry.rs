// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Plot area left after removing `insets` from a `width` x `height` surface.
    pub fn inset(width: i32, height: i32, insets: &crate::types::Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left + 1);
        let bottom = (height - insets.bottom as i32).max(top + 1);
        Self::from_ltrb(left, top, right, bottom)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Insets;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(120.0, -80.0, 80.0), 80.0);
        assert_eq!(clamp(-3000.0, -80.0, 80.0), -80.0);
        assert_eq!(clamp(1.5, -80.0, 80.0), 1.5);
    }

    #[test]
    fn inset_never_collapses() {
        let r = RectI32::inset(50, 40, &Insets::new(40, 40, 30, 30));
        assert!(r.width() >= 1 && r.height() >= 1);
    }
}
