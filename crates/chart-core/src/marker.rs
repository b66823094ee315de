// File: crates/chart-core/src/marker.rs
// Summary: Root-marker overlay: a sparse point series highlighting samples near x*.

use crate::data::RootMarker;
use crate::spec::{Dataset, LineStyle};
use crate::theme::ThemeTokens;

/// Open interval `(x* - half_width, x* + half_width)` around the root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerWindow {
    pub center: f64,
    pub half_width: f64,
}

impl MarkerWindow {
    pub fn new(root: RootMarker, half_width: f64) -> Self {
        Self { center: root.x(), half_width }
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        (x - self.center).abs() < self.half_width
    }

    /// `value` at samples inside the window, a gap everywhere else.
    pub fn series(&self, xs: &[f64], value: f64) -> Vec<Option<f64>> {
        xs.iter().map(|&x| self.contains(x).then_some(value)).collect()
    }
}

/// Point-only overlay dataset for the converged root.
pub fn root_dataset(
    theme: &ThemeTokens,
    window: MarkerWindow,
    xs: &[f64],
    value: f64,
    radius: f32,
) -> Dataset {
    let mut style = LineStyle::stroke(theme.emerald, 1.0);
    style.show_line = false;
    style.point_radius = radius;
    style.point_hover_radius = radius + 3.0;
    style.point_background = Some(theme.emerald);
    Dataset::new(
        format!("Root x* = {:.6}", window.center),
        window.series(xs, value),
        style,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(x: f64) -> RootMarker {
        RootMarker::new(x).unwrap()
    }

    #[test]
    fn window_is_open() {
        let w = MarkerWindow::new(root(1.0), 0.06);
        assert!(w.contains(1.0));
        assert!(w.contains(1.05));
        assert!(!w.contains(1.06 + 1e-12));
        assert!(!w.contains(0.9));
    }

    #[test]
    fn outside_domain_is_all_gaps() {
        let w = MarkerWindow::new(root(10.0), 0.06);
        assert!(w.series(&[0.0, 1.0, 2.0], 3.0).iter().all(Option::is_none));
    }

    #[test]
    fn dataset_is_points_only() {
        let theme = ThemeTokens::dark();
        let d = root_dataset(&theme, MarkerWindow::new(root(1.0), 0.06), &[0.0, 1.0, 2.0], 0.0, 9.0);
        assert_eq!(d.label, "Root x* = 1.000000");
        assert_eq!(d.data, vec![None, Some(0.0), None]);
        assert!(!d.style.show_line);
        assert_eq!(d.style.point_radius, 9.0);
        assert_eq!(d.style.point_hover_radius, 12.0);
        assert_eq!(d.style.border_color, theme.emerald);
    }
}
