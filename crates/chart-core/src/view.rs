// File: crates/chart-core/src/view.rs
// Summary: Visible value ranges derived from a chart spec (one per value axis).

use crate::spec::{AxisId, ChartSpec};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub y_min: f64,
    pub y_max: f64,
    /// Secondary axis range, when any dataset uses it.
    pub y1: Option<(f64, f64)>,
}

impl ViewState {
    pub fn from_spec(spec: &ChartSpec) -> Self {
        let (y_min, y_max) = axis_range(spec, AxisId::Y).unwrap_or((0.0, 1.0));
        let y1 = spec
            .datasets
            .iter()
            .any(|d| d.axis == AxisId::Y1)
            .then(|| axis_range(spec, AxisId::Y1).unwrap_or((0.0, 1.0)));
        Self { y_min, y_max, y1 }
    }
}

/// Min/max of present, finite values on `axis`, padded by 2%.
/// `None` when the axis has nothing to show (all gaps).
pub fn axis_range(spec: &ChartSpec, axis: AxisId) -> Option<(f64, f64)> {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for d in spec.datasets.iter().filter(|d| d.axis == axis) {
        for y in d.present().filter(|y| y.is_finite()) {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        return None;
    }
    if (y_max - y_min).abs() < 1e-9 {
        y_min -= 0.5;
        y_max += 0.5;
    }
    let m = (y_max - y_min) * 0.02;
    Some((y_min - m, y_max + m))
}
