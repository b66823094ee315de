// File: crates/chart-core/src/data.rs
// Summary: Validated numeric inputs: function samples, convergence series, root marker.

use crate::error::ChartError;

/// Ordered (x, y) samples of the target function.
/// Contract: equal, non-zero lengths; x finite and strictly increasing.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotSamples {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PlotSamples {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, ChartError> {
        if x.is_empty() {
            return Err(ChartError::Empty { what: "plot x" });
        }
        if y.len() != x.len() {
            return Err(ChartError::LengthMismatch { what: "plot y", expected: x.len(), found: y.len() });
        }
        if let Some(index) = x.iter().position(|v| !v.is_finite()) {
            return Err(ChartError::NonFinite { what: "plot x", index });
        }
        if let Some(index) = x.windows(2).position(|w| w[1] <= w[0]) {
            return Err(ChartError::NotIncreasing { index: index + 1 });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] { &self.x }
    pub fn y(&self) -> &[f64] { &self.y }
    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Sampled domain `[first x, last x]`.
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}

/// Per-iteration record of a root-finding run.
/// Contract: the three columns share one non-zero length; row i is iteration i.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvergenceSeries {
    iterations: Vec<u32>,
    xi: Vec<f64>,
    errors: Vec<f64>,
}

impl ConvergenceSeries {
    pub fn new(iterations: Vec<u32>, xi: Vec<f64>, errors: Vec<f64>) -> Result<Self, ChartError> {
        let n = iterations.len();
        if n == 0 {
            return Err(ChartError::Empty { what: "iterations" });
        }
        if xi.len() != n {
            return Err(ChartError::LengthMismatch { what: "xi", expected: n, found: xi.len() });
        }
        if errors.len() != n {
            return Err(ChartError::LengthMismatch { what: "errors", expected: n, found: errors.len() });
        }
        Ok(Self { iterations, xi, errors })
    }

    pub fn iterations(&self) -> &[u32] { &self.iterations }
    pub fn xi(&self) -> &[f64] { &self.xi }
    pub fn errors(&self) -> &[f64] { &self.errors }
    pub fn len(&self) -> usize { self.iterations.len() }
    pub fn is_empty(&self) -> bool { self.iterations.is_empty() }
}

/// Converged root x*, highlighted on the function charts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMarker(f64);

impl RootMarker {
    /// `None` for NaN or infinite roots; those cannot be placed on an axis.
    pub fn new(x: f64) -> Option<Self> {
        x.is_finite().then_some(Self(x))
    }

    pub fn x(self) -> f64 { self.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_reject_mismatch_and_empty() {
        assert_eq!(
            PlotSamples::new(vec![0.0, 1.0], vec![1.0]),
            Err(ChartError::LengthMismatch { what: "plot y", expected: 2, found: 1 })
        );
        assert_eq!(PlotSamples::new(vec![], vec![]), Err(ChartError::Empty { what: "plot x" }));
    }

    #[test]
    fn samples_reject_unsorted_or_nan_x() {
        assert_eq!(
            PlotSamples::new(vec![0.0, 2.0, 2.0], vec![0.0; 3]),
            Err(ChartError::NotIncreasing { index: 2 })
        );
        assert_eq!(
            PlotSamples::new(vec![0.0, f64::NAN], vec![0.0; 2]),
            Err(ChartError::NonFinite { what: "plot x", index: 1 })
        );
    }

    #[test]
    fn single_sample_is_valid() {
        let s = PlotSamples::new(vec![1.5], vec![2.0]).unwrap();
        assert_eq!(s.domain(), (1.5, 1.5));
    }

    #[test]
    fn convergence_columns_must_align() {
        assert!(ConvergenceSeries::new(vec![0, 1], vec![2.0, 1.8], vec![0.5, 0.0]).is_ok());
        assert_eq!(
            ConvergenceSeries::new(vec![0, 1], vec![2.0], vec![0.5, 0.0]),
            Err(ChartError::LengthMismatch { what: "xi", expected: 2, found: 1 })
        );
        assert_eq!(
            ConvergenceSeries::new(vec![], vec![], vec![]),
            Err(ChartError::Empty { what: "iterations" })
        );
    }

    #[test]
    fn root_marker_rejects_non_finite() {
        assert!(RootMarker::new(f64::NAN).is_none());
        assert_eq!(RootMarker::new(1.0).map(RootMarker::x), Some(1.0));
    }
}
