// File: crates/chart-core/src/protocol.rs
// Summary: Compute request/response wire types and their conversion into chart inputs.

use serde::{Deserialize, Serialize};

use crate::data::{ConvergenceSeries, PlotSamples, RootMarker};
use crate::error::ChartError;

pub const DEFAULT_TOLERANCE: f64 = 1e-15;

/// Body of a compute request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRequest {
    pub x0: f64,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

impl ComputeRequest {
    pub fn new(x0: f64) -> Self {
        Self { x0, tolerance: DEFAULT_TOLERANCE }
    }
}

/// Backend reply. On failure only `success` and `error` are present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<SolveResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_function: Option<PlotPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_convergence: Option<ConvergencePayload>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolveResult {
    pub converged: bool,
    /// Absent when the first step already hit a vanishing derivative.
    pub root: Option<f64>,
    pub total_iterations: u32,
    pub initial_value: f64,
    pub tolerance: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotPayload {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvergencePayload {
    pub iterations: Vec<u32>,
    pub xi: Vec<f64>,
    pub errors: Vec<f64>,
}

impl TryFrom<PlotPayload> for PlotSamples {
    type Error = ChartError;

    fn try_from(p: PlotPayload) -> Result<Self, Self::Error> {
        PlotSamples::new(p.x, p.y)
    }
}

impl TryFrom<ConvergencePayload> for ConvergenceSeries {
    type Error = ChartError;

    fn try_from(p: ConvergencePayload) -> Result<Self, Self::Error> {
        ConvergenceSeries::new(p.iterations, p.xi, p.errors)
    }
}

impl ComputeResponse {
    pub fn from_json(text: &str) -> Result<Self, ChartError> {
        serde_json::from_str(text).map_err(|e| ChartError::Malformed(e.to_string()))
    }

    /// `Err(Unsuccessful)` carrying the backend message when `success` is false.
    pub fn ensure_success(&self) -> Result<(), ChartError> {
        if self.success {
            return Ok(());
        }
        let msg = self.error.clone().unwrap_or_else(|| "unknown error".into());
        Err(ChartError::Unsuccessful(msg))
    }

    pub fn plot_samples(&self) -> Result<PlotSamples, ChartError> {
        self.plot_function
            .clone()
            .ok_or(ChartError::MissingField("plotFunction"))?
            .try_into()
    }

    pub fn convergence_series(&self) -> Result<ConvergenceSeries, ChartError> {
        self.plot_convergence
            .clone()
            .ok_or(ChartError::MissingField("plotConvergence"))?
            .try_into()
    }

    /// The converged root, if the response carries a finite one.
    pub fn root_marker(&self) -> Option<RootMarker> {
        self.result.as_ref()?.root.and_then(RootMarker::new)
    }
}
