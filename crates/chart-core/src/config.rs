// File: crates/chart-core/src/config.rs
// Summary: Chart configuration (TOML), with defaults matching the web front end.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::gradient::DEFAULT_GRADIENT_HEIGHT;
use crate::theme::{self, ThemeTokens};
use crate::types::{HEIGHT, WIDTH};

/// Upper bound on `global.steps`; keeps the resample allocation bounded.
pub const MAX_GLOBAL_STEPS: usize = 100_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Theme preset name ("dark" or "light").
    pub theme: String,
    pub width: i32,
    pub height: i32,
    pub draw_labels: bool,
    pub zoom: ZoomConfig,
    pub convergence: ConvergenceConfig,
    pub global: GlobalConfig,
}

/// Zoomed function-near-root chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Samples closer than this to x* carry the marker.
    pub marker_tolerance: f64,
    pub gradient_height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvergenceConfig {
    pub gradient_height: f32,
}

/// Wide-range resampled chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub x_min: f64,
    pub x_max: f64,
    /// Intervals across the domain; `steps + 1` points are sampled.
    pub steps: usize,
    /// Plotted values are clamped to `[-clamp, clamp]`.
    pub clamp: f64,
    /// Marker half-width in multiples of the sample step.
    pub marker_tolerance_steps: f64,
    pub gradient_height: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            theme: "dark".into(),
            width: WIDTH,
            height: HEIGHT,
            draw_labels: true,
            zoom: ZoomConfig::default(),
            convergence: ConvergenceConfig::default(),
            global: GlobalConfig::default(),
        }
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self { marker_tolerance: 0.06, gradient_height: 320.0 }
    }
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self { gradient_height: 320.0 }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            x_min: -3.0,
            x_max: 5.0,
            steps: 300,
            clamp: 80.0,
            marker_tolerance_steps: 1.3,
            gradient_height: DEFAULT_GRADIENT_HEIGHT,
        }
    }
}

impl GlobalConfig {
    /// Distance between consecutive samples.
    pub fn step(&self) -> f64 {
        (self.x_max - self.x_min) / self.steps as f64
    }

    /// Marker half-width; scales with sample density.
    pub fn marker_tolerance(&self) -> f64 {
        self.step() * self.marker_tolerance_steps
    }
}

impl ChartConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ChartError> {
        let cfg: Self = toml::from_str(s).map_err(|e| ChartError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Ok(Self::from_toml_str(&text)?)
    }

    pub fn theme(&self) -> ThemeTokens {
        theme::find(&self.theme)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ChartError::Config(format!("surface size {}x{} must be positive", self.width, self.height)));
        }
        self.zoom.validate()?;
        self.convergence.validate()?;
        self.global.validate()
    }
}

impl ZoomConfig {
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.marker_tolerance.is_finite() || self.marker_tolerance < 0.0 {
            return Err(ChartError::Config("zoom.marker_tolerance must be finite and non-negative".into()));
        }
        gradient_height("zoom", self.gradient_height)
    }
}

impl ConvergenceConfig {
    pub fn validate(&self) -> Result<(), ChartError> {
        gradient_height("convergence", self.gradient_height)
    }
}

impl GlobalConfig {
    pub fn validate(&self) -> Result<(), ChartError> {
        if !(self.x_min.is_finite() && self.x_max.is_finite()) || self.x_max <= self.x_min {
            return Err(ChartError::Config(format!("global domain [{}, {}] is empty", self.x_min, self.x_max)));
        }
        if self.steps == 0 || self.steps > MAX_GLOBAL_STEPS {
            return Err(ChartError::Config(format!("global.steps must be in 1..={MAX_GLOBAL_STEPS}")));
        }
        if self.clamp.is_nan() || self.clamp <= 0.0 {
            return Err(ChartError::Config("global.clamp must be positive".into()));
        }
        if !self.marker_tolerance_steps.is_finite() || self.marker_tolerance_steps < 0.0 {
            return Err(ChartError::Config("global.marker_tolerance_steps must be finite and non-negative".into()));
        }
        gradient_height("global", self.gradient_height)
    }
}

fn gradient_height(section: &str, h: f32) -> Result<(), ChartError> {
    if h.is_finite() && h > 0.0 {
        Ok(())
    } else {
        Err(ChartError::Config(format!("{section}.gradient_height must be positive")))
    }
}
