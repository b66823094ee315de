// File: crates/chart-core/src/global_chart.rs
// Summary: Wide-range f(x) chart, resampled locally and clamped for display.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::axis::{scale_options, TickOverrides};
use crate::chart::ChartHandle;
use crate::config::GlobalConfig;
use crate::data::RootMarker;
use crate::error::ChartError;
use crate::function::{Evaluator, Quintic};
use crate::function_chart::zero_reference;
use crate::geometry::clamp;
use crate::gradient::vertical_gradient;
use crate::grid::linspace;
use crate::marker::{root_dataset, MarkerWindow};
use crate::spec::{ChartSpec, Dataset, Interaction, LegendConfig, LineStyle, Scales, ZERO_REFERENCE};
use crate::surface::DrawingSurface;
use crate::theme::{with_alpha, ThemeTokens};
use crate::tooltip::{tooltip_options, TooltipCallbacks};
use crate::types::RenderOptions;

/// Uniform resample of the evaluator over the configured domain.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobalSamples {
    pub x: Vec<f64>,
    /// Unclamped f(x); what tooltips report.
    pub raw: Vec<f64>,
    /// Display values, limited to `[-clamp, clamp]`.
    pub clamped: Vec<f64>,
}

impl GlobalSamples {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Builds the global function chart from a local resample.
pub struct GlobalFunctionChartBuilder<'a> {
    theme: &'a ThemeTokens,
    evaluator: &'a dyn Evaluator,
    config: GlobalConfig,
    options: RenderOptions,
}

impl<'a> GlobalFunctionChartBuilder<'a> {
    pub fn new(theme: &'a ThemeTokens) -> Self {
        Self {
            theme,
            evaluator: &Quintic,
            config: GlobalConfig::default(),
            options: RenderOptions::default(),
        }
    }

    pub fn evaluator(mut self, evaluator: &'a dyn Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Replace the defaults; rejects a config that fails validation.
    pub fn config(mut self, config: GlobalConfig) -> Result<Self, ChartError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn resample(&self) -> GlobalSamples {
        let c = &self.config;
        let x = linspace(c.x_min, c.x_max, c.steps + 1);
        let raw: Vec<f64> = x.iter().map(|&v| self.evaluator.eval(v)).collect();
        let clamped = raw.iter().map(|&v| clamp(v, -c.clamp, c.clamp)).collect();
        GlobalSamples { x, raw, clamped }
    }

    pub fn spec(&self, surface: &dyn DrawingSurface, root: Option<RootMarker>) -> ChartSpec {
        let theme = self.theme;
        let samples = self.resample();

        let mut line = LineStyle::stroke(theme.primary, 2.0);
        line.fill = Some(vertical_gradient(
            surface,
            with_alpha(theme.primary, 0.18),
            with_alpha(theme.primary, 0.0),
            self.config.gradient_height,
        ));
        line.tension = 0.28;
        line.point_hover_radius = 4.0;
        line.point_hover_background = Some(theme.primary);

        let mut datasets = vec![
            Dataset::dense(self.evaluator.label(), &samples.clamped, line),
            zero_reference(theme, samples.len(), [6.0, 4.0]),
        ];

        if let Some(root) = root {
            if root.x() < self.config.x_min || root.x() > self.config.x_max {
                warn!(root = root.x(), "root outside global domain; marker will be empty");
            }
            let window = MarkerWindow::new(root, self.config.marker_tolerance());
            datasets.push(root_dataset(theme, window, &samples.x, self.evaluator.eval(root.x()), 10.0));
        }

        let labels = samples.x.iter().map(|x| format!("{x:.2}")).collect();
        let x: Arc<[f64]> = samples.x.into();
        let raw: Arc<[f64]> = samples.raw.into();
        let tooltip = tooltip_options(
            theme,
            TooltipCallbacks::label(move |item| {
                item.value?;
                if item.dataset_label == ZERO_REFERENCE {
                    return None;
                }
                let x = x.get(item.data_index)?;
                let y = raw.get(item.data_index)?;
                Some(format!("f({x:.3}) = {y:.5}"))
            }),
        );

        ChartSpec {
            labels,
            datasets,
            scales: Scales {
                x: scale_options(theme, Some("x"), Some(theme.axis_title), TickOverrides::max_ticks(9)),
                y: scale_options(theme, Some("f(x)"), Some(theme.axis_title), TickOverrides::default()),
                y1: None,
            },
            interaction: Interaction::default(),
            legend: LegendConfig { color: theme.legend, hidden: vec![ZERO_REFERENCE.to_string()] },
            tooltip,
        }
    }

    pub fn build<S: DrawingSurface>(&self, surface: S, root: Option<RootMarker>) -> ChartHandle<S> {
        let spec = self.spec(&surface, root);
        debug!(points = self.config.steps + 1, clamp = self.config.clamp, "building global chart");
        ChartHandle::mount(surface, spec, self.theme, &self.options)
    }
}
