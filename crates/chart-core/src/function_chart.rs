// File: crates/chart-core/src/function_chart.rs
// Summary: Zoomed f(x) chart near the root, built from backend-supplied samples.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::axis::{scale_options, TickOverrides};
use crate::chart::ChartHandle;
use crate::config::ZoomConfig;
use crate::data::{PlotSamples, RootMarker};
use crate::error::ChartError;
use crate::function::{Evaluator, Quintic};
use crate::gradient::vertical_gradient;
use crate::marker::{root_dataset, MarkerWindow};
use crate::spec::{ChartSpec, Dataset, Interaction, LegendConfig, LineStyle, Scales, ZERO_REFERENCE};
use crate::surface::DrawingSurface;
use crate::theme::{with_alpha, ThemeTokens};
use crate::tooltip::{tooltip_options, TooltipCallbacks};
use crate::types::RenderOptions;

pub const LABEL: &str = "f(x)";

/// Builds the function-near-root chart.
pub struct FunctionChartBuilder<'a> {
    theme: &'a ThemeTokens,
    evaluator: &'a dyn Evaluator,
    config: ZoomConfig,
    options: RenderOptions,
}

impl<'a> FunctionChartBuilder<'a> {
    pub fn new(theme: &'a ThemeTokens) -> Self {
        Self {
            theme,
            evaluator: &Quintic,
            config: ZoomConfig::default(),
            options: RenderOptions::default(),
        }
    }

    /// Function used to evaluate f(x*) for the root marker.
    pub fn evaluator(mut self, evaluator: &'a dyn Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Replace the defaults; rejects a config that fails validation.
    pub fn config(mut self, config: ZoomConfig) -> Result<Self, ChartError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn spec(&self, surface: &dyn DrawingSurface, samples: &PlotSamples, root: Option<RootMarker>) -> ChartSpec {
        let theme = self.theme;
        let xs = samples.x();

        let mut line = LineStyle::stroke(theme.primary, 2.0);
        line.fill = Some(vertical_gradient(
            surface,
            with_alpha(theme.primary, 0.22),
            with_alpha(theme.primary, 0.0),
            self.config.gradient_height,
        ));
        line.tension = 0.38;
        line.point_hover_radius = 5.0;
        line.point_hover_background = Some(theme.primary);

        let mut datasets = vec![
            Dataset::dense(LABEL, samples.y(), line),
            zero_reference(theme, xs.len(), [5.0, 4.0]),
        ];

        if let Some(root) = root {
            let (lo, hi) = samples.domain();
            if root.x() < lo || root.x() > hi {
                warn!(root = root.x(), lo, hi, "root outside sampled range; marker will be empty");
            }
            let window = MarkerWindow::new(root, self.config.marker_tolerance);
            datasets.push(root_dataset(theme, window, xs, self.evaluator.eval(root.x()), 9.0));
        }

        let sample_x: Arc<[f64]> = xs.into();
        let tooltip = tooltip_options(
            theme,
            TooltipCallbacks::label(move |item| {
                let y = item.value?;
                let x = sample_x.get(item.data_index)?;
                Some(format!("f({x:.4}) = {y:.8}"))
            }),
        );

        ChartSpec {
            labels: xs.iter().map(|x| format!("{x:.3}")).collect(),
            datasets,
            scales: Scales {
                x: scale_options(theme, Some("x"), Some(theme.axis_title), TickOverrides::max_ticks(8)),
                y: scale_options(theme, Some("f(x)"), Some(theme.axis_title), TickOverrides::default()),
                y1: None,
            },
            interaction: Interaction::default(),
            legend: LegendConfig { color: theme.legend, hidden: vec![ZERO_REFERENCE.to_string()] },
            tooltip,
        }
    }

    pub fn build<S: DrawingSurface>(&self, surface: S, samples: &PlotSamples, root: Option<RootMarker>) -> ChartHandle<S> {
        let spec = self.spec(&surface, samples, root);
        debug!(samples = samples.len(), root = ?root.map(RootMarker::x), "building function chart");
        ChartHandle::mount(surface, spec, self.theme, &self.options)
    }
}

/// Dashed constant-zero line over `len` columns.
pub(crate) fn zero_reference(theme: &ThemeTokens, len: usize, dash: [f32; 2]) -> Dataset {
    let mut style = LineStyle::stroke(theme.reference, 1.0);
    style.border_dash = Some(dash);
    Dataset::new(ZERO_REFERENCE, vec![Some(0.0); len], style)
}
