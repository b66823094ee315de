// File: crates/chart-core/src/convergence_chart.rs
// Summary: Dual-axis convergence chart: iterate xᵢ (left) and log₁₀(error) (right).

use tracing::debug;

use crate::axis::{scale_options, AxisPosition, TickOverrides};
use crate::chart::ChartHandle;
use crate::config::ConvergenceConfig;
use crate::data::ConvergenceSeries;
use crate::error::ChartError;
use crate::gradient::vertical_gradient;
use crate::spec::{AxisId, ChartSpec, Dataset, Interaction, LegendConfig, LineStyle, Scales};
use crate::surface::DrawingSurface;
use crate::theme::{with_alpha, ThemeTokens};
use crate::tooltip::{tooltip_options, TooltipCallbacks};
use crate::types::RenderOptions;

pub const ITERATE_LABEL: &str = "xᵢ";
pub const LOG_ERROR_LABEL: &str = "log₁₀(error)";

/// log₁₀ of each error; non-positive errors have no logarithm and become gaps.
pub fn log_errors(errors: &[f64]) -> Vec<Option<f64>> {
    errors.iter().map(|&e| (e > 0.0).then(|| e.log10())).collect()
}

/// Builds the iterate/error convergence chart.
pub struct ConvergenceChartBuilder<'a> {
    theme: &'a ThemeTokens,
    config: ConvergenceConfig,
    options: RenderOptions,
}

impl<'a> ConvergenceChartBuilder<'a> {
    pub fn new(theme: &'a ThemeTokens) -> Self {
        Self { theme, config: ConvergenceConfig::default(), options: RenderOptions::default() }
    }

    /// Replace the defaults; rejects a config that fails validation.
    pub fn config(mut self, config: ConvergenceConfig) -> Result<Self, ChartError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn spec(&self, surface: &dyn DrawingSurface, series: &ConvergenceSeries) -> ChartSpec {
        let theme = self.theme;

        let mut iterate = LineStyle::stroke(theme.accent, 2.0);
        iterate.fill = Some(vertical_gradient(
            surface,
            with_alpha(theme.accent, 0.22),
            with_alpha(theme.accent, 0.0),
            self.config.gradient_height,
        ));
        iterate.tension = 0.3;
        iterate.point_radius = 4.0;
        iterate.point_hover_radius = 7.0;
        iterate.point_background = Some(theme.accent);
        iterate.point_border_color = Some(with_alpha(theme.accent, 0.3));
        iterate.point_border_width = 3.0;

        let mut error = LineStyle::stroke(theme.emerald, 2.0);
        error.border_dash = Some([5.0, 4.0]);
        error.tension = 0.3;
        error.point_radius = 3.0;
        error.point_hover_radius = 6.0;
        error.point_background = Some(theme.emerald);

        let accent_label = with_alpha(theme.accent, 0.75);
        let emerald_label = with_alpha(theme.emerald, 0.75);

        ChartSpec {
            labels: series.iterations().iter().map(|i| format!("n={i}")).collect(),
            datasets: vec![
                Dataset::dense(ITERATE_LABEL, series.xi(), iterate),
                Dataset::new(LOG_ERROR_LABEL, log_errors(series.errors()), error).on_axis(AxisId::Y1),
            ],
            scales: Scales {
                x: scale_options(theme, None, None, TickOverrides::max_ticks(10)),
                y: scale_options(theme, Some("xᵢ"), Some(accent_label), TickOverrides::default())
                    .at(AxisPosition::Left),
                y1: Some(
                    scale_options(theme, Some("log₁₀(ε)"), Some(emerald_label), TickOverrides::default().color(emerald_label))
                        .at(AxisPosition::Right)
                        .without_chart_area_grid(),
                ),
            },
            interaction: Interaction::default(),
            legend: LegendConfig { color: theme.legend, hidden: Vec::new() },
            tooltip: tooltip_options(theme, TooltipCallbacks::default()),
        }
    }

    pub fn build<S: DrawingSurface>(&self, surface: S, series: &ConvergenceSeries) -> ChartHandle<S> {
        let spec = self.spec(&surface, series);
        debug!(iterations = series.len(), "building convergence chart");
        ChartHandle::mount(surface, spec, self.theme, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_errors_are_gaps() {
        assert_eq!(log_errors(&[100.0, 0.0, -1.0]), vec![Some(2.0), None, None]);
        assert!(log_errors(&[f64::MIN_POSITIVE])[0].is_some());
    }
}
