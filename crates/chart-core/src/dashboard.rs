// File: crates/chart-core/src/dashboard.rs
// Summary: Owns the three chart surfaces and redraws them from each compute response.

use tracing::{info, warn};

use crate::chart::ChartHandle;
use crate::config::ChartConfig;
use crate::convergence_chart::ConvergenceChartBuilder;
use crate::data::RootMarker;
use crate::error::ChartError;
use crate::function::{Evaluator, Quintic};
use crate::function_chart::FunctionChartBuilder;
use crate::global_chart::GlobalFunctionChartBuilder;
use crate::protocol::ComputeResponse;
use crate::spec::ChartSpec;
use crate::surface::DrawingSurface;
use crate::theme::ThemeTokens;
use crate::types::RenderOptions;

/// Function, convergence and global charts for one solver session.
///
/// Each response replaces all three charts. A rejected response blanks them,
/// so a failed run never sits next to the previous run's root.
pub struct Dashboard<S: DrawingSurface> {
    theme: ThemeTokens,
    config: ChartConfig,
    evaluator: Box<dyn Evaluator>,
    function: ChartHandle<S>,
    convergence: ChartHandle<S>,
    global: ChartHandle<S>,
}

impl<S: DrawingSurface> Dashboard<S> {
    pub fn new(config: ChartConfig, function: S, convergence: S, global: S) -> Result<Self, ChartError> {
        config.validate()?;
        let theme = config.theme();
        Ok(Self {
            function: ChartHandle::vacant(function, &theme),
            convergence: ChartHandle::vacant(convergence, &theme),
            global: ChartHandle::vacant(global, &theme),
            evaluator: Box::new(Quintic),
            theme,
            config,
        })
    }

    pub fn with_evaluator(mut self, evaluator: Box<dyn Evaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Validate `response` and redraw every chart from it.
    ///
    /// On error all charts are disposed; nothing is drawn until every input
    /// has been validated.
    pub fn show(&mut self, response: &ComputeResponse) -> Result<(), ChartError> {
        let specs = match self.prepare(response) {
            Ok(specs) => specs,
            Err(err) => {
                warn!(%err, "response rejected");
                self.reset();
                return Err(err);
            }
        };
        let [function, convergence, global] = specs;
        let opts = RenderOptions { draw_labels: self.config.draw_labels, ..RenderOptions::default() };
        self.function.remount(function, &self.theme, &opts);
        self.convergence.remount(convergence, &self.theme, &opts);
        self.global.remount(global, &self.theme, &opts);
        Ok(())
    }

    /// Specs for the function, convergence and global charts.
    fn prepare(&self, response: &ComputeResponse) -> Result<[ChartSpec; 3], ChartError> {
        response.ensure_success()?;
        let samples = response.plot_samples()?;
        let series = response.convergence_series()?;
        let root = response.root_marker();
        let theme = &self.theme;
        let evaluator = self.evaluator.as_ref();

        let function = FunctionChartBuilder::new(theme)
            .evaluator(evaluator)
            .config(self.config.zoom)?
            .spec(self.function.surface(), &samples, root);
        let convergence = ConvergenceChartBuilder::new(theme)
            .config(self.config.convergence)?
            .spec(self.convergence.surface(), &series);
        let global = GlobalFunctionChartBuilder::new(theme)
            .evaluator(evaluator)
            .config(self.config.global)?
            .spec(self.global.surface(), root);

        info!(
            root = ?root.map(RootMarker::x),
            iterations = series.len(),
            samples = samples.len(),
            "dashboard updated"
        );
        Ok([function, convergence, global])
    }

    /// Dispose all charts, keeping the surfaces.
    pub fn reset(&mut self) {
        self.function.dispose();
        self.convergence.dispose();
        self.global.dispose();
        info!("dashboard reset");
    }

    pub fn is_empty(&self) -> bool {
        self.function.is_disposed() && self.convergence.is_disposed() && self.global.is_disposed()
    }

    pub fn function_chart(&mut self) -> &mut ChartHandle<S> {
        &mut self.function
    }

    pub fn convergence_chart(&mut self) -> &mut ChartHandle<S> {
        &mut self.convergence
    }

    pub fn global_chart(&mut self) -> &mut ChartHandle<S> {
        &mut self.global
    }

    /// Hand back the three surfaces (function, convergence, global).
    pub fn into_surfaces(self) -> (S, S, S) {
        (self.function.into_surface(), self.convergence.into_surface(), self.global.into_surface())
    }
}
