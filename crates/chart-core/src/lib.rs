// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart builders, handle and inputs.

pub mod axis;
pub mod chart;
pub mod config;
pub mod convergence_chart;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod format;
pub mod function;
pub mod function_chart;
pub mod geometry;
pub mod global_chart;
pub mod gradient;
pub mod grid;
pub mod marker;
pub mod protocol;
pub mod scale;
pub mod spec;
pub mod surface;
pub mod text;
pub mod theme;
pub mod tooltip;
pub mod types;
pub mod view;

pub use axis::{scale_options, ScaleConfig, TickOverrides};
pub use chart::ChartHandle;
pub use config::ChartConfig;
pub use convergence_chart::ConvergenceChartBuilder;
pub use dashboard::Dashboard;
pub use data::{ConvergenceSeries, PlotSamples, RootMarker};
pub use error::{ChartError, SurfaceError};
pub use format::{format_number, format_scientific};
pub use function::{Evaluator, FnEvaluator, FunctionInfo, Quintic};
pub use function_chart::FunctionChartBuilder;
pub use global_chart::{GlobalFunctionChartBuilder, GlobalSamples};
pub use gradient::vertical_gradient;
pub use protocol::{ComputeRequest, ComputeResponse};
pub use spec::{ChartSpec, Dataset, Fill};
pub use surface::{DrawingSurface, RasterSurface, SurfaceId};
pub use theme::ThemeTokens;
pub use tooltip::{tooltip_options, TooltipCallbacks, TooltipConfig};
pub use types::RenderOptions;
