// File: crates/chart-core/tests/response.rs
// Purpose: Backend response fixture end to end, through the dashboard.

use chart_core::convergence_chart::LOG_ERROR_LABEL;
use chart_core::config::GlobalConfig;
use chart_core::{ChartConfig, ChartError, ComputeResponse, Dashboard, RasterSurface};

fn response() -> ComputeResponse {
    ComputeResponse::from_json(include_str!("fixtures/response.json")).expect("fixture parses")
}

fn dashboard() -> Dashboard<RasterSurface> {
    let config = ChartConfig { draw_labels: false, ..ChartConfig::default() };
    let s = || RasterSurface::new(320, 160).expect("raster surface");
    Dashboard::new(config, s(), s(), s()).expect("valid config")
}

#[test]
fn fixture_converts_to_chart_inputs() {
    let r = response();
    r.ensure_success().unwrap();
    let samples = r.plot_samples().unwrap();
    assert_eq!(samples.len(), 61);
    assert_eq!(samples.domain(), (-3.0, 3.0));

    let series = r.convergence_series().unwrap();
    assert_eq!(series.len(), 7);
    assert_eq!(series.iterations()[0], 1);
    assert_eq!(*series.errors().last().unwrap(), 0.0);

    let root = r.root_marker().unwrap();
    assert!((root.x() - 1.0).abs() < 1e-12);
    assert_eq!(r.result.as_ref().map(|s| s.total_iterations), Some(7));
}

#[test]
fn dashboard_draws_all_three_charts() {
    let mut d = dashboard();
    assert!(d.is_empty());
    d.show(&response()).unwrap();
    assert!(!d.is_empty());

    let function = d.function_chart().spec().unwrap();
    let marked: Vec<usize> = function.datasets[2]
        .data
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|_| i))
        .collect();
    assert_eq!(marked, vec![40], "only x = 1.0 lies within 0.06 of the root");

    let convergence = d.convergence_chart().spec().unwrap();
    assert_eq!(convergence.dataset(LOG_ERROR_LABEL).unwrap().data.last(), Some(&None));

    assert_eq!(d.global_chart().spec().unwrap().labels.len(), 301);
}

#[test]
fn rejected_response_clears_previous_charts() {
    let mut d = dashboard();
    d.show(&response()).unwrap();

    let failed = ComputeResponse::from_json(r#"{"success": false, "error": "x0 is required"}"#).unwrap();
    assert_eq!(d.show(&failed), Err(ChartError::Unsuccessful("x0 is required".into())));
    assert!(d.is_empty(), "stale charts must not outlive a failed run");

    d.show(&response()).unwrap();
    let mut broken = response();
    broken.plot_convergence = None;
    assert_eq!(d.show(&broken), Err(ChartError::MissingField("plotConvergence")));
    assert!(d.function_chart().is_disposed());
    assert!(d.convergence_chart().is_disposed());
    assert!(d.global_chart().is_disposed());
}

#[test]
fn dashboard_rejects_invalid_config() {
    let s = || RasterSurface::new(320, 160).expect("raster surface");
    let config = ChartConfig {
        global: GlobalConfig { steps: 0, ..GlobalConfig::default() },
        ..ChartConfig::default()
    };
    assert!(matches!(Dashboard::new(config, s(), s(), s()), Err(ChartError::Config(_))));
}

#[test]
fn reset_disposes_and_show_redraws() {
    let mut d = dashboard();
    d.show(&response()).unwrap();
    d.reset();
    assert!(d.is_empty());
    d.reset();
    d.show(&response()).unwrap();
    assert!(!d.is_empty());

    let (a, b, c) = d.into_surfaces();
    assert_ne!(chart_core::DrawingSurface::id(&a), chart_core::DrawingSurface::id(&b));
    assert_ne!(chart_core::DrawingSurface::id(&b), chart_core::DrawingSurface::id(&c));
}
