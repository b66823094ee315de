// File: crates/chart-core/tests/global_chart.rs
// Purpose: Resampling, clamping, tooltips and marker tolerance of the global chart.

use chart_core::config::GlobalConfig;
use chart_core::spec::ZERO_REFERENCE;
use chart_core::{ChartError, Evaluator, GlobalFunctionChartBuilder, Quintic, RasterSurface, RootMarker, ThemeTokens};

fn surface() -> RasterSurface {
    RasterSurface::new(320, 160).expect("raster surface")
}

#[test]
fn rendered_values_are_clamped_for_every_sample() {
    let theme = ThemeTokens::dark();
    let builder = GlobalFunctionChartBuilder::new(&theme);
    let samples = builder.resample();
    let spec = builder.spec(&surface(), None);

    assert_eq!(spec.labels.len(), 301);
    assert_eq!(spec.labels[0], "-3.00");
    assert_eq!(spec.labels[300], "5.00");

    let main = &spec.datasets[0];
    assert_eq!(main.label, Quintic.label());
    assert_eq!(main.data.len(), 301);
    for (i, v) in main.data.iter().enumerate() {
        let want = Quintic.eval(samples.x[i]).clamp(-80.0, 80.0);
        assert_eq!(*v, Some(want), "sample {i}");
    }
    assert_eq!(spec.dataset(ZERO_REFERENCE).unwrap().style.border_dash, Some([6.0, 4.0]));
}

#[test]
fn tooltip_reports_unclamped_value() {
    let theme = ThemeTokens::dark();
    let spec = GlobalFunctionChartBuilder::new(&theme).spec(&surface(), None);
    assert_eq!(spec.datasets[0].data[0], Some(-80.0));
    assert_eq!(spec.tooltip_line(0, 0).as_deref(), Some("f(-3.000) = -524.00000"));
    assert_eq!(spec.tooltip_line(1, 0), None, "zero reference has no tooltip");
}

#[test]
fn tooltip_skips_gap_columns() {
    let theme = ThemeTokens::dark();
    let builder = GlobalFunctionChartBuilder::new(&theme);
    let spec = builder.spec(&surface(), RootMarker::new(1.0));

    // x = -3 is far from the root, so the marker has a gap there
    assert_eq!(spec.datasets[2].data[0], None);
    assert_eq!(spec.tooltip_line(2, 0), None);
    assert_eq!(spec.tooltip_lines(0), vec!["f(-3.000) = -524.00000".to_string()]);

    let xs = builder.resample().x;
    let at_root = xs.iter().position(|&x| (x - 1.0).abs() < 1e-9).unwrap();
    assert_eq!(spec.tooltip_lines(at_root).len(), 2, "curve and marker both report at the root");
}

#[test]
fn marker_window_scales_with_step() {
    let theme = ThemeTokens::dark();
    let builder = GlobalFunctionChartBuilder::new(&theme);
    let xs = builder.resample().x;
    let root = RootMarker::new(xs[150]).unwrap();
    let spec = builder.spec(&surface(), Some(root));

    let marker = &spec.datasets[2];
    assert_eq!(marker.style.point_radius, 10.0);
    let marked: Vec<usize> = marker
        .data
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|_| i))
        .collect();
    // half-width is 1.3 steps: neighbours in, two steps away out
    assert_eq!(marked, vec![149, 150, 151]);
    assert_eq!(marker.data[150], Some(Quintic.eval(xs[150])));
}

#[test]
fn marker_is_idempotent() {
    let theme = ThemeTokens::dark();
    let builder = GlobalFunctionChartBuilder::new(&theme);
    let root = RootMarker::new(0.9999999999999996);
    let a = builder.spec(&surface(), root);
    let b = builder.spec(&surface(), root);
    assert_eq!(a.datasets, b.datasets);
    assert_eq!(a.labels, b.labels);
}

#[test]
fn config_controls_domain_and_clamp() {
    let theme = ThemeTokens::dark();
    let config = GlobalConfig { x_min: 0.0, x_max: 2.0, steps: 4, clamp: 5.0, ..GlobalConfig::default() };
    let samples = GlobalFunctionChartBuilder::new(&theme).config(config).unwrap().resample();
    assert_eq!(samples.x, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    assert_eq!(samples.raw[0], -8.0);
    assert_eq!(samples.clamped[0], -5.0);
    assert_eq!(samples.clamped[2], 0.0);
}

#[test]
fn invalid_config_is_rejected_by_builder() {
    let theme = ThemeTokens::dark();
    let zero_steps = GlobalConfig { steps: 0, ..GlobalConfig::default() };
    assert!(matches!(GlobalFunctionChartBuilder::new(&theme).config(zero_steps), Err(ChartError::Config(_))));

    let inverted = GlobalConfig { x_min: 5.0, x_max: -3.0, ..GlobalConfig::default() };
    assert!(matches!(GlobalFunctionChartBuilder::new(&theme).config(inverted), Err(ChartError::Config(_))));

    let huge = GlobalConfig { steps: usize::MAX, ..GlobalConfig::default() };
    assert!(GlobalFunctionChartBuilder::new(&theme).config(huge).is_err());
}
