// File: crates/chart-core/tests/handle.rs
// Purpose: ChartHandle lifecycle: mount, dispose, remount and surface hand-back.

use chart_core::{ConvergenceChartBuilder, ConvergenceSeries, DrawingSurface, FunctionChartBuilder, PlotSamples, RasterSurface, ThemeTokens};

fn samples() -> PlotSamples {
    PlotSamples::new(vec![0.0, 1.0, 2.0], vec![-8.0, 0.0, 22.0]).unwrap()
}

#[test]
fn dispose_is_idempotent() {
    let theme = ThemeTokens::dark();
    let surface = RasterSurface::new(240, 120).unwrap();
    let mut chart = FunctionChartBuilder::new(&theme).build(surface, &samples(), None);
    assert!(!chart.is_disposed());

    chart.dispose();
    assert!(chart.is_disposed());
    assert!(chart.spec().is_none());
    chart.dispose();
    assert!(chart.is_disposed());
}

#[test]
fn into_surface_returns_the_same_surface() {
    let theme = ThemeTokens::dark();
    let surface = RasterSurface::new(240, 120).unwrap();
    let id = surface.id();
    let chart = FunctionChartBuilder::new(&theme).build(surface, &samples(), None);
    assert_eq!(chart.surface_id(), id);

    // Rebuild a different chart on the released surface.
    let surface = chart.into_surface();
    assert_eq!(surface.id(), id);
    let series = ConvergenceSeries::new(vec![1], vec![0.5], vec![0.1]).unwrap();
    let chart = ConvergenceChartBuilder::new(&theme).build(surface, &series);
    assert_eq!(chart.surface_id(), id);
    assert_eq!(chart.spec().map(|s| s.datasets.len()), Some(2));
}

#[test]
fn disposed_surface_is_blank() {
    let theme = ThemeTokens::dark();
    let mut blank = RasterSurface::new(240, 120).unwrap();
    blank.canvas().clear(theme.background);
    let want = blank.read_rgba8().unwrap();

    let chart = FunctionChartBuilder::new(&theme).build(RasterSurface::new(240, 120).unwrap(), &samples(), None);
    let mut surface = chart.into_surface();
    assert_eq!(surface.read_rgba8().unwrap(), want);
}

#[test]
fn png_snapshot_has_header() {
    let theme = ThemeTokens::light();
    let mut chart = FunctionChartBuilder::new(&theme).build(RasterSurface::new(240, 120).unwrap(), &samples(), None);
    let bytes = chart.png_bytes().expect("encode");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let out = std::path::PathBuf::from("target/test_out/handle.png");
    chart.write_png(&out).expect("write png");
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}
