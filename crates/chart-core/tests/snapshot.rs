// File: crates/chart-core/tests/snapshot.rs
// Purpose: Pixel snapshots of the fixture charts, compared on decoded RGBA.
// Behavior:
// - Renders each chart twice on fresh surfaces without text and requires identical pixels.
// - Requires the render to carry more than the background so equality is not vacuous.
// - Requires a visible change (the root marker) to change pixels.

use chart_core::{
    ChartHandle, ComputeResponse, ConvergenceChartBuilder, FunctionChartBuilder, GlobalFunctionChartBuilder,
    RasterSurface, RenderOptions, ThemeTokens,
};
use image::RgbaImage;

fn response() -> ComputeResponse {
    let text = include_str!("fixtures/response.json");
    ComputeResponse::from_json(text).expect("fixture parses")
}

fn opts() -> RenderOptions {
    // avoid text nondeterminism across platforms
    RenderOptions { draw_labels: false, ..RenderOptions::default() }
}

fn surface() -> RasterSurface {
    RasterSurface::new(480, 240).expect("raster surface")
}

fn decode(mut chart: ChartHandle<RasterSurface>) -> RgbaImage {
    let bytes = chart.png_bytes().expect("encode png");
    image::load_from_memory(&bytes).expect("decode png").to_rgba8()
}

fn assert_stable(name: &str, render: impl Fn() -> ChartHandle<RasterSurface>, theme: &ThemeTokens) {
    let a = decode(render());
    let b = decode(render());
    assert_eq!(a.dimensions(), (480, 240), "{name}");
    assert_eq!(a.as_raw(), b.as_raw(), "{name}: pixels differ between identical renders");

    let bg = theme.background;
    let bg = [bg.r(), bg.g(), bg.b(), bg.a()];
    let drawn = a.pixels().filter(|p| p.0 != bg).count();
    assert!(drawn > 1_000, "{name}: only {drawn} non-background pixels");
}

#[test]
fn function_chart_renders_deterministically() {
    let theme = ThemeTokens::dark();
    let r = response();
    let samples = r.plot_samples().unwrap();
    let builder = FunctionChartBuilder::new(&theme).options(opts());
    assert_stable("function", || builder.build(surface(), &samples, r.root_marker()), &theme);
}

#[test]
fn convergence_chart_renders_deterministically() {
    let theme = ThemeTokens::dark();
    let series = response().convergence_series().unwrap();
    let builder = ConvergenceChartBuilder::new(&theme).options(opts());
    assert_stable("convergence", || builder.build(surface(), &series), &theme);
}

#[test]
fn global_chart_renders_deterministically() {
    let theme = ThemeTokens::dark();
    let root = response().root_marker();
    let builder = GlobalFunctionChartBuilder::new(&theme).options(opts());
    assert_stable("global", || builder.build(surface(), root), &theme);
}

#[test]
fn root_marker_changes_pixels() {
    let theme = ThemeTokens::dark();
    let builder = GlobalFunctionChartBuilder::new(&theme).options(opts());
    let with_root = decode(builder.build(surface(), response().root_marker()));
    let without = decode(builder.build(surface(), None));
    assert_ne!(with_root.as_raw(), without.as_raw());
}

#[test]
fn decoded_snapshot_matches_surface_size() {
    let theme = ThemeTokens::light();
    let img = decode(GlobalFunctionChartBuilder::new(&theme).options(opts()).build(surface(), None));
    assert_eq!(img.dimensions(), (480, 240));
    // corner pixel sits in the margin, so it carries the background
    let bg = theme.background;
    assert_eq!(img.get_pixel(0, 0).0, [bg.r(), bg.g(), bg.b(), bg.a()]);
}
