use anyhow::Result;
use chart_core::config::GlobalConfig;
use chart_core::{GlobalFunctionChartBuilder, RasterSurface, RenderOptions, RootMarker, ThemeTokens};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_render(c: &mut Criterion) {
    let theme = ThemeTokens::dark();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let mut group = c.benchmark_group("global_chart_png");
    for &steps in &[300usize, 3_000usize] {
        let builder = GlobalFunctionChartBuilder::new(&theme)
            .config(GlobalConfig { steps, ..GlobalConfig::default() })
            .expect("valid steps")
            .options(opts);
        group.bench_function(format!("steps_{steps}"), |b| {
            b.iter(|| -> Result<()> {
                let surface = RasterSurface::new(960, 420)?;
                let mut chart = builder.build(surface, RootMarker::new(1.0));
                black_box(chart.png_bytes()?);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
