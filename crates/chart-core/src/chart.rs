// File: crates/chart-core/src/chart.rs
// Summary: ChartHandle (owns a surface + drawn spec) and the Skia drawing pipeline.

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use crate::axis::{AxisPosition, ScaleConfig};
use crate::error::ChartError;
use crate::geometry::RectI32;
use crate::grid::{category_ticks, linspace};
use crate::scale::{CategoryScale, ValueScale};
use crate::spec::{AxisId, ChartSpec, Dataset, Fill};
use crate::surface::{DrawingSurface, SurfaceId};
use crate::text::TextShaper;
use crate::theme::ThemeTokens;
use crate::types::RenderOptions;
use crate::view::ViewState;

/// A chart drawn on a surface it owns.
///
/// Building a chart moves the surface in, so a surface never hosts two live
/// charts. `dispose` is idempotent; `into_surface` disposes and hands the
/// surface back for the next build.
pub struct ChartHandle<S: DrawingSurface> {
    surface: S,
    spec: Option<ChartSpec>,
    background: skia::Color,
}

impl<S: DrawingSurface> ChartHandle<S> {
    /// Draw `spec` on `surface` and take ownership of both.
    pub fn mount(mut surface: S, spec: ChartSpec, theme: &ThemeTokens, opts: &RenderOptions) -> Self {
        let (width, height) = surface.size();
        render(surface.canvas(), width, height, &spec, theme, opts);
        debug!(
            surface = ?surface.id(),
            datasets = spec.datasets.len(),
            columns = spec.labels.len(),
            "chart mounted"
        );
        Self { surface, spec: Some(spec), background: theme.background }
    }

    /// Take `surface` without drawing a chart; the handle starts disposed.
    pub fn vacant(mut surface: S, theme: &ThemeTokens) -> Self {
        surface.canvas().clear(theme.background);
        Self { surface, spec: None, background: theme.background }
    }

    /// Dispose whatever is drawn, then draw `spec` on the same surface.
    pub fn remount(&mut self, spec: ChartSpec, theme: &ThemeTokens, opts: &RenderOptions) {
        self.dispose();
        let (width, height) = self.surface.size();
        render(self.surface.canvas(), width, height, &spec, theme, opts);
        debug!(surface = ?self.surface.id(), datasets = spec.datasets.len(), "chart remounted");
        self.background = theme.background;
        self.spec = Some(spec);
    }

    /// The drawn spec; `None` once disposed.
    pub fn spec(&self) -> Option<&ChartSpec> {
        self.spec.as_ref()
    }

    pub fn is_disposed(&self) -> bool {
        self.spec.is_none()
    }

    pub fn surface_id(&self) -> SurfaceId {
        self.surface.id()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Release the chart and blank the surface. Later calls do nothing.
    pub fn dispose(&mut self) {
        if self.spec.take().is_some() {
            self.surface.canvas().clear(self.background);
            debug!(surface = ?self.surface.id(), "chart disposed");
        }
    }

    /// Dispose and return the surface for reuse.
    pub fn into_surface(mut self) -> S {
        self.dispose();
        self.surface
    }

    /// PNG snapshot of the surface.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>, ChartError> {
        Ok(self.surface.encode_png()?)
    }

    /// Write a PNG snapshot to `output_png_path`, creating parent directories.
    pub fn write_png(&mut self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

/// Draw `spec` onto `canvas` covering a `width` x `height` area.
pub fn render(
    canvas: &skia::Canvas,
    width: i32,
    height: i32,
    spec: &ChartSpec,
    theme: &ThemeTokens,
    opts: &RenderOptions,
) {
    let opts = if uses_right_axis(spec) { opts.with_secondary_axis() } else { *opts };
    canvas.clear(theme.background);

    let plot = RectI32::inset(width, height, &opts.insets);
    let view = ViewState::from_spec(spec);
    let xs = CategoryScale::new(plot.left as f32, plot.right as f32, spec.labels.len());
    let ys = ValueScale::new_linear(plot.top as f32, plot.bottom as f32, view.y_min, view.y_max);
    let y1s = view
        .y1
        .map(|(lo, hi)| ValueScale::new_linear(plot.top as f32, plot.bottom as f32, lo, hi));

    draw_grid(canvas, &plot, spec, &xs, &ys, y1s.as_ref());

    for ds in &spec.datasets {
        let scale = match ds.axis {
            AxisId::Y => &ys,
            AxisId::Y1 => y1s.as_ref().unwrap_or(&ys),
        };
        draw_dataset(canvas, &xs, scale, ds);
    }

    if opts.draw_labels {
        let text = TextShaper::new(theme.font_families);
        draw_axes(canvas, &text, theme, &plot, spec, &xs, &ys, y1s.as_ref());
        draw_legend(canvas, &text, theme, &plot, spec);
    }
}

// ---- helpers ----------------------------------------------------------------

/// True when some value axis draws its labels on the right edge.
fn uses_right_axis(spec: &ChartSpec) -> bool {
    let y_right = spec.scales.y.position == Some(AxisPosition::Right);
    let y1_right = spec
        .scales
        .y1
        .as_ref()
        .is_some_and(|a| a.position.unwrap_or(AxisPosition::Right) == AxisPosition::Right);
    y_right || y1_right
}

fn value_ticks(scale: &ValueScale, limit: Option<usize>) -> Vec<f64> {
    linspace(scale.vmin, scale.vmax, limit.unwrap_or(6).clamp(2, 11))
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: &RectI32,
    spec: &ChartSpec,
    xs: &CategoryScale,
    ys: &ValueScale,
    y1s: Option<&ValueScale>,
) {
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let x = &spec.scales.x;
    if x.grid.draw_on_chart_area {
        paint.set_color(x.grid.color);
        for i in category_ticks(spec.labels.len(), x.ticks.max_ticks_limit) {
            let px = xs.to_px(i);
            canvas.draw_line((px, t), (px, b), &paint);
        }
    }

    let y = &spec.scales.y;
    if y.grid.draw_on_chart_area {
        paint.set_color(y.grid.color);
        for v in value_ticks(ys, y.ticks.max_ticks_limit) {
            let py = ys.to_px(v);
            canvas.draw_line((l, py), (r, py), &paint);
        }
    }

    if let (Some(y1), Some(s)) = (spec.scales.y1.as_ref(), y1s) {
        if y1.grid.draw_on_chart_area {
            paint.set_color(y1.grid.color);
            for v in value_ticks(s, y1.ticks.max_ticks_limit) {
                let py = s.to_px(v);
                canvas.draw_line((l, py), (r, py), &paint);
            }
        }
    }

    if x.grid.draw_border || y.grid.draw_border {
        paint.set_color(y.grid.color);
        canvas.draw_line((l, b), (r, b), &paint);
        canvas.draw_line((l, t), (l, b), &paint);
    }
}

/// Runs of consecutive present points; gaps split runs.
fn segments(ds: &Dataset, xs: &CategoryScale, ys: &ValueScale) -> Vec<Vec<(f32, f32)>> {
    let mut out = Vec::new();
    let mut run = Vec::new();
    for (i, v) in ds.data.iter().enumerate() {
        match v {
            Some(y) if y.is_finite() => run.push((xs.to_px(i), ys.to_px(*y))),
            _ => {
                if !run.is_empty() {
                    out.push(std::mem::take(&mut run));
                }
            }
        }
    }
    if !run.is_empty() {
        out.push(run);
    }
    out
}

/// Bezier control points (before, after) for `cur`, smoothing by `tension`.
fn control_points(prev: (f32, f32), cur: (f32, f32), next: (f32, f32), tension: f32) -> ((f32, f32), (f32, f32)) {
    let d01 = ((cur.0 - prev.0).powi(2) + (cur.1 - prev.1).powi(2)).sqrt();
    let d12 = ((next.0 - cur.0).powi(2) + (next.1 - cur.1).powi(2)).sqrt();
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 { (d01 / total, d12 / total) } else { (0.0, 0.0) };
    let (fa, fb) = (tension * s01, tension * s12);
    let (dx, dy) = (next.0 - prev.0, next.1 - prev.1);
    ((cur.0 - fa * dx, cur.1 - fa * dy), (cur.0 + fb * dx, cur.1 + fb * dy))
}

fn line_path(points: &[(f32, f32)], tension: f32) -> skia::Path {
    let mut path = skia::PathBuilder::new();
    let Some(&first) = points.first() else { return path.into() };
    path.move_to(first);
    if tension <= 0.0 || points.len() < 3 {
        for &p in &points[1..] {
            path.line_to(p);
        }
        return path.into();
    }
    let n = points.len();
    let cps: Vec<_> = (0..n)
        .map(|i| {
            let prev = points[i.saturating_sub(1)];
            let next = points[(i + 1).min(n - 1)];
            control_points(prev, points[i], next, tension)
        })
        .collect();
    for i in 1..n {
        path.cubic_to(cps[i - 1].1, cps[i].0, points[i]);
    }
    path.into()
}

fn draw_dataset(canvas: &skia::Canvas, xs: &CategoryScale, ys: &ValueScale, ds: &Dataset) {
    let style = &ds.style;
    let runs = segments(ds, xs, ys);

    if style.show_line {
        for run in runs.iter().filter(|r| r.len() >= 2) {
            let path = line_path(run, style.tension);

            if let Some(fill) = &style.fill {
                let base = ys.to_px_clamped(0.0);
                let mut area = skia::PathBuilder::new_path(&path);
                let (first, last) = (run[0], run[run.len() - 1]);
                area.line_to((last.0, base));
                area.line_to((first.0, base));
                area.close();
                let area: skia::Path = area.into();

                let mut paint = skia::Paint::default();
                paint.set_anti_alias(true);
                paint.set_style(skia::paint::Style::Fill);
                match fill {
                    Fill::Solid(c) => {
                        paint.set_color(*c);
                    }
                    Fill::Gradient { shader, .. } => {
                        paint.set_shader(shader.clone());
                    }
                }
                canvas.draw_path(&area, &paint);
            }

            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(style.border_width);
            stroke.set_color(style.border_color);
            if let Some([on, off]) = style.border_dash {
                stroke.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
            }
            canvas.draw_path(&path, &stroke);
        }
    }

    if style.point_radius > 0.0 {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(style.point_fill());

        let mut ring = skia::Paint::default();
        ring.set_anti_alias(true);
        ring.set_style(skia::paint::Style::Stroke);
        ring.set_stroke_width(style.point_border_width);

        for &p in runs.iter().flatten() {
            canvas.draw_circle(p, style.point_radius, &fill);
            if let Some(c) = style.point_border_color {
                ring.set_color(c);
                canvas.draw_circle(p, style.point_radius, &ring);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_axes(
    canvas: &skia::Canvas,
    text: &TextShaper,
    theme: &ThemeTokens,
    plot: &RectI32,
    spec: &ChartSpec,
    xs: &CategoryScale,
    ys: &ValueScale,
    y1s: Option<&ValueScale>,
) {
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let size = theme.font_size;

    // X tick labels
    let x = &spec.scales.x;
    for i in category_ticks(spec.labels.len(), x.ticks.max_ticks_limit) {
        text.draw_centered(canvas, &spec.labels[i], xs.to_px(i), b + x.ticks.padding + size, size, x.ticks.color, 400);
    }
    if let Some(title) = &x.title {
        let y = b + x.ticks.padding + size * 2.0 + 10.0;
        text.draw_centered(canvas, &title.text, (l + r) * 0.5, y, title.font_size, title.color, title.font_weight);
    }

    draw_value_axis(canvas, text, plot, &spec.scales.y, ys, AxisPosition::Left, size);
    if let (Some(y1), Some(s)) = (spec.scales.y1.as_ref(), y1s) {
        draw_value_axis(canvas, text, plot, y1, s, AxisPosition::Right, size);
    }
}

/// Ticks and rotated title of one value axis, on its configured side.
fn draw_value_axis(
    canvas: &skia::Canvas,
    text: &TextShaper,
    plot: &RectI32,
    axis: &ScaleConfig,
    scale: &ValueScale,
    fallback: AxisPosition,
    size: f32,
) {
    let (t, b) = (plot.top as f32, plot.bottom as f32);
    let side = axis.position.unwrap_or(fallback);
    for v in value_ticks(scale, axis.ticks.max_ticks_limit) {
        let label = axis.ticks.label(v);
        let y = scale.to_px(v) + size * 0.35;
        match side {
            AxisPosition::Left => {
                text.draw_right(canvas, &label, plot.left as f32 - axis.ticks.padding, y, size, axis.ticks.color)
            }
            AxisPosition::Right => text.draw_left(
                canvas,
                &label,
                plot.right as f32 + axis.ticks.padding,
                y,
                size,
                axis.ticks.color,
                400,
            ),
        }
    }
    if let Some(title) = &axis.title {
        let x = match side {
            AxisPosition::Left => 14.0,
            AxisPosition::Right => canvas.base_layer_size().width as f32 - 14.0,
        };
        draw_vertical_title(canvas, text, &title.text, x, (t + b) * 0.5, title.font_size, title.color, title.font_weight);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_vertical_title(
    canvas: &skia::Canvas,
    text: &TextShaper,
    label: &str,
    x: f32,
    y: f32,
    size: f32,
    color: skia::Color,
    weight: u16,
) {
    canvas.save();
    canvas.translate((x, y));
    canvas.rotate(-90.0, None);
    text.draw_centered(canvas, label, 0.0, 0.0, size, color, weight);
    canvas.restore();
}

fn draw_legend(canvas: &skia::Canvas, text: &TextShaper, theme: &ThemeTokens, plot: &RectI32, spec: &ChartSpec) {
    let size = theme.font_size;
    let baseline = (plot.top as f32 * 0.5).max(size);
    let swatch = 10.0;
    let mut x = plot.left as f32;

    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);

    for ds in spec.legend_items() {
        let color = if ds.style.show_line { ds.style.border_color } else { ds.style.point_fill() };
        paint.set_color(color);
        let rect = skia::Rect::from_xywh(x, baseline - swatch, swatch, swatch);
        canvas.draw_rect(rect, &paint);
        x += swatch + 6.0;
        text.draw_left(canvas, &ds.label, x, baseline, size, spec.legend.color, 400);
        x += text.measure_width(&ds.label, size) + 18.0;
    }
}
