// File: crates/chart-core/src/gradient.rs
// Summary: Vertical area-fill gradients with a flat-color fallback.

use skia_safe as skia;
use tracing::debug;

use crate::spec::Fill;
use crate::surface::DrawingSurface;

pub const DEFAULT_GRADIENT_HEIGHT: f32 = 300.0;

/// Gradient from `top` at y=0 to `bottom` at y=`height`.
///
/// Falls back to `Fill::Solid(top)` when the surface cannot make gradients;
/// flat fills stay legible on the dark theme.
pub fn vertical_gradient(
    surface: &dyn DrawingSurface,
    top: skia::Color,
    bottom: skia::Color,
    height: f32,
) -> Fill {
    match surface.linear_gradient((0.0, 0.0), (0.0, height), &[top, bottom]) {
        Ok(shader) => Fill::Gradient { top, bottom, height, shader },
        Err(err) => {
            debug!(surface = ?surface.id(), %err, "gradient unavailable, using flat fill");
            Fill::Solid(top)
        }
    }
}
