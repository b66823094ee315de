// File: crates/chart-core/src/surface.rs
// Summary: Drawing surface abstraction and the Skia CPU raster implementation.

use std::sync::atomic::{AtomicU64, Ordering};

use skia_safe as skia;

use crate::error::SurfaceError;

/// Opaque identity of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Something a chart can be drawn on.
///
/// A surface is moved into the `ChartHandle` that draws on it, so one surface
/// never hosts two live charts.
pub trait DrawingSurface {
    fn id(&self) -> SurfaceId;

    /// Size in pixels (width, height).
    fn size(&self) -> (i32, i32);

    /// Create a linear gradient shader running from `from` to `to`.
    fn linear_gradient(
        &self,
        from: (f32, f32),
        to: (f32, f32),
        colors: &[skia::Color],
    ) -> Result<skia::Shader, SurfaceError>;

    fn canvas(&mut self) -> &skia::Canvas;

    /// Snapshot the current pixels as PNG bytes.
    fn encode_png(&mut self) -> Result<Vec<u8>, SurfaceError>;
}

/// CPU raster surface backed by Skia.
pub struct RasterSurface {
    id: SurfaceId,
    inner: skia::Surface,
}

impl RasterSurface {
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        if width <= 0 || height <= 0 {
            return Err(SurfaceError::Unavailable(format!("invalid size {width}x{height}")));
        }
        let inner = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| SurfaceError::Unavailable("failed to create raster surface".into()))?;
        Ok(Self { id: SurfaceId::next(), inner })
    }

    /// Raw RGBA8 pixels, row-major, `width * 4` bytes per row.
    pub fn read_rgba8(&mut self) -> Result<Vec<u8>, SurfaceError> {
        let (w, h) = self.size();
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if self.inner.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            Ok(pixels)
        } else {
            Err(SurfaceError::Unavailable("read_pixels failed".into()))
        }
    }
}

impl DrawingSurface for RasterSurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn size(&self) -> (i32, i32) {
        (self.inner.width(), self.inner.height())
    }

    fn linear_gradient(
        &self,
        from: (f32, f32),
        to: (f32, f32),
        colors: &[skia::Color],
    ) -> Result<skia::Shader, SurfaceError> {
        if colors.len() < 2 {
            return Err(SurfaceError::GradientUnsupported);
        }
        skia::Shader::linear_gradient((from, to), colors, None, skia::TileMode::Clamp, None, None)
            .ok_or(SurfaceError::GradientUnsupported)
    }

    fn canvas(&mut self) -> &skia::Canvas {
        self.inner.canvas()
    }

    fn encode_png(&mut self) -> Result<Vec<u8>, SurfaceError> {
        let image = self.inner.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(SurfaceError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }
}
