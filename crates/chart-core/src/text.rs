// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout with theme font families.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
    families: &'static [&'static str],
}

impl TextShaper {
    pub fn new(families: &'static [&'static str]) -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc, families }
    }

    fn make_style(&self, size: f32, color: skia::Color, weight: u16) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(self.families);
        if weight >= 500 {
            ts.set_font_style(skia::FontStyle::new(
                skia::font_style::Weight::from(weight as i32),
                skia::font_style::Width::NORMAL,
                skia::font_style::Slant::Upright,
            ));
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, weight: u16) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = self.make_style(size, color, weight);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), 400);
        // width of the longest line
        p.longest_line()
    }

    /// Draw with the baseline at `y`, starting at `x`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, weight: u16) {
        let p = self.layout(text, size, color, weight);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw with the baseline at `y`, ending at `x`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let w = self.measure_width(text, size);
        self.draw_left(canvas, text, x - w, y, size, color, 400);
    }

    /// Draw horizontally centred on `x`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, weight: u16) {
        let w = self.measure_width(text, size);
        self.draw_left(canvas, text, x - w * 0.5, y, size, color, weight);
    }
}
