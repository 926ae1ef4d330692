//! The glyph-engine capability the renderer paints through.

use codeshot_config::Color;
use image::RgbaImage;

use crate::fixed::{Fixed, Point};

/// Font measurement and glyph painting.
///
/// Advances are purely additive: `measure("ab") == measure("a") + measure("b")`.
/// No shaping or kerning is applied.
pub trait GlyphEngine {
    /// Advance width of `text` in 26.6 units.
    fn measure(&self, text: &str) -> Fixed;

    /// Paint `text` with its first glyph origin at `dot` (`dot.y` is the
    /// baseline). Pixels outside `canvas` are clipped.
    fn draw_glyph(&mut self, canvas: &mut RgbaImage, text: &str, dot: Point, color: Color);
}

impl<T: GlyphEngine + ?Sized> GlyphEngine for &mut T {
    fn measure(&self, text: &str) -> Fixed {
        (**self).measure(text)
    }

    fn draw_glyph(&mut self, canvas: &mut RgbaImage, text: &str, dot: Point, color: Color) {
        (**self).draw_glyph(canvas, text, dot, color)
    }
}

impl<T: GlyphEngine + ?Sized> GlyphEngine for Box<T> {
    fn measure(&self, text: &str) -> Fixed {
        (**self).measure(text)
    }

    fn draw_glyph(&mut self, canvas: &mut RgbaImage, text: &str, dot: Point, color: Color) {
        (**self).draw_glyph(canvas, text, dot, color)
    }
}
