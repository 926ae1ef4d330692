//! The line/token/character paint loop.

use std::io::Write;

use codeshot_config::{Color, StyleTable};
use codeshot_fonts::{Fixed, GlyphEngine, Point};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, RgbaImage};

use crate::color::{contrast_color, resolve};
use crate::error::RenderError;
use crate::layout::{
    RenderConfig, gutter_digits, gutter_width, line_advance, tab_advance, text_offset,
};
use crate::token::Line;

/// Paints lines of tokens onto a canvas and encodes the result.
///
/// Each pass owns its pen; nothing carries over between passes, so the same
/// inputs always produce the same pixels.
#[derive(Debug, Clone)]
pub struct LineRenderer {
    config: RenderConfig,
    background: Color,
}

impl LineRenderer {
    /// `background` is the color behind the text, used for contrast fallback.
    pub fn new(config: RenderConfig, background: Color) -> Self {
        Self { config, background }
    }

    /// Paint every character of every token into `canvas`.
    pub fn paint<E: GlyphEngine + ?Sized>(
        &self,
        lines: &[Line],
        style: &StyleTable,
        engine: &mut E,
        canvas: &mut RgbaImage,
    ) {
        let (start_x, start_y) = self.config.start_point;
        let left = Fixed::from_px(start_x);
        let mut pen = Point::new(left, Fixed::from_px(start_y));
        let digits = gutter_digits(lines.len());
        let number_color = contrast_color(self.background);
        let mut buf = [0u8; 4];

        for (i, line) in lines.iter().enumerate() {
            pen.y += line_advance(self.config.font_size, i);
            let space = engine.measure(" ");

            if self.config.draw_line_numbers {
                pen.x = left;
                let label = format!("{:>width$}", i + 1, width = digits + 1);
                for ch in label.chars() {
                    let glyph = ch.encode_utf8(&mut buf);
                    let advance = engine.measure(glyph);
                    if ch != ' ' {
                        engine.draw_glyph(canvas, glyph, pen, number_color);
                    }
                    pen.x += advance;
                }
            }

            let gutter = self
                .config
                .draw_line_numbers
                .then(|| gutter_width(lines.len(), space));
            let sx = left + text_offset(space, gutter);
            pen.x = sx;

            for token in line {
                let color = resolve(token.token_type, style, self.background);
                for ch in token.text.chars() {
                    match ch {
                        // pen.y stays on this line's baseline
                        '\n' => pen.x = sx,
                        '\t' => pen.x += tab_advance(&*engine),
                        _ => {
                            let glyph = ch.encode_utf8(&mut buf);
                            let advance = engine.measure(glyph);
                            engine.draw_glyph(canvas, glyph, pen, color);
                            pen.x += advance;
                        }
                    }
                }
            }
        }
    }

    /// Paint, then PNG-encode the canvas into `sink`.
    ///
    /// The image is fully encoded before anything is written, so a failed
    /// encode leaves the sink untouched.
    pub fn render<E: GlyphEngine + ?Sized, W: Write>(
        &self,
        lines: &[Line],
        style: &StyleTable,
        engine: &mut E,
        mut canvas: RgbaImage,
        sink: &mut W,
    ) -> Result<(), RenderError> {
        self.paint(lines, style, engine, &mut canvas);
        let bytes = encode_png_to_vec(canvas)?;
        sink.write_all(&bytes)
            .and_then(|()| sink.flush())
            .map_err(ImageError::IoError)?;
        Ok(())
    }

    /// Paint and return the encoded PNG bytes.
    pub fn render_to_vec<E: GlyphEngine + ?Sized>(
        &self,
        lines: &[Line],
        style: &StyleTable,
        engine: &mut E,
        mut canvas: RgbaImage,
    ) -> Result<Vec<u8>, RenderError> {
        self.paint(lines, style, engine, &mut canvas);
        encode_png_to_vec(canvas)
    }
}

/// PNG-encode a canvas straight into `sink`.
pub fn encode_png<W: Write>(canvas: RgbaImage, sink: W) -> Result<(), RenderError> {
    let (width, height) = canvas.dimensions();
    PngEncoder::new(sink).write_image(canvas.as_raw(), width, height, ExtendedColorType::Rgba8)?;
    Ok(())
}

fn encode_png_to_vec(canvas: RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    encode_png(canvas, &mut bytes)?;
    Ok(bytes)
}
