//! Shared helpers for the render integration tests.
//!
//! Include with `mod common;` at the top of a test file.

#![allow(dead_code)]

use codeshot_config::{Color, TokenType};
use codeshot_fonts::{Fixed, GlyphEngine, Point};
use codeshot_render::{Line, Token};
use image::{Rgba, RgbaImage};

/// One recorded `draw_glyph` call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub text: String,
    pub dot: Point,
    pub color: Color,
}

impl DrawCall {
    /// Pen position rounded to whole pixels.
    pub fn px(&self) -> (i32, i32) {
        (self.dot.x.round(), self.dot.y.round())
    }
}

/// A monospace engine where every character advances `advance` pixels.
///
/// Each drawn glyph is a solid `advance`-wide square sitting on the
/// baseline, and every call is recorded in `draws`.
#[derive(Debug, Default)]
pub struct MonoEngine {
    pub advance: i32,
    pub draws: Vec<DrawCall>,
}

impl MonoEngine {
    pub fn new(advance: i32) -> Self {
        Self {
            advance,
            draws: Vec::new(),
        }
    }

    /// Drawn characters, in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.draws.iter().map(|d| d.text.as_str()).collect()
    }
}

impl GlyphEngine for MonoEngine {
    fn measure(&self, text: &str) -> Fixed {
        Fixed::from_px(self.advance * text.chars().count() as i32)
    }

    fn draw_glyph(&mut self, canvas: &mut RgbaImage, text: &str, dot: Point, color: Color) {
        self.draws.push(DrawCall {
            text: text.to_string(),
            dot,
            color,
        });

        let (x0, baseline) = (dot.x.round(), dot.y.round());
        let pixel = Rgba(color.as_rgba());
        for y in (baseline - self.advance).max(0)..baseline {
            for x in x0.max(0)..x0 + self.advance {
                if (x as u32) < canvas.width() && (y as u32) < canvas.height() {
                    canvas.put_pixel(x as u32, y as u32, pixel);
                }
            }
        }
    }
}

/// A canvas filled with `color`.
pub fn canvas(width: u32, height: u32, color: Color) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color.as_rgba()))
}

/// A single-token line of plain text.
pub fn text_line(text: &str) -> Line {
    vec![Token::new(TokenType::Text, text)]
}
