//! Layout arithmetic shared by the paint loop and the panel.
//!
//! Everything here is in 26.6 [`Fixed`] units except the inputs that the
//! caller supplies in whole pixels.

use codeshot_fonts::{Fixed, GlyphEngine};

use crate::token::Token;

/// A tab advances the pen by this many space widths.
pub const TAB_WIDTH_SPACES: usize = 4;

/// Extra space between consecutive lines, as a fraction of the font size.
pub const LINE_PADDING_RATIO: f32 = 0.25;

const TAB: &str = "    ";
const _: () = assert!(TAB.len() == TAB_WIDTH_SPACES);

/// Settings fixed for the duration of one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Font size in pixels; also the height of one text line
    pub font_size: f32,
    /// Top-left of the text block in whole pixels
    pub start_point: (i32, i32),
    pub draw_line_numbers: bool,
}

impl RenderConfig {
    pub fn new(font_size: f32, start_point: (i32, i32), draw_line_numbers: bool) -> Self {
        Self {
            font_size,
            start_point,
            draw_line_numbers,
        }
    }
}

/// Decimal digits needed for the largest line number.
pub fn gutter_digits(line_count: usize) -> usize {
    line_count.max(1).ilog10() as usize + 1
}

/// Width reserved for line numbers: one column per digit plus one column of
/// padding, each column one rounded space advance wide.
pub fn gutter_width(line_count: usize, space: Fixed) -> Fixed {
    Fixed::from_px(space.round() * (gutter_digits(line_count) + 1) as i32)
}

/// Baseline step taken before painting line `index`.
///
/// Both the line height and the padding are truncated to whole pixels.
pub fn line_advance(font_size: f32, index: usize) -> Fixed {
    let mut step = Fixed::from_px(font_size as i32);
    if index > 0 {
        step += Fixed::from_px((font_size * LINE_PADDING_RATIO) as i32);
    }
    step
}

/// Distance from the start point to the last baseline of `line_count` lines.
pub fn text_block_height(font_size: f32, line_count: usize) -> Fixed {
    (0..line_count).map(|i| line_advance(font_size, i)).sum()
}

/// Pen advance of a tab character.
pub fn tab_advance<E: GlyphEngine + ?Sized>(engine: &E) -> Fixed {
    engine.measure(TAB)
}

/// Offset of a line's text from the start point: one space, plus the
/// gutter when line numbers are drawn.
pub fn text_offset(space: Fixed, gutter: Option<Fixed>) -> Fixed {
    space + gutter.unwrap_or(Fixed::ZERO)
}

/// Widest pen excursion of one line, measured from its text start.
///
/// Follows the paint loop exactly: tabs advance by [`tab_advance`] and an
/// embedded newline returns the pen to the start.
pub fn line_width<E: GlyphEngine + ?Sized>(line: &[Token], engine: &E) -> Fixed {
    let tab = tab_advance(engine);
    let mut buf = [0u8; 4];
    let mut pen = Fixed::ZERO;
    let mut widest = Fixed::ZERO;

    for token in line {
        for ch in token.text.chars() {
            match ch {
                '\n' => pen = Fixed::ZERO,
                '\t' => pen += tab,
                _ => pen += engine.measure(ch.encode_utf8(&mut buf)),
            }
            widest = widest.max(pen);
        }
    }
    widest
}
