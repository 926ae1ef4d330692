//! Canvas sizing and window decoration around the rendered code.
//!
//! The panel is measured from the same engine and layout rules the paint
//! loop uses, so the text block always fits the window it is drawn into.

use codeshot_config::Color;
use codeshot_fonts::{Fixed, GlyphEngine};
use image::{Rgba, RgbaImage};

use crate::layout::{
    LINE_PADDING_RATIO, RenderConfig, gutter_width, line_width, text_block_height, text_offset,
};
use crate::token::Line;

const CONTROL_COLORS: [Color; 3] = [
    Color::new(0xff, 0x5f, 0x58), // close
    Color::new(0xff, 0xbd, 0x2e), // minimize
    Color::new(0x18, 0xc1, 0x32), // zoom
];

/// Visual settings for the area around the code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    pub padding_x: u32,
    pub padding_y: u32,
    pub window_controls: bool,
    pub corner_radius: u32,
    /// Fill around the window
    pub outer_background: Color,
    /// Fill behind the code; this is also the contrast background for text
    pub window_background: Color,
}

/// Pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }
}

/// Measured canvas layout for one input.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    width: u32,
    height: u32,
    window: Rect,
    bar_height: u32,
    start_point: (i32, i32),
    font_size: f32,
    style: PanelStyle,
}

impl Panel {
    /// Size a canvas that fits `lines` at `font_size`.
    pub fn measure<E: GlyphEngine + ?Sized>(
        lines: &[Line],
        engine: &E,
        font_size: f32,
        draw_line_numbers: bool,
        style: PanelStyle,
    ) -> Self {
        let space = engine.measure(" ");
        let gutter = draw_line_numbers.then(|| gutter_width(lines.len(), space));
        let widest = lines
            .iter()
            .map(|line| line_width(line, engine))
            .max()
            .unwrap_or(Fixed::ZERO);

        // One space of margin on each side of the text.
        let content_width = text_offset(space, gutter) + widest + space;
        let margin_y = (font_size * 0.5).ceil() as u32;
        let descent = (font_size * LINE_PADDING_RATIO).ceil() as u32;
        let text_height = text_block_height(font_size, lines.len()).ceil().max(0) as u32;
        let bar_height = if style.window_controls {
            (font_size * 1.5).ceil() as u32
        } else {
            0
        };

        let window = Rect {
            x: style.padding_x,
            y: style.padding_y,
            width: content_width.ceil().max(1) as u32,
            height: bar_height + margin_y * 2 + text_height + descent,
        };
        let start_point = (window.x as i32, (window.y + bar_height + margin_y) as i32);

        let panel = Panel {
            width: window.width + style.padding_x * 2,
            height: window.height + style.padding_y * 2,
            window,
            bar_height,
            start_point,
            font_size,
            style,
        };
        log::debug!(
            "Panel {}x{} for {} lines (window {}x{}, text at {:?})",
            panel.width,
            panel.height,
            lines.len(),
            window.width,
            window.height,
            start_point
        );
        panel
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn window(&self) -> Rect {
        self.window
    }

    /// Top-left of the text block, in whole pixels.
    pub fn start_point(&self) -> (i32, i32) {
        self.start_point
    }

    pub fn style(&self) -> &PanelStyle {
        &self.style
    }

    /// Render settings that place text inside this panel's window.
    pub fn render_config(&self, draw_line_numbers: bool) -> RenderConfig {
        RenderConfig::new(self.font_size, self.start_point, draw_line_numbers)
    }

    /// A fresh canvas with backgrounds and window controls painted.
    pub fn paint(&self) -> RgbaImage {
        let mut canvas =
            RgbaImage::from_pixel(self.width, self.height, Rgba(self.style.outer_background.as_rgba()));
        fill_rounded_rect(
            &mut canvas,
            self.window,
            self.style.corner_radius,
            self.style.window_background,
        );

        if self.style.window_controls {
            let radius = (self.font_size * 0.25).max(3.0);
            let cy = self.window.y as f32 + self.bar_height as f32 * 0.5 + 0.25 * radius;
            let first_cx = self.window.x as f32 + self.font_size * 0.75 + radius;
            for (i, color) in CONTROL_COLORS.iter().enumerate() {
                let cx = first_cx + i as f32 * radius * 3.0;
                fill_circle(&mut canvas, cx, cy, radius, *color);
            }
        }
        canvas
    }
}

fn fill_rounded_rect(canvas: &mut RgbaImage, rect: Rect, radius: u32, color: Color) {
    let radius = radius.min(rect.width / 2).min(rect.height / 2) as f32;
    let left = rect.x as f32 + radius;
    let right = (rect.x + rect.width) as f32 - radius;
    let top = rect.y as f32 + radius;
    let bottom = (rect.y + rect.height) as f32 - radius;
    let pixel = Rgba(color.as_rgba());

    for y in rect.y..(rect.y + rect.height).min(canvas.height()) {
        for x in rect.x..(rect.x + rect.width).min(canvas.width()) {
            if !rect.contains(x, y) {
                continue;
            }
            // Distance to the nearest corner circle center, zero on the edges
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
            let dx = (left - px).max(px - right).max(0.0);
            let dy = (top - py).max(py - bottom).max(0.0);
            if dx * dx + dy * dy <= radius * radius {
                canvas.put_pixel(x, y, pixel);
            }
        }
    }
}

fn fill_circle(canvas: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Color) {
    let pixel = Rgba(color.as_rgba());
    let x0 = (cx - radius).floor().max(0.0) as u32;
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let x1 = ((cx + radius).ceil() as u32).min(canvas.width());
    let y1 = ((cy + radius).ceil() as u32).min(canvas.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= radius * radius {
                canvas.put_pixel(x, y, pixel);
            }
        }
    }
}
