//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `Config` fields and by `impl Default for Config`.

use crate::color::Color;

pub fn font_size() -> f32 {
    24.0
}

pub fn line_numbers() -> bool {
    true
}

pub fn style() -> String {
    "dracula".to_string()
}

pub fn background() -> Color {
    Color::new(0xaa, 0xaa, 0xff) // Soft lavender around the window
}

/// Window background when neither the config nor the style sets one.
pub fn window_background() -> Color {
    Color::new(0x28, 0x2a, 0x36)
}

pub fn padding_x() -> u32 {
    60
}

pub fn padding_y() -> u32 {
    60
}

pub fn window_controls() -> bool {
    true
}

pub fn corner_radius() -> u32 {
    8
}
