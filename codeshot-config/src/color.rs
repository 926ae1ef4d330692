/// RGB color used for token foregrounds and canvas backgrounds
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseColorError;

/// A color in RGB format.
///
/// Serialized as a `#rrggbb` string so style files stay readable. A zero
/// value (`#000000`) is an ordinary color; absence is always expressed with
/// `Option<Color>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Opaque RGBA bytes, ready for a pixel buffer.
    pub fn as_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(err());
        }

        match hex.len() {
            6 => {
                let channel =
                    |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
                Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                // #abc expands to #aabbcc
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| err())
                };
                Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(err()),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
