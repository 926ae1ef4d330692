//! Shared integration test helpers for codeshot.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{MonoEngine, parse_cli, write_file};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers is used per file.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use codeshot::cli::{Cli, RuntimeOptions};
use codeshot_config::Color;
use codeshot_fonts::{Fixed, GlyphEngine, Point};
use image::{Rgba, RgbaImage};

/// Fixed-advance engine that paints each glyph as a filled square above
/// the baseline and counts draws.
#[derive(Debug, Default)]
pub struct MonoEngine {
    pub advance: i32,
    pub draws: usize,
}

impl MonoEngine {
    pub fn new(advance: i32) -> Self {
        Self { advance, draws: 0 }
    }
}

impl GlyphEngine for MonoEngine {
    fn measure(&self, text: &str) -> Fixed {
        Fixed::from_px(self.advance * text.chars().count() as i32)
    }

    fn draw_glyph(&mut self, canvas: &mut RgbaImage, _text: &str, dot: Point, color: Color) {
        self.draws += 1;
        let (x0, baseline) = (dot.x.round(), dot.y.round());
        for y in (baseline - self.advance).max(0)..baseline {
            for x in x0.max(0)..x0 + self.advance {
                if (x as u32) < canvas.width() && (y as u32) < canvas.height() {
                    canvas.put_pixel(x as u32, y as u32, Rgba(color.as_rgba()));
                }
            }
        }
    }
}

/// Parse a command line the way `codeshot` would.
pub fn parse_cli(args: &[&str]) -> RuntimeOptions {
    let argv = std::iter::once("codeshot").chain(args.iter().copied());
    Cli::try_parse_from(argv).expect("valid arguments").into()
}

/// Write `contents` to `name` inside `dir`, returning the full path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    path
}
