//! `GlyphEngine` backed by `swash` scaling and the `FontManager` chain.

use std::num::NonZeroUsize;
use std::sync::Arc;

use codeshot_config::Color;
use image::RgbaImage;
use lru::LruCache;
use swash::scale::image::Content;
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::zeno::Format;

use crate::engine::GlyphEngine;
use crate::fixed::{Fixed, Point};
use crate::font_manager::FontManager;

const GLYPH_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(n) => n,
    None => unreachable!(),
};

/// Coverage or color pixels of one rasterized glyph.
enum GlyphPixels {
    /// One coverage byte per pixel, tinted with the requested color
    Mask(Vec<u8>),
    /// Straight RGBA, painted as-is (color emoji)
    Color(Vec<u8>),
}

struct RasterizedGlyph {
    width: u32,
    height: u32,
    /// Offset from the pen x to the left edge
    left: i32,
    /// Offset from the baseline up to the top edge
    top: i32,
    pixels: GlyphPixels,
}

/// Production glyph engine.
///
/// Font size is interpreted at 72 DPI, so one point is one pixel.
pub struct SwashEngine {
    fonts: FontManager,
    font_size: f32,
    context: ScaleContext,
    /// `None` entries remember glyphs that have no outline (e.g. space)
    cache: LruCache<(usize, u16), Option<Arc<RasterizedGlyph>>>,
}

impl SwashEngine {
    pub fn new(fonts: FontManager, font_size: f32) -> Self {
        log::debug!(
            "Creating swash engine at {}px with {} fonts",
            font_size,
            fonts.font_count()
        );
        Self {
            fonts,
            font_size,
            context: ScaleContext::new(),
            cache: LruCache::new(GLYPH_CACHE_CAPACITY),
        }
    }

    fn advance(&self, character: char) -> Fixed {
        let (font_idx, glyph_id) = self.fonts.glyph_or_notdef(character);
        match self.fonts.get_font(font_idx) {
            Some(font) => Fixed::from_f32(
                font.glyph_metrics(&[])
                    .scale(self.font_size)
                    .advance_width(glyph_id),
            ),
            None => Fixed::ZERO,
        }
    }

    fn raster(&mut self, font_idx: usize, glyph_id: u16) -> Option<Arc<RasterizedGlyph>> {
        let key = (font_idx, glyph_id);
        if let Some(cached) = self.cache.get(&key) {
            return cached.clone();
        }
        let raster = self.rasterize(font_idx, glyph_id).map(Arc::new);
        self.cache.put(key, raster.clone());
        raster
    }

    fn rasterize(&mut self, font_idx: usize, glyph_id: u16) -> Option<RasterizedGlyph> {
        let font = *self.fonts.get_font(font_idx)?;
        let mut scaler = self
            .context
            .builder(font)
            .size(self.font_size)
            .hint(true)
            .build();

        // Color sources first so emoji fonts render as colored bitmaps; text
        // fonts have no color data and fall through to Outline.
        let image = Render::new(&[
            Source::ColorBitmap(StrikeWith::BestFit),
            Source::ColorOutline(0),
            Source::Outline,
        ])
        .format(Format::Alpha)
        .render(&mut scaler, glyph_id)?;

        if image.placement.width == 0 || image.placement.height == 0 {
            return None;
        }

        let pixels = match image.content {
            Content::Mask => GlyphPixels::Mask(image.data),
            Content::Color => GlyphPixels::Color(image.data),
            Content::SubpixelMask => GlyphPixels::Mask(
                image
                    .data
                    .chunks_exact(4)
                    .map(|px| px[0].max(px[1]).max(px[2]))
                    .collect(),
            ),
        };

        Some(RasterizedGlyph {
            width: image.placement.width,
            height: image.placement.height,
            left: image.placement.left,
            top: image.placement.top,
            pixels,
        })
    }
}

impl GlyphEngine for SwashEngine {
    fn measure(&self, text: &str) -> Fixed {
        text.chars().map(|c| self.advance(c)).sum()
    }

    fn draw_glyph(&mut self, canvas: &mut RgbaImage, text: &str, dot: Point, color: Color) {
        let mut pen = dot;
        for character in text.chars() {
            let (font_idx, glyph_id) = self.fonts.glyph_or_notdef(character);
            if let Some(raster) = self.raster(font_idx, glyph_id) {
                blit(canvas, &raster, pen, color);
            }
            pen.x += self.advance(character);
        }
    }
}

fn blit(canvas: &mut RgbaImage, raster: &RasterizedGlyph, pen: Point, color: Color) {
    let origin_x = pen.x.round() + raster.left;
    let origin_y = pen.y.round() - raster.top;
    let (canvas_w, canvas_h) = (canvas.width() as i32, canvas.height() as i32);

    for row in 0..raster.height as i32 {
        let y = origin_y + row;
        if y < 0 || y >= canvas_h {
            continue;
        }
        for col in 0..raster.width as i32 {
            let x = origin_x + col;
            if x < 0 || x >= canvas_w {
                continue;
            }
            let i = (row * raster.width as i32 + col) as usize;
            let src = match &raster.pixels {
                GlyphPixels::Mask(mask) => [color.r, color.g, color.b, mask[i]],
                GlyphPixels::Color(rgba) => [rgba[i * 4], rgba[i * 4 + 1], rgba[i * 4 + 2], rgba[i * 4 + 3]],
            };
            let dst = canvas.get_pixel_mut(x as u32, y as u32);
            dst.0 = blend_over(dst.0, src);
        }
    }
}

/// Source-over compositing of straight-alpha RGBA.
fn blend_over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let a = src[3] as u32;
    if a == 0 {
        return dst;
    }
    if a == 255 {
        return src;
    }
    let inv = 255 - a;
    let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv + 127) / 255) as u8;
    [
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        (a + (dst[3] as u32 * inv + 127) / 255).min(255) as u8,
    ]
}
