//! Font management with a fallback chain.
//!
//! Font indices are assigned as follows:
//! - 0: Primary font
//! - 1..: Fallback fonts, in `FALLBACK_FAMILIES` order (missing ones skipped)

mod fallbacks;
mod loader;
mod types;

use std::path::Path;

use anyhow::{Result, bail};
use fontdb::Database;
use swash::FontRef;

pub use fallbacks::{FALLBACK_FAMILIES, PREFERRED_MONOSPACE};
pub use loader::load_font_from_file;
pub use types::FontData;

/// Primary font plus an ordered fallback chain.
pub struct FontManager {
    primary: FontData,
    fallbacks: Vec<FontData>,
}

impl FontManager {
    /// Discover fonts on the system.
    ///
    /// # Arguments
    /// * `family` - Requested primary family name
    /// * `font_path` - Explicit font file; wins over `family`
    ///
    /// # Errors
    /// Fails when the explicit file cannot be loaded, or when no usable
    /// primary font exists on the system at all.
    pub fn new(family: Option<&str>, font_path: Option<&Path>) -> Result<Self> {
        let mut font_db = Database::new();
        font_db.load_system_fonts();
        log::info!("Loaded {} system font faces", font_db.len());

        let primary = Self::load_primary_font(&font_db, family, font_path)?;
        log::info!("Primary font: {}", primary.label);

        let fallbacks = Self::build_fallback_chain(&font_db, &primary);
        log::info!("Loaded {} fallback fonts", fallbacks.len());

        Ok(Self::from_fonts(primary, fallbacks))
    }

    /// Build a manager from already-loaded fonts.
    pub fn from_fonts(primary: FontData, fallbacks: Vec<FontData>) -> Self {
        FontManager { primary, fallbacks }
    }

    fn load_primary_font(
        font_db: &Database,
        family: Option<&str>,
        font_path: Option<&Path>,
    ) -> Result<FontData> {
        if let Some(path) = font_path {
            log::info!("Loading primary font from {:?}", path);
            return load_font_from_file(path);
        }

        if let Some(family_name) = family {
            log::info!("Attempting to load primary font: {}", family_name);
            if let Some(font_data) = loader::load_font_from_db(font_db, family_name) {
                return Ok(font_data);
            }
            log::warn!(
                "Primary font '{}' not found, trying default monospace families",
                family_name
            );
        }

        for family_name in PREFERRED_MONOSPACE {
            if let Some(font_data) = loader::load_font_from_db(font_db, family_name) {
                return Ok(font_data);
            }
        }

        if let Some(font_data) = loader::load_generic_monospace(font_db) {
            return Ok(font_data);
        }

        bail!("No usable monospace font found; pass a font file explicitly")
    }

    fn build_fallback_chain(font_db: &Database, primary: &FontData) -> Vec<FontData> {
        let mut fallbacks = Vec::new();
        for family_name in FALLBACK_FAMILIES {
            if *family_name == primary.label {
                continue;
            }
            if let Some(font_data) = loader::load_font_from_db(font_db, family_name) {
                log::debug!("Added fallback font: {}", family_name);
                fallbacks.push(font_data);
            }
        }
        fallbacks
    }

    /// Find a glyph for a character across the fallback chain.
    ///
    /// # Returns
    /// `(font_index, glyph_id)`, or `None` when no loaded font has the glyph.
    pub fn find_glyph(&self, character: char) -> Option<(usize, u16)> {
        if let Some(glyph_id) = self.primary.glyph_id(character) {
            return Some((0, glyph_id));
        }

        for (idx, fallback) in self.fallbacks.iter().enumerate() {
            if let Some(glyph_id) = fallback.glyph_id(character) {
                log::debug!(
                    "Character '{}' (U+{:04X}) found in fallback font {}",
                    character,
                    character as u32,
                    fallback.label
                );
                return Some((idx + 1, glyph_id));
            }
        }

        log::debug!(
            "Character '{}' (U+{:04X}) not found in any of {} fonts",
            character,
            character as u32,
            self.font_count()
        );
        None
    }

    /// Like `find_glyph`, but resolves a missing glyph to the primary font's
    /// `.notdef` so every character still has a width and a shape.
    pub fn glyph_or_notdef(&self, character: char) -> (usize, u16) {
        self.find_glyph(character).unwrap_or((0, 0))
    }

    /// Get font reference by index (see module docs for the layout).
    pub fn get_font(&self, font_index: usize) -> Option<&FontRef<'static>> {
        match font_index {
            0 => Some(&self.primary.font_ref),
            idx => self.fallbacks.get(idx - 1).map(|fd| &fd.font_ref),
        }
    }

    pub fn primary_font(&self) -> &FontData {
        &self.primary
    }

    /// Number of fonts loaded (primary + fallbacks).
    pub fn font_count(&self) -> usize {
        1 + self.fallbacks.len()
    }
}
