//! Font discovery, glyph metrics and rasterization for codeshot.
//!
//! This crate provides:
//! - [`Fixed`] 26.6 fixed-point pen arithmetic (64 units per pixel)
//! - The [`GlyphEngine`] capability the renderer paints through
//! - Font loading with system font discovery and a fallback chain
//! - [`SwashEngine`], the production engine built on `fontdb` + `swash`
//!
//! # Architecture
//!
//! The `FontManager` resolves characters across a priority-ordered chain:
//! 1. Primary font (explicit file, requested family, or a monospace default)
//! 2. System fallback fonts
//!
//! `SwashEngine` measures advances from the resolved font's metrics and
//! rasterizes glyphs on demand, keeping recent rasters in an LRU cache.

pub mod engine;
pub mod fixed;
pub mod font_manager;
pub mod swash_engine;

// Re-export main types for convenience
pub use engine::GlyphEngine;
pub use fixed::{Fixed, Point};
pub use font_manager::{FALLBACK_FAMILIES, FontData, FontManager, PREFERRED_MONOSPACE};
pub use swash_engine::SwashEngine;
