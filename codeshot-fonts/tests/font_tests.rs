//! Integration tests for codeshot-fonts.

use codeshot_config::Color;
use codeshot_fonts::font_manager::load_font_from_file;
use codeshot_fonts::{
    FALLBACK_FAMILIES, Fixed, FontData, FontManager, GlyphEngine, PREFERRED_MONOSPACE, Point,
    SwashEngine,
};
use image::{Rgba, RgbaImage};

#[test]
fn test_font_data_invalid_bytes() {
    let font_data = FontData::new(vec![0u8; 100], "zeros");
    assert!(
        font_data.is_none(),
        "Should return None for invalid font data"
    );
}

#[test]
fn test_font_data_empty_bytes() {
    assert!(FontData::new(vec![], "empty").is_none());
}

#[test]
fn test_load_font_from_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let result = load_font_from_file(&dir.path().join("nope.ttf"));
    assert!(result.is_err());
}

#[test]
fn test_load_font_from_non_font_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("fake.ttf");
    std::fs::write(&path, b"definitely not a font").unwrap();
    let err = load_font_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("not a usable font"));
}

#[test]
fn test_family_lists_not_empty() {
    assert!(!FALLBACK_FAMILIES.is_empty());
    assert!(!PREFERRED_MONOSPACE.is_empty());
}

#[test]
#[ignore = "requires a monospace system font"]
fn test_system_font_manager_finds_ascii() {
    let manager = FontManager::new(None, None).unwrap();
    let (font_idx, glyph_id) = manager.find_glyph('A').expect("glyph for 'A'");
    assert_eq!(font_idx, 0, "ASCII should be in primary font");
    assert_ne!(glyph_id, 0);
    assert!(manager.get_font(0).is_some());
}

#[test]
#[ignore = "requires a monospace system font"]
fn test_swash_engine_measures_additively_and_paints() {
    let manager = FontManager::new(None, None).unwrap();
    let mut engine = SwashEngine::new(manager, 24.0);

    let one = engine.measure("m");
    assert!(one > Fixed::ZERO);
    assert_eq!(engine.measure("mmmm"), one * 4);
    assert_eq!(engine.measure(""), Fixed::ZERO);

    let mut canvas = RgbaImage::from_pixel(64, 48, Rgba([0, 0, 0, 255]));
    engine.draw_glyph(&mut canvas, "M", Point::from_px(8, 32), Color::WHITE);
    assert!(canvas.pixels().any(|p| p.0[0] > 0), "glyph should paint pixels");

    let mut blank = RgbaImage::from_pixel(64, 48, Rgba([0, 0, 0, 255]));
    engine.draw_glyph(&mut blank, " ", Point::from_px(8, 32), Color::WHITE);
    assert!(blank.pixels().all(|p| p.0 == [0, 0, 0, 255]));
}
