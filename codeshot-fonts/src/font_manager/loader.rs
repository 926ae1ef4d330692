//! Font loading from files and from the system font database.

use std::path::Path;

use anyhow::{Context, Result};
use fontdb::{Database, Family, Query};

use super::types::FontData;

/// Load a font file from disk (face 0).
pub fn load_font_from_file(path: &Path) -> Result<FontData> {
    let data = std::fs::read(path).with_context(|| format!("reading font file {:?}", path))?;
    let label = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    FontData::new(data, label).ok_or_else(|| anyhow::anyhow!("{:?} is not a usable font", path))
}

/// Load a regular-weight font family from the database.
pub fn load_font_from_db(db: &Database, family_name: &str) -> Option<FontData> {
    load_family(db, Family::Name(family_name), family_name)
}

/// Load whatever the database considers the default monospace family.
pub fn load_generic_monospace(db: &Database) -> Option<FontData> {
    load_family(db, Family::Monospace, "monospace")
}

fn load_family(db: &Database, family: Family<'_>, label: &str) -> Option<FontData> {
    let query = Query {
        families: &[family],
        weight: fontdb::Weight::NORMAL,
        style: fontdb::Style::Normal,
        ..Query::default()
    };

    let id = db.query(&query)?;

    // Pass face_index for TTC (TrueType Collection) files where several faces
    // share the same data.
    db.with_face_data(id, |data, face_index| {
        FontData::new_with_index(data.to_vec(), face_index as usize, label)
    })
    .flatten()
}
