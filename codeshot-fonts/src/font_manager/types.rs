//! Owned font data with a borrowed swash view.

use std::sync::Arc;
use swash::FontRef;

/// Font bytes plus a `FontRef` into them.
///
/// The `FontRef` borrows from `data`; both live and drop together, which is
/// what makes handing out `FontRef<'static>` sound.
#[derive(Clone)]
pub struct FontData {
    /// Raw font data bytes (TTF/OTF/TTC)
    pub data: Arc<Vec<u8>>,
    /// Swash font reference for charmap, metrics and scaling
    pub font_ref: FontRef<'static>,
    /// Family name or file name the font was loaded as (for logging)
    pub label: String,
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("label", &self.label)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl FontData {
    /// Wrap font bytes using face index 0. `None` if the bytes are not a font.
    pub fn new(data: Vec<u8>, label: impl Into<String>) -> Option<Self> {
        Self::new_with_index(data, 0, label)
    }

    /// Wrap font bytes selecting a face inside a TrueType Collection.
    pub fn new_with_index(
        data: Vec<u8>,
        face_index: usize,
        label: impl Into<String>,
    ) -> Option<Self> {
        let data_arc = Arc::new(data);

        // SAFETY: The bytes are heap-allocated inside an Arc stored next to the
        // FontRef, so they never move and outlive every copy of the FontRef
        // handed out through `&self`.
        let font_ref = unsafe {
            let bytes = data_arc.as_slice();
            let static_bytes: &'static [u8] = std::mem::transmute(bytes);
            FontRef::from_index(static_bytes, face_index)?
        };

        Some(FontData {
            data: data_arc,
            font_ref,
            label: label.into(),
        })
    }

    /// Glyph id for `character`, or `None` when the font lacks it.
    pub fn glyph_id(&self, character: char) -> Option<u16> {
        match self.font_ref.charmap().map(character) {
            0 => None,
            id => Some(id),
        }
    }
}
