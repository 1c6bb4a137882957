//! Interface for defining a mapping between character codes and
//! [`GlyphRecord`]s.

use std::collections::BTreeMap;

use crate::glyph::GlyphRecord;

/// The first character code of the printable ASCII range.
pub const PRINTABLE_FIRST: u32 = 32;
/// The last character code of the printable ASCII range.
pub const PRINTABLE_LAST: u32 = 126;
/// The number of character codes in the printable ASCII range.
pub const PRINTABLE_COUNT: u32 = PRINTABLE_LAST - PRINTABLE_FIRST + 1;

/// The number of 16-bit words emitted per character.
pub const WORDS_PER_GLYPH: u32 = 4;
/// The total number of 16-bit words emitted for the printable ASCII range.
pub const WORD_DEPTH: u32 = PRINTABLE_COUNT * WORDS_PER_GLYPH;

/// A mapping between character codes and [`GlyphRecord`]s.
///
/// Built once by the extractor and read-only afterward. Iteration is in
/// ascending code order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontTable {
    /// The code to glyph mapping.
    glyphs: BTreeMap<u32, GlyphRecord>,
}

impl FontTable {
    /// Creates a new empty [`FontTable`].
    pub fn new() -> Self {
        Self {
            glyphs: BTreeMap::new(),
        }
    }

    /// Inserts the provided `code` to `glyph` mapping. If `code` already
    /// exists in the [`FontTable`], then the mapping is updated to `glyph`.
    pub fn insert(&mut self, code: u32, glyph: GlyphRecord) {
        self.glyphs.insert(code, glyph);
    }

    /// Returns the [`GlyphRecord`] associated with `code`. If `code` is not in
    /// the [`FontTable`], then `None` is returned.
    pub fn get(&self, code: u32) -> Option<&GlyphRecord> {
        self.glyphs.get(&code)
    }

    /// Returns the number of [`GlyphRecord`]s in this [`FontTable`].
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns `true` if this [`FontTable`] contains no [`GlyphRecord`]s.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
