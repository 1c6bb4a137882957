//! Interface for interacting with glyph bitmaps.

use core::{error, fmt};

/// The number of pixel rows in a glyph.
pub const GLYPH_HEIGHT: usize = 8;
/// The number of pixel columns in a glyph.
pub const GLYPH_WIDTH: usize = 8;

/// The row-major bitmap of a single character.
///
/// Each row is the text of one bitmap line as it appeared in the source font:
/// nominally two uppercase hexadecimal digits encoding an 8-pixel row with the
/// leftmost pixel in the most significant bit. Row text is stored unvalidated;
/// decoding happens when the glyph is packed.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct GlyphRecord {
    /// The hexadecimal text of each pixel row, top to bottom.
    rows: [String; GLYPH_HEIGHT],
}

impl GlyphRecord {
    /// Creates a new [`GlyphRecord`] from collected bitmap rows.
    ///
    /// Records shorter than [`GLYPH_HEIGHT`] rows are padded with `"00"` rows
    /// at the bottom; rows past the first [`GLYPH_HEIGHT`] are ignored.
    pub fn from_rows(rows: Vec<String>) -> Self {
        let rows = core::array::from_fn(|index| {
            rows.get(index).cloned().unwrap_or_else(|| String::from("00"))
        });
        Self { rows }
    }

    /// Creates a new [`GlyphRecord`] from decoded row bytes.
    pub fn from_bytes(bytes: [u8; GLYPH_HEIGHT]) -> Self {
        let rows = core::array::from_fn(|index| format!("{:02X}", bytes[index]));
        Self { rows }
    }

    /// Returns the hexadecimal text of each pixel row, top to bottom.
    pub const fn rows(&self) -> &[String; GLYPH_HEIGHT] {
        &self.rows
    }

    /// Decodes each pixel row as an 8-bit value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRow`] if a row is not the hexadecimal text of an 8-bit
    /// value.
    pub fn row_bytes(&self) -> Result<[u8; GLYPH_HEIGHT], InvalidRow> {
        let mut bytes = [0; GLYPH_HEIGHT];
        for (index, text) in self.rows.iter().enumerate() {
            bytes[index] = u8::from_str_radix(text, 16).map_err(|_| InvalidRow {
                row: index,
                text: text.clone(),
            })?;
        }

        Ok(bytes)
    }

    /// Transposes the glyph into column-major bytes.
    ///
    /// Column `j` counts bit positions from the most significant bit of a row,
    /// so column 0 is the leftmost pixel column. Within a column byte, the
    /// pixel of row `r` occupies value bit `r`: the top row lands in the least
    /// significant bit.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRow`] if a row is not the hexadecimal text of an 8-bit
    /// value.
    pub fn column_bytes(&self) -> Result<[u8; GLYPH_WIDTH], InvalidRow> {
        let rows = self.row_bytes()?;

        let mut columns = [0u8; GLYPH_WIDTH];
        for (row_index, row) in rows.iter().enumerate() {
            for (column_index, column) in columns.iter_mut().enumerate() {
                let pixel = (row >> (GLYPH_WIDTH - 1 - column_index)) & 1;
                *column |= pixel << row_index;
            }
        }

        Ok(columns)
    }

    /// Packs the glyph's column bytes into 16-bit words.
    ///
    /// Word `i` holds column `2 * i` in its low byte and column `2 * i + 1` in
    /// its high byte.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRow`] if a row is not the hexadecimal text of an 8-bit
    /// value.
    pub fn words(&self) -> Result<[u16; GLYPH_WIDTH / 2], InvalidRow> {
        let columns = self.column_bytes()?;

        let mut words = [0u16; GLYPH_WIDTH / 2];
        for (index, word) in words.iter_mut().enumerate() {
            let low = columns[index * 2];
            let high = columns[index * 2 + 1];
            *word = u16::from(high) << 8 | u16::from(low);
        }

        Ok(words)
    }

    /// Reverses [`column_bytes`][cb]: reconstructs the row bytes of the glyph
    /// whose transposed columns are `columns`.
    ///
    /// [cb]: GlyphRecord::column_bytes
    pub fn rows_from_columns(columns: &[u8; GLYPH_WIDTH]) -> [u8; GLYPH_HEIGHT] {
        let mut rows = [0u8; GLYPH_HEIGHT];
        for (column_index, column) in columns.iter().enumerate() {
            for (row_index, row) in rows.iter_mut().enumerate() {
                let pixel = (column >> row_index) & 1;
                *row |= pixel << (GLYPH_WIDTH - 1 - column_index);
            }
        }

        rows
    }
}

impl Default for GlyphRecord {
    /// Returns the all-zero glyph: [`GLYPH_HEIGHT`] rows of `"00"`.
    fn default() -> Self {
        Self::from_rows(Vec::new())
    }
}

/// A bitmap row whose text does not decode as an 8-bit hexadecimal value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidRow {
    /// The index of the offending row within its glyph.
    pub row: usize,
    /// The text of the offending row.
    pub text: String,
}

impl fmt::Display for InvalidRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bitmap row {} is not an 8-bit hexadecimal value: {:?}",
            self.row, self.text
        )
    }
}

impl error::Error for InvalidRow {}
