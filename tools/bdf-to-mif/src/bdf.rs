//! Extraction of 8x8 glyph bitmaps from BDF font descriptions.
//!
//! Only the `ENCODING`, `BITMAP`, and `ENDCHAR` keywords and the bitmap-row
//! lines between `BITMAP` and `ENDCHAR` are consulted; every other BDF line is
//! ignored. Only characters whose encoding lies in the printable ASCII range
//! are retained.

use font::{
    glyph::{GLYPH_HEIGHT, GlyphRecord},
    table::{FontTable, PRINTABLE_FIRST, PRINTABLE_LAST},
};

/// A character block that is currently being parsed.
struct Block {
    /// The character code from the block's `ENCODING` line.
    code: u32,
    /// The bitmap-row lines collected so far, top to bottom.
    rows: Vec<String>,
}

/// Builds a [`FontTable`] from the text of a BDF font description.
///
/// A character block is stored when its `ENDCHAR` line is reached, provided
/// its encoding is printable ASCII and at least one bitmap row was collected;
/// short records are padded with `"00"` rows and rows past the eighth are
/// ignored. A malformed or out-of-range `ENCODING` line leaves its block
/// untracked, discarding any bitmap rows that follow it. Row text is not
/// validated here; undecodable rows surface later, during packing.
pub fn extract(source: &str) -> FontTable {
    let mut table = FontTable::new();

    let mut current: Option<Block> = None;
    let mut in_bitmap = false;

    for line in source.lines() {
        let line = line.trim();

        if line.starts_with("ENCODING") {
            current = parse_encoding(line);
        } else if line.starts_with("BITMAP") {
            if current.is_some() {
                in_bitmap = true;
            }
        } else if line.starts_with("ENDCHAR") {
            if let Some(block) = current.take()
                && !block.rows.is_empty()
            {
                table.insert(block.code, GlyphRecord::from_rows(block.rows));
            }

            in_bitmap = false;
        } else if in_bitmap
            && let Some(block) = current.as_mut()
            && block.rows.len() < GLYPH_HEIGHT
        {
            block.rows.push(line.to_string());
        }
    }

    table
}

/// Parses an `ENCODING` line into a tracked [`Block`].
///
/// Returns `None` if the line has no second token, the token is not an
/// integer, or the value lies outside the printable ASCII range.
fn parse_encoding(line: &str) -> Option<Block> {
    let code = line.split_whitespace().nth(1)?.parse::<u32>().ok()?;
    if !(PRINTABLE_FIRST..=PRINTABLE_LAST).contains(&code) {
        return None;
    }

    Some(Block {
        code,
        rows: Vec::new(),
    })
}
