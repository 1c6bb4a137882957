//! Defines the glyph data model shared by the `bdf-to-mif` conversion tool.
//!
//! Includes the per-character bitmap representation, the row-to-column
//! transpose used to pack glyphs for column-major memories, and the table
//! that maps character codes to their glyphs.

pub mod glyph;
pub mod table;
