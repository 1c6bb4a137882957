//! Tool for converting BDF bitmap font descriptions into 16-bit MIF
//! memory-initialization listings for FPGA UFM blocks.
//!
//! The conversion runs in two stages: [`bdf::extract`] builds a
//! [`FontTable`][ft] from the source text, and [`mif::write_mif`] transposes
//! each printable-ASCII glyph into column-major 16-bit words and emits the
//! address-mapped listing.
//!
//! [ft]: font::table::FontTable

pub mod bdf;
pub mod cli;
pub mod mif;
