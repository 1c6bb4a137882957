//! Emission of the address-mapped MIF listing for the printable ASCII range.

use std::io::Write;

use anyhow::Result;
use font::{
    glyph::GlyphRecord,
    table::{
        FontTable, PRINTABLE_COUNT, PRINTABLE_FIRST, PRINTABLE_LAST, WORD_DEPTH, WORDS_PER_GLYPH,
    },
};

/// Writes the MIF listing for `table` into `writer`.
///
/// Every code in the printable ASCII range is emitted in ascending order; word
/// `i` of character `code` lands at address `(code - 32) * 4 + i`, filling
/// addresses 0 through [`WORD_DEPTH`]` - 1` densely. Codes absent from `table`
/// are emitted as four `0000` words and collected into the returned list so
/// the caller can report them; they never abort the run.
///
/// # Errors
///
/// Returns an error if a glyph row fails to decode as an 8-bit hexadecimal
/// value or if writing to `writer` fails.
pub fn write_mif<W: Write>(table: &FontTable, mut writer: W) -> Result<Vec<u32>> {
    writeln!(
        writer,
        "-- Printable ASCII Font Library for UFM ({PRINTABLE_COUNT} Chars, {WORD_DEPTH} Words total)"
    )?;
    writeln!(writer, "-- Generated for 16-bit data width UFM")?;
    writeln!(writer)?;
    writeln!(writer, "WIDTH = 16;")?;
    writeln!(writer, "DEPTH = {WORD_DEPTH};")?;
    writeln!(writer, "ADDRESS_RADIX = DEC;")?;
    writeln!(writer, "DATA_RADIX = HEX;")?;
    writeln!(writer)?;
    writeln!(writer, "CONTENT BEGIN")?;

    let default = GlyphRecord::default();
    let mut missing = Vec::new();
    for code in PRINTABLE_FIRST..=PRINTABLE_LAST {
        // Code 32 is labeled as a word to keep the listing readable.
        let label = match char::from_u32(code) {
            Some(c) if code != PRINTABLE_FIRST => String::from(c),
            _ => String::from("Space"),
        };
        writeln!(writer, "    -- ASCII {code}: Char '{label}'")?;

        let glyph = match table.get(code) {
            Some(glyph) => glyph,
            None => {
                missing.push(code);
                &default
            }
        };

        let base_address = (code - PRINTABLE_FIRST) * WORDS_PER_GLYPH;
        for (offset, word) in (0u32..).zip(glyph.words()?) {
            writeln!(writer, "    {} : {word:04X};", base_address + offset)?;
        }

        if code < PRINTABLE_LAST {
            writeln!(writer)?;
        }
    }

    writeln!(writer, "END;")?;
    writer.flush()?;

    Ok(missing)
}

#[cfg(test)]
mod test {
    use font::{glyph::GlyphRecord, table::FontTable};

    use super::write_mif;

    /// Renders `table` to a string, returning the listing and the missing
    /// codes.
    fn render(table: &FontTable) -> (String, Vec<u32>) {
        let mut buffer = Vec::new();
        let missing = write_mif(table, &mut buffer).unwrap();
        (String::from_utf8(buffer).unwrap(), missing)
    }

    /// Parses the `<address> : <word>;` lines of a rendered listing.
    fn data_lines(listing: &str) -> Vec<(u32, String)> {
        listing
            .lines()
            .filter_map(|line| {
                let (address, word) = line.trim().strip_suffix(';')?.split_once(" : ")?;
                Some((address.parse().ok()?, word.to_string()))
            })
            .collect()
    }

    #[test]
    fn header_fields_are_fixed() {
        let (listing, _) = render(&FontTable::new());

        assert!(listing.starts_with(
            "-- Printable ASCII Font Library for UFM (95 Chars, 380 Words total)\n\
             -- Generated for 16-bit data width UFM\n\n"
        ));
        assert!(listing.contains("WIDTH = 16;\n"));
        assert!(listing.contains("DEPTH = 380;\n"));
        assert!(listing.contains("ADDRESS_RADIX = DEC;\n"));
        assert!(listing.contains("DATA_RADIX = HEX;\n"));
        assert!(listing.contains("\nCONTENT BEGIN\n"));
    }

    #[test]
    fn empty_table_emits_a_complete_zero_listing() {
        let (listing, missing) = render(&FontTable::new());

        let lines = data_lines(&listing);
        assert_eq!(lines.len(), 380);
        assert!(lines.iter().all(|(_, word)| word == "0000"));
        assert_eq!(missing.len(), 95);
    }

    #[test]
    fn addresses_are_dense_and_ascending() {
        let (listing, _) = render(&FontTable::new());

        let addresses: Vec<u32> = data_lines(&listing)
            .into_iter()
            .map(|(address, _)| address)
            .collect();
        assert_eq!(addresses, (0..380).collect::<Vec<u32>>());
    }

    #[test]
    fn letter_a_words_land_at_addresses_132_through_135() {
        let mut table = FontTable::new();
        table.insert(
            65,
            GlyphRecord::from_bytes([0x18, 0x24, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42]),
        );

        let (listing, missing) = render(&table);

        let lines = data_lines(&listing);
        assert_eq!(lines[132], (132, String::from("FC00")));
        assert_eq!(lines[133], (133, String::from("1112")));
        assert_eq!(lines[134], (134, String::from("1211")));
        assert_eq!(lines[135], (135, String::from("00FC")));

        assert_eq!(missing.len(), 94);
        assert!(!missing.contains(&65));
    }

    #[test]
    fn character_labels_name_code_and_glyph() {
        let (listing, _) = render(&FontTable::new());

        assert!(listing.contains("    -- ASCII 32: Char 'Space'\n"));
        assert!(listing.contains("    -- ASCII 33: Char '!'\n"));
        assert!(listing.contains("    -- ASCII 65: Char 'A'\n"));
        assert!(listing.contains("    -- ASCII 126: Char '~'\n"));
    }

    #[test]
    fn blocks_are_separated_by_single_blank_lines() {
        let (listing, _) = render(&FontTable::new());

        // 94 separators between 95 blocks, none after the last block.
        let body = listing.split_once("CONTENT BEGIN\n").unwrap().1;
        assert_eq!(body.matches("\n\n").count(), 94);
        assert!(body.ends_with("    379 : 0000;\nEND;\n"));
    }

    #[test]
    fn output_is_deterministic() {
        let mut table = FontTable::new();
        table.insert(48, GlyphRecord::from_bytes([0x3C; 8]));

        assert_eq!(render(&table), render(&table));
    }

    #[test]
    fn undecodable_rows_abort_the_run() {
        let mut table = FontTable::new();
        table.insert(65, GlyphRecord::from_rows(vec![String::from("not hex")]));

        let mut buffer = Vec::new();
        assert!(write_mif(&table, &mut buffer).is_err());
    }
}
