//! Tool for converting BDF bitmap font descriptions into 16-bit MIF
//! memory-initialization listings for FPGA UFM blocks.

use std::{fs, fs::File, io::BufWriter};

use anyhow::{Context, Result};

use bdf_to_mif::{bdf, cli, mif};

fn main() -> Result<()> {
    let config = cli::get_config();

    let source = fs::read_to_string(&config.input)
        .with_context(|| format!("failed to read font \"{}\"", config.input.display()))?;
    let table = bdf::extract(&source);

    // The output file is only created once the input has been read.
    let output = File::create(&config.output)
        .with_context(|| format!("failed to create \"{}\"", config.output.display()))?;
    let missing = mif::write_mif(&table, BufWriter::new(output))
        .with_context(|| format!("failed to write \"{}\"", config.output.display()))?;

    for code in missing {
        eprintln!("warning: no glyph for ASCII {code}, emitting zero-filled words");
    }

    println!("MIF listing located at \"{}\"", config.output.display());

    Ok(())
}
