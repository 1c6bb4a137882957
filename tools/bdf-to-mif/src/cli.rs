//! Command line parsing and [`Config`] construction.

use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, value_parser};

/// Description of a conversion run.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Config {
    /// The path of the BDF font description to read.
    pub input: PathBuf,
    /// The path of the MIF listing to write.
    pub output: PathBuf,
}

/// Parses the tool's arguments to construct a [`Config`].
///
/// Missing or unexpected arguments print a usage message and exit with a
/// non-zero status.
pub fn get_config() -> Config {
    parse_arguments(&command_parser().get_matches())
}

/// Parses the arguments required to produce a valid [`Config`].
fn parse_arguments(matches: &ArgMatches) -> Config {
    let input = matches
        .get_one::<PathBuf>("input")
        .cloned()
        .unwrap_or_else(|| unreachable!("`input` is a required argument"));
    let output = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| unreachable!("`output` is a required argument"));

    Config { input, output }
}

/// Returns the command parser for the tool.
fn command_parser() -> Command {
    let input = Arg::new("input")
        .value_name("INPUT")
        .help("Path of the BDF font description to read")
        .value_parser(value_parser!(PathBuf))
        .required(true);

    let output = Arg::new("output")
        .value_name("OUTPUT")
        .help("Path of the MIF listing to write")
        .value_parser(value_parser!(PathBuf))
        .required(true);

    Command::new("bdf-to-mif")
        .about("Converts a BDF bitmap font into a 16-bit MIF listing for UFM blocks")
        .arg(input)
        .arg(output)
}
