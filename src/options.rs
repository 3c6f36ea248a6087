//! Argument parsing via clap.

use std::path::PathBuf;

use clap::*;

const USAGE: &str = "tabsort [OPTIONS] <FILES>...";

/// The arguments for tabsort.
#[derive(Parser, Debug)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    override_usage = USAGE,
)]
pub struct Args {
    #[arg(
        required = true,
        value_name = "FILES",
        help = "The delimited text files to display, one table per file."
    )]
    pub files: Vec<PathBuf>,

    #[arg(
        short = 'd',
        long,
        default_value = ",",
        value_parser = parse_delimiter,
        value_name = "CHAR",
        help = "The field delimiter. A single character; \"\\t\" is accepted for tab."
    )]
    pub delimiter: u8,

    #[arg(
        long,
        value_delimiter = ',',
        value_name = "COLS",
        help = "Comma-separated zero-based column indices to exclude from sorting.",
        long_help = "Comma-separated zero-based column indices to exclude from sorting. \
                    Applies to every loaded table; excluded headers get no sort indicator \
                    and ignore clicks."
    )]
    pub no_sort: Vec<usize>,
}

/// Parses the delimiter argument into a single byte.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    let s = if s == "\\t" { "\t" } else { s };

    match s.as_bytes() {
        [delimiter] => Ok(*delimiter),
        _ => Err(String::from(
            "The delimiter must be a single (one-byte) character.",
        )),
    }
}
