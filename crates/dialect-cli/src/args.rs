use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for dialect-map
#[derive(Debug, Parser)]
#[command(
    name = "dialect-map",
    version,
    about = "Convert dialect recording tables into province-colored JSON for map front-ends"
)]
pub struct CliArgs {
    /// Path to the input table (.xlsx/.xls/.ods workbook, CSV, or .csv.gz)
    #[arg(short = 'i', long = "input", global = true, default_value = "Data.xlsx")]
    pub input: PathBuf,

    /// Path of the JSON file to write
    #[arg(short = 'o', long = "output", global = true, default_value = dialect_core::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Prefix prepended to every non-empty audio reference (e.g. https://cdn.example/)
    #[arg(long = "audio-prefix", global = true)]
    pub audio_prefix: Option<String>,

    /// Single-byte field delimiter; use "tab" or "\t" for TSV
    #[arg(short = 'd', long = "delimiter", global = true, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert the input table and write the JSON file
    Build,

    /// Show which province each location string resolves to
    Resolve {
        /// One or more location strings (e.g. 江苏南京 沪上风光)
        #[arg(required = true)]
        locations: Vec<String>,
    },

    /// Summarize provinces and colors without writing output
    Stats,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
    }
}
