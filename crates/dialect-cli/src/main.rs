//! dialect-map — Command-line interface for dialect-core
//!
//! Converts a table of dialect recordings into the JSON document consumed by
//! the map front-end, tagging each recording with its province and a
//! per-province color.
//!
//! Usage examples
//! --------------
//!
//! - Convert `Data.xlsx` into `dialect_data.json`
//!   $ dialect-map build
//!
//! - Custom paths and an audio CDN prefix
//!   $ dialect-map -i survey.csv.gz -o web/dialect_data.json --audio-prefix https://cdn.example/ build
//!
//! - Check how locations are classified
//!   $ dialect-map resolve 江苏南京 沪上风光 绵阳市
//!
//! - Province breakdown without writing anything
//!   $ dialect-map stats
//!
//! Set `RUST_LOG=debug` for more detail, `RUST_LOG=warn` to see only
//! per-row warnings.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use dialect_core::{prepare, resolve_with_tier, run, PipelineConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();

    let mut config = PipelineConfig::new(&args.input)
        .with_output(&args.output)
        .with_delimiter(args.delimiter);
    if let Some(prefix) = &args.audio_prefix {
        config = config.with_audio_prefix(prefix);
    }

    match args.command {
        Commands::Build => {
            if !run(&config) {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Resolve { locations } => {
            for location in &locations {
                let r = resolve_with_tier(Some(location.as_str()));
                if r.is_unknown() {
                    println!("{location}\t{}\t(no rule matched)", r.province);
                } else {
                    println!("{location}\t{}\t({})", r.province, r.tier);
                }
            }
        }

        Commands::Stats => {
            let built = prepare(&config)?;
            println!("Input: {}", config.input.display());
            println!("  Records: {}", built.records.len());
            println!("  Provinces: {}", built.province_count);
            println!("  Coordinate warnings: {}", built.warnings.len());
            println!("Provinces (first-seen order):");
            for (province, count) in built.summary() {
                println!("  {}  {province}  {count}", built.colors.get(province));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
