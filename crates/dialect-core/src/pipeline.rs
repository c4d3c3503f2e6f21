// crates/dialect-core/src/pipeline.rs

//! # Pipeline
//!
//! One-shot batch conversion: load the whole table, build the records, write
//! one JSON file. [`run`] is the top-level entry point and reports the outcome
//! as a flag; [`generate`] is the same thing with the error kept.

use crate::builder::{build_records, BuildOptions, BuildOutput};
use crate::error::{DialectError, Result};
use crate::loader::{load_rows, LoadOptions};
use crate::writer::write_json;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info};

pub const DEFAULT_OUTPUT: &str = "dialect_data.json";

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Prepended to every non-empty audio reference.
    pub audio_prefix: Option<String>,
    pub delimiter: u8,
}

impl PipelineConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            audio_prefix: None,
            delimiter: LoadOptions::default().delimiter,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_audio_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.audio_prefix = Some(prefix.into());
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            delimiter: self.delimiter,
        }
    }

    fn build_options(&self) -> BuildOptions {
        BuildOptions {
            audio_prefix: self.audio_prefix.clone(),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub records: usize,
    /// Distinct province labels, the unknown sentinel included.
    pub provinces: usize,
    pub unknown_rows: usize,
    pub warnings: usize,
    pub output: PathBuf,
}

/// Load and build without writing anything.
pub fn prepare(config: &PipelineConfig) -> Result<BuildOutput> {
    if !config.input.exists() {
        return Err(DialectError::NotFound(format!(
            "input file {} does not exist",
            config.input.display()
        )));
    }

    let rows = load_rows(&config.input, &config.load_options())?;
    info!(rows = rows.len(), input = %config.input.display(), "loaded table");

    Ok(build_records(&rows, &config.build_options()))
}

/// Load, build and write. Nothing is written unless every step succeeds.
pub fn generate(config: &PipelineConfig) -> Result<RunSummary> {
    let built = prepare(config)?;
    write_json(&config.output, &built.records)?;

    let summary = RunSummary {
        records: built.records.len(),
        provinces: built.province_count,
        unknown_rows: built.unknown_rows(),
        warnings: built.warnings.len(),
        output: config.output.clone(),
    };
    info!(
        output = %summary.output.display(),
        records = summary.records,
        provinces = summary.provinces,
        unknown_rows = summary.unknown_rows,
        warnings = summary.warnings,
        "wrote province-colored dialect data"
    );
    Ok(summary)
}

/// Run the pipeline and report success as a flag. Errors are logged, never
/// propagated.
pub fn run(config: &PipelineConfig) -> bool {
    match generate(config) {
        Ok(_) => true,
        Err(e) => {
            error!("conversion failed: {e}");
            false
        }
    }
}
