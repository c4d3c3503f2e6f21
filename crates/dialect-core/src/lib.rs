// crates/dialect-core/src/lib.rs

//! dialect-core
//! ============
//!
//! Turns a table of dialect recordings (location, coordinates, collector,
//! audio reference, transcript) into a JSON array of map markers, each tagged
//! with an inferred province and a per-province color.
//!
//! ```rust,ignore
//! use dialect_core::{run, PipelineConfig};
//!
//! let config = PipelineConfig::new("Data.csv").with_audio_prefix("https://cdn.example/");
//! assert!(run(&config));
//! ```

pub mod builder;
pub mod color;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod province;
pub mod writer;

// Re-exports
pub use crate::builder::{build_records, BuildOptions, BuildOutput, Coordinate, RowWarning};
pub use crate::color::{allocate, hsv_to_rgb, ColorAssignment, DEFAULT_COLOR};
pub use crate::error::{DialectError, Result};
pub use crate::loader::{load_rows, read_rows, LoadOptions};
pub use crate::model::{Audio, OutputRecord, Row};
pub use crate::pipeline::{generate, prepare, run, PipelineConfig, RunSummary, DEFAULT_OUTPUT};
pub use crate::province::{
    resolve, resolve_str, resolve_with_tier, Resolution, Tier, UNKNOWN_PROVINCE,
};
pub use crate::writer::{write_json, write_records};
