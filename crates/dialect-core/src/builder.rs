// crates/dialect-core/src/builder.rs

//! # Record Builder
//!
//! Two passes over the buffered rows: resolve every location and allocate
//! colors over the distinct provinces, then emit one [`OutputRecord`] per row
//! in input order.

use crate::color::{allocate, ColorAssignment};
use crate::model::{
    record_id, unknown_location, Audio, OutputRecord, Row, NO_CONTENT, UNKNOWN_COLLECTOR,
};
use crate::province::{resolve, UNKNOWN_PROVINCE};
use std::path::Path;
use tracing::warn;

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Prepended verbatim to every non-empty audio reference.
    pub audio_prefix: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    Latitude,
    Longitude,
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Coordinate::Latitude => "latitude",
            Coordinate::Longitude => "longitude",
        })
    }
}

/// A coordinate replaced by 0.0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowWarning {
    /// 1-based row number.
    pub row: usize,
    pub field: Coordinate,
    /// Offending cell text, `None` if the cell was empty.
    pub raw: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub records: Vec<OutputRecord>,
    pub colors: ColorAssignment,
    /// Distinct labels seen, the unknown sentinel included.
    pub province_count: usize,
    pub warnings: Vec<RowWarning>,
}

impl BuildOutput {
    /// Row count per province (sentinel included), in first-seen order.
    pub fn summary(&self) -> Vec<(&str, usize)> {
        let mut out: Vec<(&str, usize)> = Vec::new();
        for record in &self.records {
            match out.iter_mut().find(|(p, _)| *p == record.province) {
                Some((_, n)) => *n += 1,
                None => out.push((record.province.as_str(), 1)),
            }
        }
        out
    }

    /// Rows that resolved to the unknown sentinel.
    pub fn unknown_rows(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.province == UNKNOWN_PROVINCE)
            .count()
    }
}

// -----------------------------------------------------------------------------
// BUILD
// -----------------------------------------------------------------------------

pub fn build_records(rows: &[Row], options: &BuildOptions) -> BuildOutput {
    // 1. Resolve
    let provinces: Vec<&'static str> = rows
        .iter()
        .map(|row| resolve(row.location.as_deref()))
        .collect();

    // 2. Distinct labels, first-seen order
    let mut distinct: Vec<&'static str> = Vec::new();
    for p in &provinces {
        if !distinct.contains(p) {
            distinct.push(*p);
        }
    }

    // 3. Colors
    let colors = allocate(distinct.iter().copied());
    let province_count = distinct.len();

    // 4. Records
    let mut warnings = Vec::new();
    let records = rows
        .iter()
        .zip(&provinces)
        .enumerate()
        .map(|(index, (row, province))| {
            let n = index + 1;
            let longitude = coerce_coordinate(
                row.longitude.as_deref(),
                n,
                Coordinate::Longitude,
                &mut warnings,
            );
            let latitude = coerce_coordinate(
                row.latitude.as_deref(),
                n,
                Coordinate::Latitude,
                &mut warnings,
            );

            OutputRecord {
                id: record_id(n),
                location: row
                    .location
                    .clone()
                    .unwrap_or_else(|| unknown_location(n)),
                province: province.to_string(),
                longitude,
                latitude,
                color: colors.get(province).to_string(),
                collector: row
                    .collector
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_COLLECTOR.to_string()),
                audio: split_audio(
                    row.audio_reference.as_deref(),
                    options.audio_prefix.as_deref(),
                ),
                content: row
                    .content
                    .clone()
                    .unwrap_or_else(|| NO_CONTENT.to_string()),
            }
        })
        .collect();

    BuildOutput {
        records,
        colors,
        province_count,
        warnings,
    }
}

/// Parse a coordinate cell; anything missing, unparsable or non-finite is 0.0.
fn coerce_coordinate(
    raw: Option<&str>,
    row: usize,
    field: Coordinate,
    warnings: &mut Vec<RowWarning>,
) -> f64 {
    if let Some(v) = raw.and_then(parse_finite) {
        return v;
    }
    warn!(row, %field, raw = raw.unwrap_or(""), "coordinate missing or malformed, using 0.0");
    warnings.push(RowWarning {
        row,
        field,
        raw: raw.map(str::to_string),
    });
    0.0
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Build the `{url, name}` pair for an audio reference.
///
/// `name` is the base file name with its last extension removed; both
/// fields are empty when there is no reference.
pub fn split_audio(reference: Option<&str>, prefix: Option<&str>) -> Audio {
    let Some(reference) = reference.filter(|r| !r.is_empty()) else {
        return Audio::default();
    };

    // Treat backslashes as separators too; tables exported on Windows use them.
    let normalized = reference.replace('\\', "/");
    let name = Path::new(&normalized)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Audio {
        url: format!("{}{}", prefix.unwrap_or(""), reference),
        name,
    }
}
