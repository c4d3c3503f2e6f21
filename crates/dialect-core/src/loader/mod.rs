// crates/dialect-core/src/loader/mod.rs

//! # Table Loader
//!
//! Handles the physical layer (I/O, decompression) and maps the header row
//! onto the six logical columns. Columns may appear in any order and extra
//! columns are ignored. Each column is accepted under its English name or
//! the Chinese header used by the survey spreadsheets.
//!
//! Delimited text (optionally gzipped) goes through `csv`; `.xlsx`, `.xls`
//! and `.ods` workbooks go through `calamine` behind the `spreadsheet`
//! feature.

use crate::error::{DialectError, Result};
use crate::model::Row;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use tracing::debug;

mod common_io;
#[cfg(feature = "spreadsheet")]
mod spreadsheet;

pub use common_io::{is_gzip_path, is_spreadsheet_path};

/// Accepted header names per logical column.
pub const LOCATION_HEADERS: &[&str] = &["location", "地点名"];
pub const LATITUDE_HEADERS: &[&str] = &["latitude", "纬度"];
pub const LONGITUDE_HEADERS: &[&str] = &["longitude", "经度"];
pub const COLLECTOR_HEADERS: &[&str] = &["collector", "采集人"];
pub const AUDIO_HEADERS: &[&str] = &["audio", "音频"];
pub const CONTENT_HEADERS: &[&str] = &["content", "内容"];

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Field delimiter, `b','` by default. Use `b'\t'` for TSV.
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Header positions of the six logical columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMap {
    location: usize,
    latitude: usize,
    longitude: usize,
    collector: usize,
    audio: usize,
    content: usize,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        Ok(Self {
            location: find_column(headers, LOCATION_HEADERS)?,
            latitude: find_column(headers, LATITUDE_HEADERS)?,
            longitude: find_column(headers, LONGITUDE_HEADERS)?,
            collector: find_column(headers, COLLECTOR_HEADERS)?,
            audio: find_column(headers, AUDIO_HEADERS)?,
            content: find_column(headers, CONTENT_HEADERS)?,
        })
    }

    fn row(&self, record: &StringRecord) -> Row {
        Row {
            location: cell(record, self.location),
            latitude: cell(record, self.latitude),
            longitude: cell(record, self.longitude),
            collector: cell(record, self.collector),
            audio_reference: cell(record, self.audio),
            content: cell(record, self.content),
        }
    }
}

fn find_column(headers: &StringRecord, accepted: &'static [&'static str]) -> Result<usize> {
    headers
        .iter()
        .position(|h| {
            let h = h.trim_start_matches('\u{feff}').trim();
            accepted.iter().any(|a| h.eq_ignore_ascii_case(a))
        })
        .ok_or_else(|| DialectError::MissingColumn {
            column: accepted[0],
            accepted: accepted.join(" | "),
        })
}

/// Empty and whitespace-only cells are absent.
fn cell(record: &StringRecord, index: usize) -> Option<String> {
    record
        .get(index)
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// Load every row of the table at `path`.
pub fn load_rows(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let rows = if is_spreadsheet_path(path) {
        load_workbook(path)?
    } else {
        let reader = common_io::open_stream(path)?;
        read_rows(reader, options)?
    };
    debug!(path = %path.display(), rows = rows.len(), "table loaded");
    Ok(rows)
}

#[cfg(feature = "spreadsheet")]
fn load_workbook(path: &Path) -> Result<Vec<Row>> {
    if !path.exists() {
        return Err(DialectError::NotFound(format!(
            "Input table not found at {}",
            path.display()
        )));
    }
    spreadsheet::load_first_sheet(path)
}

#[cfg(not(feature = "spreadsheet"))]
fn load_workbook(path: &Path) -> Result<Vec<Row>> {
    Err(DialectError::InvalidData(format!(
        "{} is a workbook but 'spreadsheet' is disabled",
        path.display()
    )))
}

/// Parse rows from any reader. The first record must be the header row.
pub fn read_rows<R: Read>(reader: R, options: &LoadOptions) -> Result<Vec<Row>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(rdr.headers()?)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(columns.row(&record));
    }
    Ok(rows)
}
