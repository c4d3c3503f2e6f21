// crates/dialect-core/src/model.rs
use serde::Serialize;

/// Placeholder stem for rows without a location; the 1-based row number is appended.
pub const UNKNOWN_LOCATION_PREFIX: &str = "未知地点";
pub const UNKNOWN_COLLECTOR: &str = "未知采集人";
pub const NO_CONTENT: &str = "无内容描述";

/// One input observation, as read from the table.
///
/// Every cell is optional: empty cells are `None`. Coordinates are kept as
/// raw text so the record builder can report malformed values per row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub location: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub collector: Option<String>,
    pub audio_reference: Option<String>,
    pub content: Option<String>,
}

/// Audio reference split into a (possibly prefixed) URL and a display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Audio {
    pub url: String,
    pub name: String,
}

/// One map marker. Field order is the JSON field order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    pub id: String,
    pub location: String,
    pub province: String,
    pub longitude: f64,
    pub latitude: f64,
    pub color: String,
    pub collector: String,
    pub audio: Audio,
    pub content: String,
}

/// `dialect_<n>` for a 1-based row number.
pub fn record_id(row_number: usize) -> String {
    format!("dialect_{row_number}")
}

/// `未知地点_<n>` for a 1-based row number.
pub fn unknown_location(row_number: usize) -> String {
    format!("{UNKNOWN_LOCATION_PREFIX}_{row_number}")
}
