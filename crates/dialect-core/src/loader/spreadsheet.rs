// crates/dialect-core/src/loader/spreadsheet.rs
#![cfg(feature = "spreadsheet")]

use super::ColumnMap;
use crate::error::{DialectError, Result};
use crate::model::Row;
use calamine::{open_workbook_auto, Data, Reader};
use csv::StringRecord;
use std::path::Path;

/// Reads the first sheet of a workbook. The first row is the header row.
///
/// Cells are rendered to text so the workbook path shares header matching and
/// blank-cell handling with the CSV path.
pub fn load_first_sheet(path: &Path) -> Result<Vec<Row>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0).ok_or_else(|| {
        DialectError::InvalidData(format!("workbook {} has no sheets", path.display()))
    })??;

    let mut records = range.rows().map(to_record);
    let Some(headers) = records.next() else {
        return Err(DialectError::InvalidData(format!(
            "first sheet of {} is empty",
            path.display()
        )));
    };
    let columns = ColumnMap::from_headers(&headers)?;

    Ok(records.map(|record| columns.row(&record)).collect())
}

fn to_record(cells: &[Data]) -> StringRecord {
    cells.iter().map(|c| c.to_string()).collect()
}
