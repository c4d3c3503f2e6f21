// crates/dialect-core/src/writer.rs
use crate::error::{DialectError, Result};
use crate::model::OutputRecord;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes the records as a pretty-printed JSON array.
///
/// The document goes to a sibling temp file first and is renamed into place
/// only once fully flushed, so a failed run never leaves a truncated file.
pub fn write_json(path: impl AsRef<Path>, records: &[OutputRecord]) -> Result<()> {
    let path = path.as_ref();
    let tmp = temp_path(path)?;

    let result =
        write_to(&tmp, records).and_then(|()| fs::rename(&tmp, path).map_err(DialectError::Io));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

/// Serialize into any writer; used by [`write_json`] and for stdout output.
pub fn write_records<W: Write>(mut writer: W, records: &[OutputRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

fn write_to(path: &Path, records: &[OutputRecord]) -> Result<()> {
    let file = File::create(path)?;
    write_records(BufWriter::new(file), records)
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        DialectError::InvalidData(format!("output path {} has no file name", path.display()))
    })?;
    Ok(path.with_file_name(format!(".{}.tmp", name.to_string_lossy())))
}
