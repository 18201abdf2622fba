//! Per-file line and byte counting.
//!
//! Lines are the `\n`-delimited segments of a file's text. This is not a
//! strict newline count: an empty file has one line, and a trailing newline
//! contributes one more (empty) line. Percentages are computed from these
//! counts, so the definition must stay as it is.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::data::stats::FileRecord;
use crate::error::LangstatError;
use crate::source::filter::extension_of;
use crate::Result;

/// Count the `\n`-delimited segments of `text`.
pub fn count_lines(text: &str) -> u64 {
    text.split('\n').count() as u64
}

/// Read a file as text and count its lines.
///
/// Invalid UTF-8 is decoded lossily rather than rejected.
pub fn read_line_count(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LangstatError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(count_lines(&String::from_utf8_lossy(&bytes)))
}

/// Build the record for a file whose size is already known.
///
/// An unreadable file keeps its size and counts zero lines.
pub(crate) fn record_for(path: &Path, extension: String, byte_size: u64) -> FileRecord {
    let line_count = match read_line_count(path) {
        Ok(lines) => lines,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "counting file as 0 lines");
            0
        }
    };
    FileRecord::new(extension, line_count, byte_size)
}

/// Count a single file, regardless of the allow-list.
///
/// Files without an extension are recorded with an empty extension.
///
/// # Example
///
/// ```rust,ignore
/// use langstatlib::count_file;
///
/// let record = count_file("src/main.rs")?;
/// println!("{} lines, {} bytes", record.line_count, record.byte_size);
/// ```
pub fn count_file(path: impl AsRef<Path>) -> Result<FileRecord> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LangstatError::PathNotFound(path.to_path_buf()));
    }

    let byte_size = fs::metadata(path)?.len();
    let extension = extension_of(path).unwrap_or_default();
    Ok(record_for(path, extension, byte_size))
}
