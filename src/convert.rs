//! Spreadsheet to JSON conversion
//!
//! Writes every record of a source file as a JSON array of objects, one
//! object per row with keys in header order and blank cells as `null`.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::error::{Result, StatsError};
use crate::source::load_records;

/// Indentation of the written JSON
const JSON_INDENT: &[u8] = b"    ";

/// Convert `input` to a pretty-printed JSON array at `output`
///
/// Returns the number of records written.
pub fn convert_to_json(input: &Path, output: &Path) -> Result<usize> {
    let record_set = load_records(input)?;
    let rows: Vec<_> = record_set.records.iter().map(|r| r.fields()).collect();

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            StatsError::io(
                format!("Failed to create directory {}", parent.display()),
                e,
            )
        })?;
    }

    let file = File::create(output).map_err(|e| {
        StatsError::io(format!("Failed to create {}", output.display()), e)
    })?;
    let mut writer = BufWriter::new(file);

    let mut serializer =
        Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(JSON_INDENT));
    rows.serialize(&mut serializer)
        .map_err(|e| StatsError::json(output, e.to_string()))?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| StatsError::io(format!("Failed to write {}", output.display()), e))?;

    info!(
        "Converted {} records from {} to {}",
        rows.len(),
        input.display(),
        output.display()
    );
    Ok(rows.len())
}
