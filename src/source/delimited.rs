//! Delimited-text record source
//!
//! The first line names the fields. Short rows are kept and simply lack
//! their trailing fields; rows the CSV reader cannot decode are skipped.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

use indexmap::IndexMap;

use crate::error::{Result, StatsError};
use crate::models::{FieldValue, Record, RecordSet};

/// Read a delimited file from disk
pub fn read(path: &Path, delimiter: u8) -> Result<RecordSet> {
    let file = File::open(path)
        .map_err(|e| StatsError::io(format!("Failed to open {}", path.display()), e))?;
    from_reader(file, delimiter, path)
}

/// Read delimited records from any reader; `path` is used in error messages
pub fn from_reader<R: Read>(reader: R, delimiter: u8, path: &Path) -> Result<RecordSet> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()
        .map_err(|e| StatsError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        match result {
            Ok(row) => {
                let position = row
                    .position()
                    .map_or(index + 2, |position| position.line() as usize);
                let fields: IndexMap<String, FieldValue> = columns
                    .iter()
                    .zip(row.iter())
                    .map(|(column, value)| (column.clone(), to_field_value(value)))
                    .collect();
                records.push(Record::new(position, fields));
            }
            Err(e) => {
                warn!(
                    "Skipping unreadable row {} in {}: {}",
                    index + 2,
                    path.display(),
                    e
                );
            }
        }
    }

    Ok(RecordSet::new(columns, records))
}

fn to_field_value(raw: &str) -> FieldValue {
    if raw.is_empty() {
        FieldValue::Empty
    } else {
        FieldValue::Text(raw.to_string())
    }
}
