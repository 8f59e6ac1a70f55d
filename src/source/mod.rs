//! Record sources for the supported input formats
//!
//! Each source turns one file into a [`RecordSet`]: the columns the file
//! declares plus one [`Record`](crate::models::Record) per data row.
//!
//! - [`delimited`] - CSV/TSV with a header line
//! - [`json`] - a top-level JSON array of objects
//! - [`spreadsheet`] - first worksheet of a workbook, header in row 1
//!
//! The format is chosen from the file extension.

pub mod delimited;
pub mod json;
pub mod spreadsheet;

#[cfg(test)]
pub mod tests;

use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, StatsError};
use crate::models::RecordSet;

/// Input formats understood by [`load_records`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Delimited { delimiter: u8 },
    Json,
    Spreadsheet,
}

impl SourceFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_string_lossy().to_lowercase();

        match extension.as_str() {
            "csv" | "txt" => Some(SourceFormat::Delimited { delimiter: b',' }),
            "tsv" => Some(SourceFormat::Delimited { delimiter: b'\t' }),
            "json" => Some(SourceFormat::Json),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(SourceFormat::Spreadsheet),
            _ => None,
        }
    }
}

/// Read every record from `path`
pub fn load_records(path: &Path) -> Result<RecordSet> {
    if !path.exists() {
        return Err(StatsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = SourceFormat::from_path(path).ok_or_else(|| StatsError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    debug!("Reading {} as {:?}", path.display(), format);

    let record_set = match format {
        SourceFormat::Delimited { delimiter } => delimited::read(path, delimiter)?,
        SourceFormat::Json => json::read(path)?,
        SourceFormat::Spreadsheet => spreadsheet::read(path)?,
    };

    info!(
        "Loaded {} records with {} columns from {}",
        record_set.len(),
        record_set.columns.len(),
        path.display()
    );
    Ok(record_set)
}
