//! Error handling for statistics extraction runs.
//!
//! Failures are split by the scope that handles them: source and schema
//! failures end a single analysis, row failures end a single record, and
//! report/configuration failures surface to the command line.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported input format for file: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("CSV parsing error in file '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error in file '{path}': {message}")]
    Json { path: PathBuf, message: String },

    #[error("Spreadsheet error in file '{path}': {message}")]
    Spreadsheet { path: PathBuf, message: String },

    #[error("Required columns missing from {path}: {}", columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    #[error("Report writing failed for {path}: {message}")]
    Report { path: PathBuf, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl StatsError {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON error for the given file
    pub fn json(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Json {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a spreadsheet error for the given file
    pub fn spreadsheet(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Spreadsheet {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a report writing error
    pub fn report(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Report {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for failures reading or decoding the input file
    pub fn is_source_failure(&self) -> bool {
        matches!(
            self,
            Self::Io { .. }
                | Self::FileNotFound { .. }
                | Self::UnsupportedFormat { .. }
                | Self::Csv { .. }
                | Self::Json { .. }
                | Self::Spreadsheet { .. }
        )
    }

    /// True when the input was readable but lacks the required columns
    pub fn is_schema_failure(&self) -> bool {
        matches!(self, Self::MissingColumns { .. })
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;

/// Why a single record was left out of a scan.
///
/// Row failures are local to the scan loop and never cross the
/// extractor boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("missing field '{field}'")]
    MissingField { field: String },

    #[error("blank value for field '{field}'")]
    BlankField { field: String },

    #[error("cannot read field '{field}' = '{value}' as {expected}")]
    Coercion {
        field: String,
        value: String,
        expected: &'static str,
    },
}

impl RowError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn blank(field: impl Into<String>) -> Self {
        Self::BlankField {
            field: field.into(),
        }
    }

    pub fn coercion(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::Coercion {
            field: field.into(),
            value: value.into(),
            expected,
        }
    }
}
