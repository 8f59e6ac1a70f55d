//! Tabular Statistics Library
//!
//! Reads tabular records from spreadsheet, delimited text or JSON files and
//! computes summary statistics over them in a single pass.
//!
//! This library provides tools for:
//! - Loading records from `.xlsx`, `.csv`/`.tsv` and `.json` sources
//! - Validating and coercing required fields, skipping bad records with a warning
//! - Accumulating extremes with payloads, means and most frequent values
//! - Writing fixed-format plain-text reports
//! - Converting spreadsheets to JSON

pub mod analyses;
pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod extractor;
pub mod models;
pub mod processor;
pub mod report;
pub mod source;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::RunConfig;
pub use error::{Result, RowError, StatsError};
pub use models::{FieldValue, Record, RecordSet};
