//! The scan loop shared by every analysis
//!
//! [`extract`] walks a record sequence once. Each record is coerced through
//! the analysis' [`ExtractionRule`], converted to a typed row and folded into
//! the accumulator. Records that fail any of those steps are logged and
//! skipped before they touch the accumulator.

use serde::Serialize;
use tracing::{debug, warn};

use super::rule::{CoercedFields, ExtractionRule};
use crate::error::RowError;
use crate::models::Record;

/// One statistics analysis over tabular records
pub trait Analysis {
    /// Typed values read from one accepted record
    type Row;
    /// Running state built during the scan
    type Accumulator: Default;
    /// Final result; `finish` returns `None` when nothing was accumulated
    type Summary;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Required fields with their coercions and fallbacks
    fn rule(&self) -> &ExtractionRule;

    /// Build the typed row from coerced fields
    fn read_row(&self, fields: &CoercedFields) -> Result<Self::Row, RowError>;

    /// Fold one accepted row into the accumulator
    fn accumulate(&self, accumulator: &mut Self::Accumulator, row: Self::Row);

    /// Derive the final summary from the accumulator
    fn finish(&self, accumulator: Self::Accumulator) -> Option<Self::Summary>;
}

/// Counters describing one scan
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanStats {
    /// Records offered to the extractor
    pub total_records: usize,
    /// Records folded into the accumulator
    pub accepted: usize,
    /// Records left out because of a row failure
    pub skipped: usize,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted records as a percentage of all records
    pub fn acceptance_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            (self.accepted as f64 / self.total_records as f64) * 100.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} records: {} accepted, {} skipped ({:.1}% accepted)",
            self.total_records,
            self.accepted,
            self.skipped,
            self.acceptance_rate()
        )
    }
}

/// Output of [`extract`]: the summary (if any record survived) and scan counters
#[derive(Debug, Clone)]
pub struct Extraction<S> {
    pub summary: Option<S>,
    pub stats: ScanStats,
}

impl<S> Extraction<S> {
    /// An extraction that never scanned anything
    pub fn empty() -> Self {
        Self {
            summary: None,
            stats: ScanStats::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
    }
}

/// Scan `records` once and compute the analysis summary
pub fn extract<'a, A, I>(records: I, analysis: &A) -> Extraction<A::Summary>
where
    A: Analysis + ?Sized,
    I: IntoIterator<Item = &'a Record>,
{
    let rule = analysis.rule();
    let mut accumulator = A::Accumulator::default();
    let mut stats = ScanStats::new();

    for record in records {
        stats.total_records += 1;

        match read_record(analysis, rule, record) {
            Ok(row) => {
                analysis.accumulate(&mut accumulator, row);
                stats.accepted += 1;
            }
            Err(e) => {
                stats.skipped += 1;
                warn!("Skipping record {}: {}", record, e);
            }
        }
    }

    debug!("{}: {}", analysis.name(), stats.summary());

    if stats.accepted == 0 {
        warn!("{}: no valid data found", analysis.name());
        return Extraction {
            summary: None,
            stats,
        };
    }

    Extraction {
        summary: analysis.finish(accumulator),
        stats,
    }
}

fn read_record<A: Analysis + ?Sized>(
    analysis: &A,
    rule: &ExtractionRule,
    record: &Record,
) -> Result<A::Row, RowError> {
    let fields = rule.apply(record)?;
    analysis.read_row(&fields)
}
