//! Tabular statistics extraction
//!
//! The extractor reads named fields from each record, coerces them, and folds
//! the valid subset into per-analysis accumulators. It performs no I/O; the
//! only side effect is logging skipped records.
//!
//! ## Architecture
//!
//! - [`rule`] - field rules, coercion and fallbacks
//! - [`accumulator`] - extremum, mean, numeric range and frequency counters
//! - [`engine`] - the [`Analysis`] trait and the single-pass [`extract`] loop
//!
//! ## Usage
//!
//! ```rust
//! use tabular_stats::analyses::championship::ChampionshipAnalysis;
//! use tabular_stats::extractor::extract;
//! use tabular_stats::models::{FieldValue, Record};
//!
//! let records = vec![Record::from_pairs(
//!     1,
//!     [
//!         ("Winning team", FieldValue::text("A")),
//!         ("Losing team", FieldValue::text("B")),
//!         ("Winning Team Points", FieldValue::Integer(30)),
//!         ("Losing Team Points", FieldValue::Integer(20)),
//!     ],
//! )];
//!
//! let extraction = extract(&records, &ChampionshipAnalysis::new());
//! assert_eq!(extraction.stats.accepted, 1);
//! ```

pub mod accumulator;
pub mod engine;
pub mod rule;

#[cfg(test)]
pub mod tests;

pub use accumulator::{
    Extremum, ExtremumKind, FrequencyCounter, NumericRange, NumericSummary, RunningMean,
    round_half_away, round_to,
};
pub use engine::{Analysis, Extraction, ScanStats, extract};
pub use rule::{Coerced, CoercedFields, Coercion, ExtractionRule, FieldRule};
