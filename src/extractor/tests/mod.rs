//! Tests for the extractor module
//!
//! Provides a small analysis over `name`/`score` records used by the
//! engine tests, plus record-building helpers.


use super::accumulator::{Extremum, FrequencyCounter, NumericRange, NumericSummary};
use super::engine::Analysis;
use super::rule::{CoercedFields, ExtractionRule, FieldRule};
use crate::error::RowError;
use crate::models::{FieldValue, Record};

/// Build a record with `name` and `score` fields
pub fn score_record(position: usize, name: &str, score: FieldValue) -> Record {
    Record::from_pairs(
        position,
        [("name", FieldValue::text(name)), ("score", score)],
    )
}

/// Build a list of records from `(name, score)` pairs
pub fn score_records(rows: &[(&str, i64)]) -> Vec<Record> {
    rows.iter()
        .enumerate()
        .map(|(index, (name, score))| score_record(index + 1, name, FieldValue::Integer(*score)))
        .collect()
}

/// Analysis over `name` (text) and `score` (number) fields
#[derive(Debug)]
pub struct ScoreAnalysis {
    rule: ExtractionRule,
}

#[derive(Debug, Default)]
pub struct ScoreAccumulator {
    pub range: NumericRange,
    pub highest: Option<Extremum<String>>,
    pub names: FrequencyCounter<String>,
    pub updates: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSummary {
    pub range: NumericSummary,
    pub highest_name: String,
    pub most_common_name: String,
    pub most_common_count: u64,
    pub updates: usize,
}

impl ScoreAnalysis {
    pub fn new() -> Self {
        Self {
            rule: ExtractionRule::new(vec![FieldRule::text("name"), FieldRule::number("score")]),
        }
    }
}

impl Analysis for ScoreAnalysis {
    type Row = (String, f64);
    type Accumulator = ScoreAccumulator;
    type Summary = ScoreSummary;

    fn name(&self) -> &'static str {
        "scores"
    }

    fn rule(&self) -> &ExtractionRule {
        &self.rule
    }

    fn read_row(&self, fields: &CoercedFields) -> Result<Self::Row, RowError> {
        Ok((fields.text("name")?.to_string(), fields.number("score")?))
    }

    fn accumulate(&self, accumulator: &mut Self::Accumulator, (name, score): Self::Row) {
        accumulator.range.push(score);
        accumulator
            .highest
            .get_or_insert_with(Extremum::max)
            .offer(score, name.clone());
        accumulator.names.increment(name);
        accumulator.updates += 1;
    }

    fn finish(&self, accumulator: Self::Accumulator) -> Option<Self::Summary> {
        let (most_common_name, most_common_count) = accumulator
            .names
            .mode()
            .map(|(name, count)| (name.clone(), count))?;
        Some(ScoreSummary {
            range: accumulator.range.finish()?,
            highest_name: accumulator.highest?.into_inner()?.1,
            most_common_name,
            most_common_count,
            updates: accumulator.updates,
        })
    }
}
