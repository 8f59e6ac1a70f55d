//! Running aggregates updated once per accepted record
//!
//! Every accumulator here is O(1) amortized per update and keeps the
//! first-occurrence policy for ties: a later value equal to the current
//! extreme or the current highest count never displaces the holder.

use indexmap::IndexMap;
use serde::Serialize;
use std::hash::Hash;

/// Which end of the ordering an [`Extremum`] tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    Min,
    Max,
}

/// Running minimum or maximum together with the payload that produced it
#[derive(Debug, Clone)]
pub struct Extremum<P> {
    kind: ExtremumKind,
    best: Option<(f64, P)>,
}

impl<P> Extremum<P> {
    pub fn new(kind: ExtremumKind) -> Self {
        Self { kind, best: None }
    }

    pub fn max() -> Self {
        Self::new(ExtremumKind::Max)
    }

    pub fn min() -> Self {
        Self::new(ExtremumKind::Min)
    }

    /// Offer a candidate; it replaces the holder only when strictly better
    pub fn offer(&mut self, value: f64, payload: P) {
        let better = match &self.best {
            None => true,
            Some((current, _)) => match self.kind {
                ExtremumKind::Max => value > *current,
                ExtremumKind::Min => value < *current,
            },
        };
        if better {
            self.best = Some((value, payload));
        }
    }

    pub fn into_inner(self) -> Option<(f64, P)> {
        self.best
    }
}

/// Running sum and count
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningMean {
    sum: f64,
    count: usize,
}

impl RunningMean {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Unrounded mean, `None` before the first value or once the sum
    /// has overflowed
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum / self.count as f64).filter(|mean| mean.is_finite())
    }
}

/// Final min / max / mean of a numeric column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    /// Mean rounded to two decimal places
    pub mean: f64,
    pub count: usize,
}

/// Running min, max, sum and count of one numeric column
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericRange {
    min: Option<f64>,
    max: Option<f64>,
    mean: RunningMean,
}

impl NumericRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) {
        self.min = Some(self.min.map_or(value, |min| min.min(value)));
        self.max = Some(self.max.map_or(value, |max| max.max(value)));
        self.mean.push(value);
    }

    pub fn finish(&self) -> Option<NumericSummary> {
        Some(NumericSummary {
            min: self.min?,
            max: self.max?,
            mean: round_to(self.mean.mean()?, 2),
            count: self.mean.count(),
        })
    }
}

/// Occurrence counts kept in first-insertion order
///
/// The mode is the first key to reach the highest count seen so far, so a
/// key that only ties the leader later in the scan does not take over.
#[derive(Debug, Clone)]
pub struct FrequencyCounter<K: Hash + Eq> {
    counts: IndexMap<K, u64>,
    leader: Option<usize>,
}

impl<K: Hash + Eq> Default for FrequencyCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq> FrequencyCounter<K> {
    pub fn new() -> Self {
        Self {
            counts: IndexMap::new(),
            leader: None,
        }
    }

    /// Count one occurrence of `key` and return its new count
    pub fn increment(&mut self, key: K) -> u64 {
        let entry = self.counts.entry(key);
        let index = entry.index();
        let count = entry.or_insert(0);
        *count += 1;
        let count = *count;

        let leader_count = self
            .leader
            .and_then(|leader| self.counts.get_index(leader))
            .map_or(0, |(_, leader_count)| *leader_count);
        if self.leader.is_none() || count > leader_count {
            self.leader = Some(index);
        }
        count
    }

    /// Most frequent key and its count
    ///
    /// Ties go to the key that reached the count first, not to the key
    /// inserted first.
    pub fn mode(&self) -> Option<(&K, u64)> {
        self.leader
            .and_then(|leader| self.counts.get_index(leader))
            .map(|(key, count)| (key, *count))
    }
}

/// Round to `places` decimal places, halves away from zero
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Round to the nearest whole number, halves away from zero
pub fn round_half_away(value: f64) -> i64 {
    value.round() as i64
}
