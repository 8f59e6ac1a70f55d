//! Championship results: the team with the most wins, the team with the
//! most final appearances and the average winning margin.

use serde::Serialize;

use crate::error::RowError;
use crate::extractor::{
    Analysis, CoercedFields, ExtractionRule, FieldRule, FrequencyCounter, RunningMean,
    round_half_away,
};
use crate::report::{ReportLine, ReportSection, format_integer};

pub const WINNER_FIELD: &str = "Winning team";
pub const LOSER_FIELD: &str = "Losing team";
pub const WINNER_POINTS_FIELD: &str = "Winning Team Points";
pub const LOSER_POINTS_FIELD: &str = "Losing Team Points";

#[derive(Debug)]
pub struct ChampionshipAnalysis {
    rule: ExtractionRule,
}

impl ChampionshipAnalysis {
    pub fn new() -> Self {
        let rule = ExtractionRule::new(vec![
            FieldRule::text(WINNER_FIELD),
            FieldRule::text(LOSER_FIELD),
            FieldRule::number(WINNER_POINTS_FIELD),
            FieldRule::number(LOSER_POINTS_FIELD),
        ]);
        Self { rule }
    }
}

impl Default for ChampionshipAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameResult {
    pub winner: String,
    pub loser: String,
    /// Winner points minus loser points
    pub spread: f64,
}

#[derive(Debug, Default)]
pub struct ChampionshipAccumulator {
    wins: FrequencyCounter<String>,
    appearances: FrequencyCounter<String>,
    spreads: RunningMean,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamCount {
    pub team: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChampionshipSummary {
    pub most_wins: TeamCount,
    pub most_appearances: TeamCount,
    /// Mean spread rounded half away from zero
    pub average_point_spread: i64,
    pub games: usize,
}

impl Analysis for ChampionshipAnalysis {
    type Row = GameResult;
    type Accumulator = ChampionshipAccumulator;
    type Summary = ChampionshipSummary;

    fn name(&self) -> &'static str {
        "championship"
    }

    fn rule(&self) -> &ExtractionRule {
        &self.rule
    }

    fn read_row(&self, fields: &CoercedFields) -> Result<Self::Row, RowError> {
        Ok(GameResult {
            winner: fields.text(WINNER_FIELD)?.to_string(),
            loser: fields.text(LOSER_FIELD)?.to_string(),
            spread: fields.number(WINNER_POINTS_FIELD)? - fields.number(LOSER_POINTS_FIELD)?,
        })
    }

    fn accumulate(&self, accumulator: &mut Self::Accumulator, row: Self::Row) {
        accumulator.spreads.push(row.spread);
        accumulator.wins.increment(row.winner.clone());
        accumulator.appearances.increment(row.winner);
        accumulator.appearances.increment(row.loser);
    }

    fn finish(&self, accumulator: Self::Accumulator) -> Option<Self::Summary> {
        let team_count = |counter: &FrequencyCounter<String>| {
            counter.mode().map(|(team, count)| TeamCount {
                team: team.clone(),
                count,
            })
        };

        Some(ChampionshipSummary {
            most_wins: team_count(&accumulator.wins)?,
            most_appearances: team_count(&accumulator.appearances)?,
            average_point_spread: round_half_away(accumulator.spreads.mean()?),
            games: accumulator.spreads.count(),
        })
    }
}

impl ReportSection for ChampionshipSummary {
    fn title(&self) -> String {
        "Super Bowl Analysis:".to_string()
    }

    fn lines(&self) -> Vec<ReportLine> {
        vec![
            ReportLine::new(
                "Most Super Bowl Wins",
                format!("{} with {}", self.most_wins.team, self.most_wins.count),
            ),
            ReportLine::new(
                "Most Super Bowl Appearances",
                format!(
                    "{} with {} appearances.",
                    self.most_appearances.team, self.most_appearances.count
                ),
            ),
            ReportLine::new(
                "Average Point Spread",
                format!("{} points.", format_integer(self.average_point_spread)),
            ),
        ]
    }
}
