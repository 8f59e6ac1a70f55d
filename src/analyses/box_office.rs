//! Box office earnings: highest and lowest grossing movie plus min, max and
//! average gross.

use serde::Serialize;

use crate::constants::UNKNOWN_PLACEHOLDER;
use crate::error::RowError;
use crate::extractor::{
    Analysis, Coerced, CoercedFields, ExtractionRule, Extremum, FieldRule, NumericRange,
};
use crate::report::{ReportLine, ReportSection, format_currency};

pub const MOVIE_FIELD: &str = "Movie";
pub const GROSS_FIELD: &str = "Gross";

#[derive(Debug)]
pub struct BoxOfficeAnalysis {
    rule: ExtractionRule,
}

impl BoxOfficeAnalysis {
    pub fn new() -> Self {
        let rule = ExtractionRule::new(vec![
            FieldRule::text(MOVIE_FIELD)
                .with_fallback(Coerced::Text(UNKNOWN_PLACEHOLDER.to_string())),
            FieldRule::number(GROSS_FIELD).with_fallback(Coerced::Number(0.0)),
        ]);
        Self { rule }
    }
}

impl Default for BoxOfficeAnalysis {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxOfficeRow {
    pub movie: String,
    pub gross: f64,
}

#[derive(Debug)]
pub struct BoxOfficeAccumulator {
    highest: Extremum<String>,
    lowest: Extremum<String>,
    gross: NumericRange,
}

impl Default for BoxOfficeAccumulator {
    fn default() -> Self {
        Self {
            highest: Extremum::max(),
            lowest: Extremum::min(),
            gross: NumericRange::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieEarnings {
    pub movie: String,
    pub earnings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxOfficeSummary {
    pub highest_grossing: MovieEarnings,
    pub lowest_grossing: MovieEarnings,
    pub min: f64,
    pub max: f64,
    /// Mean gross rounded to two decimal places
    pub average: f64,
    pub movies: usize,
}

impl Analysis for BoxOfficeAnalysis {
    type Row = BoxOfficeRow;
    type Accumulator = BoxOfficeAccumulator;
    type Summary = BoxOfficeSummary;

    fn name(&self) -> &'static str {
        "box-office"
    }

    fn rule(&self) -> &ExtractionRule {
        &self.rule
    }

    fn read_row(&self, fields: &CoercedFields) -> Result<Self::Row, RowError> {
        Ok(BoxOfficeRow {
            movie: fields.text(MOVIE_FIELD)?.to_string(),
            gross: fields.number(GROSS_FIELD)?,
        })
    }

    fn accumulate(&self, accumulator: &mut Self::Accumulator, row: Self::Row) {
        accumulator.gross.push(row.gross);
        accumulator.highest.offer(row.gross, row.movie.clone());
        accumulator.lowest.offer(row.gross, row.movie);
    }

    fn finish(&self, accumulator: Self::Accumulator) -> Option<Self::Summary> {
        let gross = accumulator.gross.finish()?;
        let (highest, highest_movie) = accumulator.highest.into_inner()?;
        let (lowest, lowest_movie) = accumulator.lowest.into_inner()?;

        Some(BoxOfficeSummary {
            highest_grossing: MovieEarnings {
                movie: highest_movie,
                earnings: highest,
            },
            lowest_grossing: MovieEarnings {
                movie: lowest_movie,
                earnings: lowest,
            },
            min: gross.min,
            max: gross.max,
            average: gross.mean,
            movies: gross.count,
        })
    }
}

impl ReportSection for BoxOfficeSummary {
    fn title(&self) -> String {
        "Box Office Statistics:".to_string()
    }

    fn lines(&self) -> Vec<ReportLine> {
        vec![
            ReportLine::new(
                "Highest Grossing Movie",
                format!(
                    "{} with earnings of {}",
                    self.highest_grossing.movie,
                    format_currency(self.max)
                ),
            ),
            ReportLine::new(
                "Lowest Grossing Movie",
                format!(
                    "{} with earnings of {}",
                    self.lowest_grossing.movie,
                    format_currency(self.min)
                ),
            ),
            ReportLine::new("Average Box Office Earnings", format_currency(self.average)),
        ]
    }
}
