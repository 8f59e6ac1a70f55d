//! The concrete analyses shipped with the tool
//!
//! - [`box_office`] - spreadsheet of movie grosses
//! - [`streaming`] - CSV streaming chart
//! - [`championship`] - JSON array of final results

pub mod box_office;
pub mod championship;
pub mod streaming;

#[cfg(test)]
pub mod tests;

pub use box_office::{BoxOfficeAnalysis, BoxOfficeSummary};
pub use championship::{ChampionshipAnalysis, ChampionshipSummary};
pub use streaming::{StreamingChartAnalysis, StreamingSummary};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants;

/// Identifies one analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisKind {
    BoxOffice,
    Streaming,
    Championship,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 3] = [
        AnalysisKind::BoxOffice,
        AnalysisKind::Streaming,
        AnalysisKind::Championship,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AnalysisKind::BoxOffice => "box-office",
            AnalysisKind::Streaming => "streaming",
            AnalysisKind::Championship => "championship",
        }
    }

    /// Input file name used when the configuration does not override it
    pub fn default_input_file(&self) -> &'static str {
        match self {
            AnalysisKind::BoxOffice => constants::box_office::INPUT_FILE,
            AnalysisKind::Streaming => constants::streaming::INPUT_FILE,
            AnalysisKind::Championship => constants::championship::INPUT_FILE,
        }
    }

    /// Report file name used when the configuration does not override it
    pub fn default_output_file(&self) -> &'static str {
        match self {
            AnalysisKind::BoxOffice => constants::box_office::OUTPUT_FILE,
            AnalysisKind::Streaming => constants::streaming::OUTPUT_FILE,
            AnalysisKind::Championship => constants::championship::OUTPUT_FILE,
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
