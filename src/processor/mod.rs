//! Runs one analysis end to end.
//!
//! [`scan_file`] loads a source file, checks that the analysis' required
//! columns exist and runs the extractor. Source and schema failures are
//! logged and turned into an empty extraction, so one unreadable input
//! never stops the other analyses. [`run_analysis`] resolves the paths
//! from a [`RunConfig`] and writes the report when there is something to
//! write.

#[cfg(test)]
pub mod tests;

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::analyses::{
    AnalysisKind, BoxOfficeAnalysis, ChampionshipAnalysis, StreamingChartAnalysis,
};
use crate::config::RunConfig;
use crate::error::{Result, StatsError};
use crate::extractor::{Analysis, Extraction, ExtractionRule, ScanStats, extract};
use crate::models::RecordSet;
use crate::report::{ReportSection, render, write_report};
use crate::source::load_records;

/// What a single analysis run produced
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub analysis: AnalysisKind,
    pub input: PathBuf,
    /// Report path, present only when a report was written
    pub output: Option<PathBuf>,
    pub stats: ScanStats,
    /// Summary as JSON, present only when at least one record was accepted
    pub summary: Option<serde_json::Value>,
    /// Rendered report text
    #[serde(skip)]
    pub report: Option<String>,
}

impl RunOutcome {
    pub fn is_written(&self) -> bool {
        self.output.is_some()
    }
}

/// Load `path` and fail if any field required by `rule` is absent
pub fn load_checked(path: &Path, rule: &ExtractionRule) -> Result<RecordSet> {
    let record_set = load_records(path)?;

    let missing = record_set.missing_columns(rule.required_names());
    if !missing.is_empty() {
        return Err(StatsError::MissingColumns {
            path: path.to_path_buf(),
            columns: missing,
        });
    }

    Ok(record_set)
}

/// Scan one file; source and schema failures yield an empty extraction
pub fn scan_file<A>(path: &Path, analysis: &A) -> Extraction<A::Summary>
where
    A: Analysis + ?Sized,
{
    match load_checked(path, analysis.rule()) {
        Ok(record_set) => extract(&record_set.records, analysis),
        Err(e) => {
            if e.is_schema_failure() {
                error!("{}: Headers not found. {}", analysis.name(), e);
            } else if e.is_source_failure() {
                error!("{}: Failed to load data. {}", analysis.name(), e);
            } else {
                error!("{}: {}", analysis.name(), e);
            }
            Extraction::empty()
        }
    }
}

/// Summary of one file, or `None` when nothing could be computed
pub fn analyze_file<A>(path: &Path, analysis: &A) -> Option<A::Summary>
where
    A: Analysis + ?Sized,
{
    scan_file(path, analysis).summary
}

/// Run one analysis with the folders and file names from `config`
///
/// Only a failure to write the report is returned as an error.
pub fn run_analysis(kind: AnalysisKind, config: &RunConfig) -> Result<RunOutcome> {
    match kind {
        AnalysisKind::BoxOffice => run_with(kind, &BoxOfficeAnalysis::new(), config),
        AnalysisKind::Streaming => run_with(kind, &StreamingChartAnalysis::new(), config),
        AnalysisKind::Championship => run_with(kind, &ChampionshipAnalysis::new(), config),
    }
}

fn run_with<A>(kind: AnalysisKind, analysis: &A, config: &RunConfig) -> Result<RunOutcome>
where
    A: Analysis,
    A::Summary: ReportSection + Serialize,
{
    let input = config.input_path(kind);
    let output = config.output_path(kind);
    info!("Running {} analysis on {}", kind, input.display());

    let extraction = scan_file(&input, analysis);
    let stats = extraction.stats;

    let Some(summary) = extraction.summary else {
        error!("No statistics to write. Skipping file output.");
        return Ok(RunOutcome {
            analysis: kind,
            input,
            output: None,
            stats,
            summary: None,
            report: None,
        });
    };

    write_report(&output, &summary)?;
    let json = serde_json::to_value(&summary)
        .map_err(|e| StatsError::report(&output, format!("failed to serialize summary: {}", e)))?;

    Ok(RunOutcome {
        analysis: kind,
        input,
        output: Some(output),
        stats,
        summary: Some(json),
        report: Some(render(&summary)),
    })
}
