//! Analysis commands: `box-office`, `streaming`, `championship` and `all`

use std::time::Instant;
use tracing::{debug, info};

use super::shared::{
    RunSummary, create_progress_bar, load_configuration, print_summary, setup_logging,
};
use crate::analyses::AnalysisKind;
use crate::cli::args::AnalyzeArgs;
use crate::config::RunConfig;
use crate::error::Result;
use crate::processor::run_analysis;

/// Run the selected analyses and print a summary
pub fn run_analyses(kinds: &[AnalysisKind], args: AnalyzeArgs) -> Result<RunSummary> {
    setup_logging(args.get_log_level(), args.quiet)?;
    debug!("Command line arguments: {:?}", args);

    let config = load_configuration(&args)?;
    let summary = run_with_config(kinds, &config, args.show_progress())?;

    print_summary(&summary, args.output_format, args.quiet)?;
    Ok(summary)
}

/// Run `kinds` in order against an already loaded configuration
///
/// Stops at the first report that cannot be written.
pub fn run_with_config(
    kinds: &[AnalysisKind],
    config: &RunConfig,
    show_progress: bool,
) -> Result<RunSummary> {
    let start_time = Instant::now();
    info!(
        "Running {} analyses from {} into {}",
        kinds.len(),
        config.input_folder.display(),
        config.output_folder.display()
    );

    let progress_bar = (show_progress && kinds.len() > 1)
        .then(|| create_progress_bar(kinds.len() as u64, "Starting..."));

    let mut summary = RunSummary::default();
    for (i, kind) in kinds.iter().enumerate() {
        if let Some(pb) = &progress_bar {
            pb.set_position(i as u64);
            pb.set_message(format!("Analyzing {}", kind));
        }

        let outcome = run_analysis(*kind, config)?;
        info!("Completed {}: {}", kind, outcome.stats.summary());
        summary.outcomes.push(outcome);
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("Analysis complete");
    }

    summary.processing_time = start_time.elapsed();
    Ok(summary)
}
