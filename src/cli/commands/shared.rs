//! Shared components for CLI commands
//!
//! Logging setup, configuration loading, progress bars and the run
//! summary printed once a command finishes.

use colored::*;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::cli::args::{AnalyzeArgs, OutputFormat};
use crate::config::RunConfig;
use crate::constants::LOG_TARGET;
use crate::error::{Result, StatsError};
use crate::processor::RunOutcome;

/// Outcomes of every analysis run by one command
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub outcomes: Vec<RunOutcome>,
    #[serde(serialize_with = "serialize_seconds", rename = "processing_time_seconds")]
    pub processing_time: Duration,
}

impl RunSummary {
    pub fn reports_written(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_written()).count()
    }

    pub fn records_skipped(&self) -> usize {
        self.outcomes.iter().map(|o| o.stats.skipped).sum()
    }
}

fn serialize_seconds<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the level derived from `-v`/`-q`.
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let initialized = if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialized.is_err() {
        debug!("Logging already initialized");
    }
    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &AnalyzeArgs) -> Result<RunConfig> {
    args.validate()?;

    match &args.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No --config given, checking the default location"),
    }

    let config = RunConfig::load_layered(args.config_file.as_deref(), &args.overrides())?;
    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Print the run summary in the requested format
pub fn print_summary(summary: &RunSummary, format: OutputFormat, quiet: bool) -> Result<()> {
    match format {
        OutputFormat::Human if quiet => Ok(()),
        OutputFormat::Human => {
            print_human_summary(summary);
            Ok(())
        }
        OutputFormat::Json => print_json_summary(summary),
    }
}

fn print_human_summary(summary: &RunSummary) {
    println!();
    for outcome in &summary.outcomes {
        match (&outcome.output, &outcome.report) {
            (Some(output), Some(report)) => {
                println!(
                    "{} {} {}",
                    "✓".bright_green().bold(),
                    outcome.analysis.to_string().bright_cyan(),
                    format!("-> {}", output.display()).bright_black()
                );
                for line in report.lines() {
                    println!("    {}", line);
                }
            }
            _ => println!(
                "{} {} {}",
                "✗".bright_red().bold(),
                outcome.analysis.to_string().bright_cyan(),
                "no statistics written".yellow()
            ),
        }
        println!(
            "    {}",
            format!(
                "{} ({})",
                outcome.input.display(),
                outcome.stats.summary()
            )
            .bright_black()
        );
    }

    println!();
    println!(
        "{} {}/{} reports written in {}",
        "Done:".bright_green().bold(),
        summary.reports_written(),
        summary.outcomes.len(),
        HumanDuration(summary.processing_time)
    );
    if summary.records_skipped() > 0 {
        println!(
            "{} {} records skipped, rerun with -v for details",
            "Note:".yellow().bold(),
            summary.records_skipped()
        );
    }
}

fn print_json_summary(summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| StatsError::configuration(format!("Failed to serialize summary: {}", e)))?;
    println!("{}", json);
    Ok(())
}
