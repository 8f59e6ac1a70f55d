//! Command-line argument definitions for tabular-stats
//!
//! Defines the CLI interface using the clap derive API. Every analysis
//! subcommand shares [`AnalyzeArgs`]; `convert` has its own arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::analyses::AnalysisKind;
use crate::config::ConfigOverrides;
use crate::error::{Result, StatsError};

/// Summary statistics from tabular data files
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tabular-stats",
    version,
    about = "Compute summary statistics from spreadsheet, CSV and JSON data files",
    long_about = "Reads tabular records from spreadsheet, delimited text or JSON files, skips \
                  records that fail validation, and writes a short plain-text report of \
                  extremes, averages and most frequent values for each analysis."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Highest and lowest grossing movies and average earnings
    BoxOffice(AnalyzeArgs),
    /// Most streamed track and most charted artist
    Streaming(AnalyzeArgs),
    /// Most wins, most appearances and average point spread
    Championship(AnalyzeArgs),
    /// Run every analysis in turn
    All(AnalyzeArgs),
    /// Convert a spreadsheet to a JSON array of records
    Convert(ConvertArgs),
}

impl Commands {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Commands::BoxOffice(_) => "box-office",
            Commands::Streaming(_) => "streaming",
            Commands::Championship(_) => "championship",
            Commands::All(_) => "all",
            Commands::Convert(_) => "convert",
        }
    }

    /// Analyses selected by this subcommand; empty for `convert`
    pub fn analyses(&self) -> Vec<AnalysisKind> {
        match self {
            Commands::BoxOffice(_) => vec![AnalysisKind::BoxOffice],
            Commands::Streaming(_) => vec![AnalysisKind::Streaming],
            Commands::Championship(_) => vec![AnalysisKind::Championship],
            Commands::All(_) => AnalysisKind::ALL.to_vec(),
            Commands::Convert(_) => Vec::new(),
        }
    }
}

/// Arguments shared by the analysis subcommands
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Folder containing the input files
    #[arg(
        short = 'i',
        long = "input-dir",
        value_name = "PATH",
        env = "TABULAR_STATS_INPUT_DIR",
        help = "Folder containing the input files"
    )]
    pub input_dir: Option<PathBuf>,

    /// Folder receiving the text reports
    ///
    /// Created if it doesn't exist.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "PATH",
        env = "TABULAR_STATS_OUTPUT_DIR",
        help = "Folder receiving the text reports"
    )]
    pub output_dir: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML file with folder and file name settings. If not specified,
    /// looks for ~/.config/tabular-stats/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        env = "TABULAR_STATS_CONFIG",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the run summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Spreadsheet (or any supported source) to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// JSON file to write
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format for the console summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Map `-v` count and `-q` to a tracing level
pub fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl AnalyzeArgs {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_dir) = &self.input_dir {
            if input_dir.exists() && !input_dir.is_dir() {
                return Err(StatsError::configuration(format!(
                    "Input path is not a directory: {}",
                    input_dir.display()
                )));
            }
        }

        if let Some(output_dir) = &self.output_dir {
            if output_dir.exists() && !output_dir.is_dir() {
                return Err(StatsError::configuration(format!(
                    "Output path is not a directory: {}",
                    output_dir.display()
                )));
            }
        }

        Ok(())
    }

    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }

    /// Folder overrides to layer over the configuration file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input_folder: self.input_dir.clone(),
            output_folder: self.output_dir.clone(),
        }
    }
}

impl ConvertArgs {
    pub fn validate(&self) -> Result<()> {
        if self.input == self.output {
            return Err(StatsError::configuration(format!(
                "Output would overwrite the input file: {}",
                self.input.display()
            )));
        }
        Ok(())
    }

    pub fn get_log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}
