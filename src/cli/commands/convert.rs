//! `convert` command: spreadsheet to JSON

use colored::*;
use tracing::debug;

use super::shared::setup_logging;
use crate::cli::args::ConvertArgs;
use crate::convert::convert_to_json;
use crate::error::Result;

/// Convert one file and report where it went
pub fn run_convert(args: ConvertArgs) -> Result<usize> {
    setup_logging(args.get_log_level(), args.quiet)?;
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let records = convert_to_json(&args.input, &args.output)?;

    if !args.quiet {
        println!(
            "{} {} records from {} to {}",
            "Converted".bright_green().bold(),
            records,
            args.input.display(),
            args.output.display().to_string().bright_cyan()
        );
    }
    Ok(records)
}
