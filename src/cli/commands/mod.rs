//! Command implementations for the tabular-stats CLI
//!
//! Each command lives in its own module:
//! - `analyze`: the analysis subcommands, including `all`
//! - `convert`: spreadsheet to JSON conversion

pub mod analyze;
pub mod convert;
pub mod shared;

pub use shared::RunSummary;

use crate::cli::args::Commands;
use crate::error::Result;

/// Dispatch to the subcommand handler
///
/// `convert` reports no analyses, so its summary is empty.
pub fn run(command: Commands) -> Result<RunSummary> {
    let kinds = command.analyses();
    match command {
        Commands::BoxOffice(args)
        | Commands::Streaming(args)
        | Commands::Championship(args)
        | Commands::All(args) => analyze::run_analyses(&kinds, args),
        Commands::Convert(args) => {
            convert::run_convert(args)?;
            Ok(RunSummary::default())
        }
    }
}
