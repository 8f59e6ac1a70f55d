use anyhow::Context;
use clap::Parser;
use std::process;
use tabular_stats::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let name = command.name();
    let result = commands::run(command).with_context(|| format!("'{}' command failed", name));

    match result {
        Ok(_summary) => {
            // Summary has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("tabular-stats - Summary statistics from tabular data files");
    println!("==========================================================");
    println!();
    println!("USAGE:");
    println!("    tabular-stats <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    box-office      Highest/lowest grossing movies and average earnings");
    println!("    streaming       Most streamed track and most charted artist");
    println!("    championship    Most wins, most appearances and average point spread");
    println!("    all             Run every analysis in turn");
    println!("    convert         Convert a spreadsheet to a JSON array of records");
    println!();
    println!("EXAMPLES:");
    println!("    # Run every analysis with the default folders:");
    println!("    tabular-stats all");
    println!();
    println!("    # Read from a custom folder and print the summary as JSON:");
    println!("    tabular-stats streaming --input-dir ./data --output-format json");
    println!();
    println!("    # Convert a workbook to JSON:");
    println!("    tabular-stats convert Super_Bowl_Data.xlsx fetched_data/super_bowl.json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    tabular-stats <COMMAND> --help");
}
