use clap::Parser;
use ndbc_extractor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_report) => {
            // Success - results have already been printed by the command.
            // Absence of an observation is not an error.
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("NDBC Extractor - Buoy Observation Parser");
    println!("========================================");
    println!();
    println!("Extract sea-surface temperature, significant wave height, and an");
    println!("observation timestamp from NDBC buoy text feeds.");
    println!();
    println!("USAGE:");
    println!("    ndbc-extractor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    extract     Extract observations from feed files (main command)");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse both feed layouts for a station:");
    println!("    ndbc-extractor extract --tabular 45161.txt --freeform 45161.spec.txt");
    println!();
    println!("    # Emit JSON for scripting:");
    println!("    ndbc-extractor extract --tabular 45161.txt --output-format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    ndbc-extractor extract --help");
}
