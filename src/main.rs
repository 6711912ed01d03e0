use clap::Parser;
use emissions_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    if let Err(error) = commands::run(args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Emissions Processor - Greenhouse-Gas Spreadsheet to JSON Converter");
    println!("==================================================================");
    println!();
    println!("Turn corporate greenhouse-gas spreadsheet exports (CSV) into the");
    println!("normalized JSON datasets read by the presentation layer.");
    println!();
    println!("USAGE:");
    println!("    emissions-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Transform raw CSV exports into JSON artifacts (main command)");
    println!("    analyze     Report regional coverage of company emissions");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Build every artifact from ./raw-data into ./app/assets/data:");
    println!("    emissions-processor process");
    println!();
    println!("    # Build selected artifacts with custom paths:");
    println!("    emissions-processor process --input /path/to/raw-data --output /path/to/data \\");
    println!("                                --artifacts company-list,fund-list");
    println!();
    println!("    # Check inputs without writing anything:");
    println!("    emissions-processor process --dry-run");
    println!();
    println!("    # Regional coverage of the 20 largest emitters as JSON:");
    println!("    emissions-processor analyze --top 20 --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    emissions-processor <COMMAND> --help");
}
