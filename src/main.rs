use clap::Parser;
use noaa_events::cli::{args::Args, commands};
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
        Ok(_stats) => {
            // Success - output has already been printed by the command
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
    println!("noaa-events - NOAA/SWPC Solar Event Report Parser");
    println!("=================================================");
    println!();
    println!("Parse daily <yyyy><mm><dd>events.txt reports into structured records,");
    println!("checking active region numbers against the previous day's report.");
    println!();
    println!("USAGE:");
    println!("    noaa-events <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse one day's report and print its records");
    println!("    regions     List events and active regions inside a time window");
    println!("    convert     Convert reports to a single CSV or Parquet file");
    println!("    scan        List the reports available in the reports directory");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -d, --dir <PATH>    Reports directory (or NOAA_EVENTS_REPORTS_DIR)");
    println!("    -v, --verbose       Increase logging verbosity");
    println!("    -q, --quiet         Only show errors");
    println!("    -h, --help          Show help information");
    println!("    -V, --version       Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Print the records for 9 April 2002:");
    println!("    noaa-events parse 2002 4 9 --dir /data/swpc/events");
    println!();
    println!("    # Active regions during a flare window:");
    println!("    noaa-events regions 2002 4 9 --from \"2002-04-09 12:44:43\" \\");
    println!("                                 --to \"2002-04-09 13:09:58\"");
    println!();
    println!("    # Convert April 2002 to CSV:");
    println!("    noaa-events convert --from-date 2002-04-01 --to-date 2002-04-30 --format csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    noaa-events <COMMAND> --help");
}
