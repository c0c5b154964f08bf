//! netcost - annual cost comparison for warehouse networks.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Annual cost comparison for multi-warehouse supply networks.
#[derive(Parser, Debug)]
#[command(name = "netcost")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Show verbose output (debug-level tracing on stderr)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a scenario file and print diagnostics
    Check(netcost::cmd::check::Args),
    /// Run every cost calculator and print the annual report
    Report(netcost::cmd::report_cmd::Args),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive(LevelFilter::DEBUG.into()))
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match &cli.command {
        Command::Check(args) => netcost::cmd::check::run(args),
        Command::Report(args) => netcost::cmd::report_cmd::run(args),
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
