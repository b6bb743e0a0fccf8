//! kireji command-line entry point

use clap::Parser;
use kireji_cli::commands::Commands;
use kireji_cli::CliError;
use kireji_core::NON_HAIKU_MESSAGE;
use std::process::ExitCode;

/// Haiku validation using CMU pronunciation data
#[derive(Debug, Parser)]
#[command(name = "kireji", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(CliError::Rejected { .. }) = e.downcast_ref::<CliError>() {
                eprintln!("{NON_HAIKU_MESSAGE}");
            }
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
