//! Command-line interface for the Relay booking relocation minimiser.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod solve;

pub use error::CliError;

use solve::{SolveArgs, run_solve};

const ARG_INPUT: &str = "input";
const ARG_OUTPUT: &str = "output";
const ARG_STRATEGY: &str = "strategy";
const ARG_TIME_LIMIT_MS: &str = "time-limit-ms";

/// Run the Relay CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when argument parsing, configuration layering,
/// reading the bookings or writing the result fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => {
            run_solve(args)?;
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "relay",
    about = "Order bookings to minimise vehicle relocations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the booking order with the fewest relocations.
    Solve(SolveArgs),
}

#[cfg(test)]
mod tests;
