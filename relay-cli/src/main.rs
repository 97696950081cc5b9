//! Entry point for the `relay` binary.
#![forbid(unsafe_code)]

use env_logger::Env;
use relay_cli::{CliError, run};

fn main() -> eyre::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    match run() {
        Ok(()) => Ok(()),
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => Err(err.into()),
    }
}
