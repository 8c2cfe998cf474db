//! CLI module for Tilepad.
//!
//! Parses the command line, sets up logging and runs the selected command on
//! a current-thread tokio runtime.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::TilepadResult;
use crate::logging;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the runtime cannot start or the command fails.
pub fn run() -> TilepadResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    runtime.block_on(cli.execute())
}
