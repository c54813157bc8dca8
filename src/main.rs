//! Bakery: automates repetitive build steps from a JSON-based instruction set.
//!
//! This is the main entry point for the `bakery` CLI. It parses arguments,
//! runs the recipe, and maps fatal errors to exit codes.

mod bake;
mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod exit_codes;
mod logging;
pub mod recipe;
pub mod targets;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(code) => return ExitCode::from(code as u8),
    };

    logging::init_logging(cli.verbose);

    match bake::cmd_bake(&cli) {
        Ok(_) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
