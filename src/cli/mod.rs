//! CLI argument parsing for bakery.
//!
//! Uses clap derive macros for declarative argument definitions. Parse
//! failures are reported here so the process exit code stays under our
//! control rather than clap's.

use crate::exit_codes;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Automates repetitive build steps from a JSON-based instruction set.
///
/// A recipe names ingredients (a directory, or space-separated file name
/// patterns containing `*`), utensils (command templates using `%i` for the
/// matched file and `%n` for its name without extension), and instructions
/// pairing the two. Every instruction runs its utensil once per matched file.
#[derive(Parser, Debug)]
#[command(name = "bakery")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// JSON recipe file to use.
    pub recipe: PathBuf,

    /// YAML run configuration (shell, timeout_seconds).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse process arguments.
    ///
    /// On `--help`/`--version` or a parse error the message is printed and the
    /// exit code to terminate with is returned instead.
    pub fn parse_args() -> Result<Self, i32> {
        Self::try_parse().map_err(report_parse_error)
    }
}

/// Print a clap error or help/version text and return the matching exit code.
///
/// Help and version go to stdout and count as success; anything else goes to
/// stderr together with usage and is a user error.
pub fn report_parse_error(err: clap::Error) -> i32 {
    let _ = err.print();

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
        _ => exit_codes::USER_ERROR,
    }
}
