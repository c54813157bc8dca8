//! Error types for the bakery CLI.
//!
//! Uses thiserror for derive macros. Every variant here is fatal: it aborts the
//! run before any instruction executes. Per-instruction problems are modelled
//! separately as [`crate::recipe::SkipReason`].

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bakery operations.
#[derive(Error, Debug)]
pub enum BakeryError {
    /// The recipe file could not be read, could not be parsed, or its root is not an object.
    #[error("Invalid JSON object defined by {}: {reason}. Aborting.", .path.display())]
    InvalidRoot { path: PathBuf, reason: String },

    #[error("Missing ingredients object. Aborting.")]
    MissingIngredients,

    #[error("Missing utensils object. Aborting.")]
    MissingUtensils,

    #[error("Missing instructions array. Aborting.")]
    MissingInstructions,

    /// The run configuration file is unreadable or holds invalid values.
    #[error("{0}")]
    Config(String),

    /// Writing results to the output stream failed.
    #[error("failed to write output: {0}")]
    Io(String),
}

impl BakeryError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BakeryError::InvalidRoot { .. } => exit_codes::INVALID_ROOT,
            BakeryError::MissingIngredients => exit_codes::MISSING_INGREDIENTS,
            BakeryError::MissingUtensils => exit_codes::MISSING_UTENSILS,
            BakeryError::MissingInstructions => exit_codes::MISSING_INSTRUCTIONS,
            BakeryError::Config(_) => exit_codes::USER_ERROR,
            BakeryError::Io(_) => exit_codes::USER_ERROR,
        }
    }
}

impl From<std::io::Error> for BakeryError {
    fn from(err: std::io::Error) -> Self {
        BakeryError::Io(err.to_string())
    }
}

/// Result type alias for bakery operations.
pub type Result<T> = std::result::Result<T, BakeryError>;
