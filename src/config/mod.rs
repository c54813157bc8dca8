//! Run configuration for bakery.
//!
//! This module defines the Config struct that represents the optional YAML file
//! passed with `--config`. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), defaults for every field, and validation of values.

mod model;
mod operations;


// Re-export public API
pub use model::Config;
