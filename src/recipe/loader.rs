//! Reading a recipe file into a generic JSON document.

use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Why a recipe file did not produce a document.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file could not be opened ({0})")]
    Unreadable(#[source] std::io::Error),

    #[error("file is not valid JSON ({0})")]
    Malformed(#[source] serde_json::Error),
}

/// Read and parse the file at `path`.
///
/// No structural checks happen here; any JSON value (including a bare array
/// or string) is returned as-is for the validator to reject.
pub fn load(path: &Path) -> Result<Value, LoadError> {
    let content = std::fs::read(path).map_err(LoadError::Unreadable)?;
    serde_json::from_slice(&content).map_err(LoadError::Malformed)
}
