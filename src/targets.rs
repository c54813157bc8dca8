//! Resolving an ingredient's target specifier to a list of files.
//!
//! A specifier containing `*` is a space-separated list of file name patterns
//! matched against the working directory. Anything else names a directory whose
//! files (not subdirectories, not recursive) form the match set.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Classified target specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
    /// File name patterns, matched against the working directory.
    Glob(Vec<String>),
    /// Directory whose regular files are matched.
    Directory(String),
}

/// A file selected by a target specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFile {
    /// Bare file name, e.g. `a.txt`.
    pub name: String,
    /// Path handed to commands: the bare name for globs, `target/name` for directories.
    pub reference: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("directory '{path}' does not exist or is not accessible")]
    MissingDirectory { path: String },

    #[error("failed to list working directory: {reason}")]
    Unlistable { reason: String },
}

impl TargetSpec {
    pub fn parse(spec: &str) -> Self {
        if is_glob(spec) {
            // Repeated spaces yield empty patterns; they never match anything.
            let patterns = spec
                .split(' ')
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect();
            TargetSpec::Glob(patterns)
        } else {
            TargetSpec::Directory(spec.to_string())
        }
    }

    /// List the files this specifier selects, relative to `base`.
    ///
    /// Entries are sorted by name. Hidden files and directories are never matched.
    pub fn resolve(&self, base: &Path) -> Result<Vec<MatchedFile>, TargetError> {
        match self {
            TargetSpec::Glob(patterns) => {
                let globs = build_globset(patterns)?;
                let names = list_files(base).map_err(|e| TargetError::Unlistable {
                    reason: e.to_string(),
                })?;

                Ok(names
                    .into_iter()
                    .filter(|name| globs.is_match(name))
                    .map(|name| MatchedFile {
                        reference: name.clone(),
                        name,
                    })
                    .collect())
            }
            TargetSpec::Directory(target) => {
                let missing = || TargetError::MissingDirectory {
                    path: target.clone(),
                };
                let dir = base.join(target);
                if !dir.is_dir() {
                    return Err(missing());
                }
                let names = list_files(&dir).map_err(|_| missing())?;

                Ok(names
                    .into_iter()
                    .map(|name| MatchedFile {
                        reference: format!("{}/{}", target, name),
                        name,
                    })
                    .collect())
            }
        }
    }
}

/// Whether a specifier selects files by pattern rather than by directory.
pub fn is_glob(spec: &str) -> bool {
    spec.contains('*')
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, TargetError> {
    let invalid = |pattern: &str, e: globset::Error| TargetError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.kind().to_string(),
    };

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(true)
            .literal_separator(true)
            .build()
            .map_err(|e| invalid(pattern, e))?;
        builder.add(glob);
    }

    builder.build().map_err(|e| TargetError::InvalidPattern {
        pattern: patterns.join(" "),
        reason: e.kind().to_string(),
    })
}

/// Names of the visible regular files directly inside `dir`, sorted.
///
/// Symlinks count when they point at a regular file. Names that are not valid
/// UTF-8 cannot be substituted into a command and are left out.
fn list_files(dir: &Path) -> std::io::Result<Vec<String>> {
    let entries = std::fs::read_dir(dir)?.map(|entry| {
        entry.map(|entry| {
            let path = entry.path();
            let is_file = std::fs::metadata(&path)
                .map(|m| m.is_file())
                .unwrap_or(false);
            (path, is_file)
        })
    });

    Ok(visible_files(entries))
}

/// Keep the visible regular files out of `(path, is_file)` entries, sorted by name.
///
/// An entry that could not be read is logged and left out; the rest still count.
fn visible_files<I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = std::io::Result<(PathBuf, bool)>>,
{
    let mut names = Vec::new();

    for entry in entries {
        let (path, is_file) = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::debug!(path = %path.display(), "skipping non UTF-8 file name");
            continue;
        };
        if is_file && !name.starts_with('.') {
            names.push(name.to_string());
        }
    }

    names.sort();
    names
}
