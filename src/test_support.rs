use crate::executor::Shell;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a scratch directory holding the given files.
///
/// Parent directories are created as needed; each file contains its own path.
pub(crate) fn create_kitchen(files: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    for file in files {
        let path = temp_dir.path().join(file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, format!("{}\n", file)).unwrap();
    }

    temp_dir
}

/// Write `json` as `recipe.json` inside `dir`.
pub(crate) fn write_recipe(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("recipe.json");
    std::fs::write(&path, json).unwrap();
    path
}

/// A POSIX shell that does not depend on the caller's `$SHELL`.
#[cfg(unix)]
pub(crate) fn posix_shell() -> Shell {
    Shell::new("/bin/sh", ["-c"])
}
