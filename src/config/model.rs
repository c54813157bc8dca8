//! Config struct definition and default implementation.

use serde::Deserialize;

/// Configuration for a bakery run.
///
/// Every field is optional; an absent config file behaves like `Config::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Command interpreter used to run each concrete command, e.g. `"bash -eu -c"`.
    ///
    /// Split with shell-words; the concrete command is appended as the final
    /// argument. When unset the platform shell is used.
    pub shell: Option<String>,

    /// Seconds a single child process may run before it is killed.
    ///
    /// Unset means wait forever.
    pub timeout_seconds: Option<u64>,
}
