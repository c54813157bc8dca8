//! Child process execution through the platform shell.
//!
//! Runs one concrete command at a time, blocking until it exits, with optional
//! timeout and combined output capture.

use crate::config::Config;
use crate::error::{BakeryError, Result};
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

/// Command interpreter used to run concrete commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    program: String,
    args: Vec<String>,
}

/// What a finished child process left behind.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Captured stdout followed by captured stderr.
    pub output: String,
    /// Exit code of the process (None if killed or terminated by a signal).
    pub exit_code: Option<i32>,
    /// Whether the process was killed due to timeout.
    pub timed_out: bool,
}

impl Shell {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The host's default interpreter: `cmd /C` on Windows, `$SHELL -c` elsewhere
    /// (falling back to `/bin/sh` when `$SHELL` is unset).
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            return Self::new("cmd", ["/C"]);
        }

        let program = std::env::var("SHELL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "/bin/sh".to_string());
        Self::new(program, ["-c"])
    }

    /// The shell named in `config`, or the platform default.
    pub fn from_config(config: &Config) -> Result<Self> {
        let Some(shell) = &config.shell else {
            return Ok(Self::platform_default());
        };

        let mut words = shell_words::split(shell).map_err(|e| {
            BakeryError::Config(format!("failed to parse shell '{}': {}", shell, e))
        })?;
        if words.is_empty() {
            return Err(BakeryError::Config("shell must not be empty".to_string()));
        }

        let program = words.remove(0);
        Ok(Self {
            program,
            args: words,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, concrete: &str, workdir: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .current_dir(workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        // cmd.exe does its own parsing; hand it the command line untouched.
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            command.raw_arg(concrete);
        }
        #[cfg(not(windows))]
        {
            command.arg(concrete);
        }

        command
    }

    /// Run `concrete` in `workdir` and wait for it to finish.
    ///
    /// With `timeout`, the child is killed once it has run that long and
    /// whatever it printed so far is returned. Errors only when the shell
    /// itself cannot be started.
    pub fn run(
        &self,
        concrete: &str,
        workdir: &Path,
        timeout: Option<Duration>,
    ) -> std::io::Result<ProcessOutput> {
        let mut command = self.command(concrete, workdir);

        let Some(timeout) = timeout else {
            let output = command.output()?;
            return Ok(ProcessOutput {
                output: combine(&output.stdout, &output.stderr),
                exit_code: output.status.code(),
                timed_out: false,
            });
        };

        let mut child = command.spawn()?;
        // Drain both pipes while waiting so a chatty child cannot block on a full pipe.
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let (exit_code, timed_out) = wait_with_timeout(&mut child, timeout)?;

        // After a kill, processes the shell started may still hold the pipes
        // open; take what was read so far and leave the drain threads behind.
        let (stdout, stderr) = if timed_out {
            (snapshot(stdout.as_ref()), snapshot(stderr.as_ref()))
        } else {
            (join(stdout), join(stderr))
        };

        Ok(ProcessOutput {
            output: combine(&stdout, &stderr),
            exit_code,
            timed_out,
        })
    }
}

/// Wait for a child process with timeout.
///
/// Returns (exit_code, timed_out).
fn wait_with_timeout(
    child: &mut Child,
    timeout: Duration,
) -> std::io::Result<(Option<i32>, bool)> {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(20);

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok((status.code(), false));
        }
        if start.elapsed() >= timeout {
            // On Unix this is SIGKILL; on Windows it is TerminateProcess.
            let _ = child.kill();
            let _ = child.wait();
            return Ok((None, true));
        }
        std::thread::sleep(poll_interval);
    }
}

/// Bytes read from a pipe so far, shared with the thread reading it.
type Captured = Arc<Mutex<Vec<u8>>>;

fn drain<R: Read + Send + 'static>(mut pipe: R) -> (Captured, JoinHandle<()>) {
    let captured = Captured::default();
    let sink = Arc::clone(&captured);

    let handle = std::thread::spawn(move || {
        let mut chunk = [0u8; 8192];
        loop {
            match pipe.read(&mut chunk) {
                Ok(0) | Err(_) => break,
                Ok(n) => lock(&sink).extend_from_slice(&chunk[..n]),
            }
        }
    });

    (captured, handle)
}

fn lock(captured: &Captured) -> std::sync::MutexGuard<'_, Vec<u8>> {
    captured.lock().unwrap_or_else(|poison| poison.into_inner())
}

fn join(drained: Option<(Captured, JoinHandle<()>)>) -> Vec<u8> {
    let Some((captured, handle)) = drained else {
        return Vec::new();
    };
    let _ = handle.join();
    std::mem::take(&mut *lock(&captured))
}

fn snapshot(drained: Option<&(Captured, JoinHandle<()>)>) -> Vec<u8> {
    drained
        .map(|(captured, _)| lock(captured).clone())
        .unwrap_or_default()
}

fn combine(stdout: &[u8], stderr: &[u8]) -> String {
    let mut combined = String::from_utf8_lossy(stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(stderr));
    combined
}
