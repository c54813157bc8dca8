//! Instruction execution.
//!
//! Walks a recipe's instructions in order. Each resolved instruction expands to
//! one concrete command per matched file; commands run one at a time and each
//! finishes before the next starts, so output is never interleaved.

mod process;


pub use process::Shell;

use crate::config::Config;
use crate::error::Result;
use crate::recipe::{Recipe, ResolvedInstruction, SkipReason};
use crate::targets::{TargetError, TargetSpec};
use crate::template::render_command;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// Where and how concrete commands run.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    /// Directory glob ingredients are matched in and commands run from.
    pub workdir: PathBuf,
    pub shell: Shell,
    /// None waits for each child indefinitely.
    pub timeout: Option<Duration>,
}

/// What happened to one instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstructionStatus {
    /// Concrete commands that were started, in execution order.
    Executed(Vec<String>),
    Skipped(SkipReason),
}

/// Per-instruction outcomes of a whole run, in recipe order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub outcomes: Vec<InstructionStatus>,
}

impl RunReport {
    pub fn executed_instructions(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, InstructionStatus::Executed(_)))
            .count()
    }

    pub fn skipped_instructions(&self) -> usize {
        self.outcomes.len() - self.executed_instructions()
    }

    /// Total number of concrete commands started.
    pub fn commands_run(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o {
                InstructionStatus::Executed(commands) => commands.len(),
                InstructionStatus::Skipped(_) => 0,
            })
            .sum()
    }
}

impl ExecutionContext {
    /// Context rooted at `workdir` using the shell and timeout from `config`.
    pub fn from_config(config: &Config, workdir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            workdir: workdir.into(),
            shell: Shell::from_config(config)?,
            timeout: config.timeout(),
        })
    }
}

/// Execute every instruction of `recipe`.
///
/// Command records go to `out`, one warning line per skipped instruction or
/// failed spawn goes to `diag`. Only a failure to write to either stream is an
/// error; everything else is reported and the run continues.
pub fn run(
    recipe: &Recipe,
    ctx: &ExecutionContext,
    out: &mut dyn Write,
    diag: &mut dyn Write,
) -> Result<RunReport> {
    let mut report = RunReport::default();

    for resolved in recipe.resolve_all() {
        let status = match resolved {
            Ok(instruction) => execute_instruction(&instruction, ctx, out, diag)?,
            Err(reason) => InstructionStatus::Skipped(reason),
        };

        if let InstructionStatus::Skipped(reason) = &status {
            tracing::debug!(instruction = reason.number(), "instruction skipped");
            writeln!(diag, "Warning: {}", reason)?;
        }

        report.outcomes.push(status);
    }

    Ok(report)
}

/// Expand one instruction over its matched files and run each command.
pub fn execute_instruction(
    instruction: &ResolvedInstruction,
    ctx: &ExecutionContext,
    out: &mut dyn Write,
    diag: &mut dyn Write,
) -> Result<InstructionStatus> {
    let spec = TargetSpec::parse(&instruction.target);
    let files = match spec.resolve(&ctx.workdir) {
        Ok(files) => files,
        Err(err) => return Ok(InstructionStatus::Skipped(skip_reason(instruction, err))),
    };

    tracing::debug!(
        instruction = instruction.number,
        utensil = %instruction.utensil,
        ingredient = %instruction.ingredient,
        files = files.len(),
        "expanding instruction"
    );

    let mut commands = Vec::with_capacity(files.len());
    for file in &files {
        let concrete = render_command(&instruction.template, file);
        if run_concrete(&concrete, ctx, out, diag)? {
            commands.push(concrete);
        }
    }

    Ok(InstructionStatus::Executed(commands))
}

/// Returns whether the command could be started at all.
fn run_concrete(
    concrete: &str,
    ctx: &ExecutionContext,
    out: &mut dyn Write,
    diag: &mut dyn Write,
) -> Result<bool> {
    tracing::debug!(command = %concrete, shell = %ctx.shell.program(), "spawning");

    let result = match ctx.shell.run(concrete, &ctx.workdir, ctx.timeout) {
        Ok(result) => result,
        Err(e) => {
            writeln!(diag, "Warning: failed to run '{}': {}", concrete, e)?;
            return Ok(false);
        }
    };

    tracing::debug!(exit_code = ?result.exit_code, timed_out = result.timed_out, "child exited");

    write_record(out, concrete, &result.output)?;

    if result.timed_out {
        let seconds = ctx.timeout.map(|t| t.as_secs_f64()).unwrap_or_default();
        writeln!(
            diag,
            "Warning: '{}' timed out after {}s and was killed",
            concrete, seconds
        )?;
    }

    Ok(true)
}

/// Write one `Instruction: <command>` record followed by its output.
fn write_record(out: &mut dyn Write, concrete: &str, output: &str) -> Result<()> {
    writeln!(out, "Instruction: {}", concrete)?;
    out.write_all(output.as_bytes())?;
    if !output.is_empty() && !output.ends_with('\n') {
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn skip_reason(instruction: &ResolvedInstruction, err: TargetError) -> SkipReason {
    let number = instruction.number;
    let ingredient = instruction.ingredient.clone();

    match err {
        TargetError::InvalidPattern { pattern, reason } => SkipReason::InvalidPattern {
            number,
            ingredient,
            pattern,
            reason,
        },
        TargetError::MissingDirectory { path } => SkipReason::MissingDirectory {
            number,
            target: path,
            ingredient,
        },
        TargetError::Unlistable { reason } => SkipReason::UnreadableDirectory {
            number,
            ingredient,
            reason,
        },
    }
}
