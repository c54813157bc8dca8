//! The `bakery <recipe>` run: configuration, recipe validation, execution.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::executor::{self, ExecutionContext, RunReport};
use crate::recipe::load_recipe;
use std::path::Path;

/// Load everything `cli` points at and execute the recipe against the
/// current working directory, writing to stdout/stderr.
pub fn cmd_bake(cli: &Cli) -> Result<RunReport> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let workdir = std::env::current_dir()?;
    let ctx = ExecutionContext::from_config(&config, workdir)?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    bake(&cli.recipe, &ctx, &mut stdout.lock(), &mut stderr.lock())
}

/// Validate the recipe at `recipe_path` and run it in `ctx`.
///
/// Nothing executes unless the whole recipe structure is valid.
pub fn bake(
    recipe_path: &Path,
    ctx: &ExecutionContext,
    out: &mut dyn std::io::Write,
    diag: &mut dyn std::io::Write,
) -> Result<RunReport> {
    tracing::debug!(recipe = %recipe_path.display(), "loading recipe");
    let recipe = load_recipe(recipe_path)?;
    tracing::debug!(instructions = recipe.instruction_count(), "recipe is well-formed");

    let report = executor::run(&recipe, ctx, out, diag)?;

    tracing::info!(
        instructions = report.outcomes.len(),
        executed = report.executed_instructions(),
        skipped = report.skipped_instructions(),
        commands = report.commands_run(),
        "recipe finished"
    );

    Ok(report)
}
