//! Recoverable, per-instruction failures.

use thiserror::Error;

/// Reason an instruction was skipped.
///
/// `number` is always the 1-based position of the instruction in the recipe.
/// Each variant renders as a single diagnostic line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Not an object, or `run`/`on` missing or not strings.
    #[error("Instruction {number} is invalid. Skipping")]
    InvalidInstruction { number: usize },

    #[error("Missing utensil {utensil} (instruction {number}). Skipping current instruction")]
    MissingUtensil { number: usize, utensil: String },

    #[error("Missing ingredient {ingredient} (instruction {number}). Skipping current instruction")]
    MissingIngredient { number: usize, ingredient: String },

    /// The utensil exists but its command template is not a string.
    #[error("Utensil {utensil} is not a command string (instruction {number}). Skipping current instruction")]
    InvalidUtensil { number: usize, utensil: String },

    /// The ingredient exists but its target specifier is not a string.
    #[error("Ingredient {ingredient} is not a target string (instruction {number}). Skipping current instruction")]
    InvalidIngredient { number: usize, ingredient: String },

    #[error("Invalid pattern {pattern} in ingredient {ingredient}: {reason} (instruction {number}). Skipping current instruction")]
    InvalidPattern {
        number: usize,
        ingredient: String,
        pattern: String,
        reason: String,
    },

    #[error("Missing directory {target} required for ingredient {ingredient} (instruction {number}). Skipping current instruction")]
    MissingDirectory {
        number: usize,
        target: String,
        ingredient: String,
    },

    /// The working directory could not be listed for a glob ingredient.
    #[error("Cannot list working directory for ingredient {ingredient}: {reason} (instruction {number}). Skipping current instruction")]
    UnreadableDirectory {
        number: usize,
        ingredient: String,
        reason: String,
    },
}

impl SkipReason {
    /// 1-based index of the skipped instruction.
    pub fn number(&self) -> usize {
        match self {
            SkipReason::InvalidInstruction { number }
            | SkipReason::MissingUtensil { number, .. }
            | SkipReason::MissingIngredient { number, .. }
            | SkipReason::InvalidUtensil { number, .. }
            | SkipReason::InvalidIngredient { number, .. }
            | SkipReason::InvalidPattern { number, .. }
            | SkipReason::MissingDirectory { number, .. }
            | SkipReason::UnreadableDirectory { number, .. } => *number,
        }
    }
}
