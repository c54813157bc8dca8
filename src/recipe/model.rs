//! Validated recipe structure and instruction resolution.

use super::loader::{LoadError, load};
use super::skip::SkipReason;
use crate::error::{BakeryError, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// A recipe whose three top-level sections have the right shape.
///
/// Individual entries are still raw JSON; they are checked one instruction at
/// a time by [`Recipe::resolve`].
#[derive(Debug, Clone)]
pub struct Recipe {
    ingredients: Map<String, Value>,
    utensils: Map<String, Value>,
    instructions: Vec<Value>,
}

/// An instruction whose utensil and ingredient were both found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInstruction {
    /// 1-based position in the recipe.
    pub number: usize,
    pub utensil: String,
    pub ingredient: String,
    /// Command template bound to the utensil.
    pub template: String,
    /// Target specifier bound to the ingredient.
    pub target: String,
}

/// Load and validate the recipe at `path`.
///
/// An unreadable file and an unparseable one both end up as
/// [`BakeryError::InvalidRoot`]; the message says which.
pub fn load_recipe(path: &Path) -> Result<Recipe> {
    let document = load(path).map_err(|e| invalid_root(path, &e))?;
    Recipe::from_document(document, path)
}

fn invalid_root(path: &Path, err: &LoadError) -> BakeryError {
    BakeryError::InvalidRoot {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

impl Recipe {
    /// Check the document shape, in order: object root, `ingredients` object,
    /// `utensils` object, `instructions` array.
    ///
    /// `path` is only used in the error message.
    pub fn from_document(document: Value, path: &Path) -> Result<Self> {
        let Value::Object(mut root) = document else {
            return Err(BakeryError::InvalidRoot {
                path: path.to_path_buf(),
                reason: "root is not an object".to_string(),
            });
        };

        let Some(Value::Object(ingredients)) = root.remove("ingredients") else {
            return Err(BakeryError::MissingIngredients);
        };

        let Some(Value::Object(utensils)) = root.remove("utensils") else {
            return Err(BakeryError::MissingUtensils);
        };

        let Some(Value::Array(instructions)) = root.remove("instructions") else {
            return Err(BakeryError::MissingInstructions);
        };

        Ok(Self {
            ingredients,
            utensils,
            instructions,
        })
    }

    /// Number of entries in the `instructions` array, valid or not.
    pub fn instruction_count(&self) -> usize {
        self.instructions.len()
    }

    /// Resolve the instruction at 0-based `index` to its template and target.
    ///
    /// An `index` past the end resolves as an invalid instruction.
    pub fn resolve(&self, index: usize) -> std::result::Result<ResolvedInstruction, SkipReason> {
        let number = index + 1;
        let invalid = || SkipReason::InvalidInstruction { number };

        let instruction = self
            .instructions
            .get(index)
            .and_then(Value::as_object)
            .ok_or_else(invalid)?;
        let utensil = instruction
            .get("run")
            .and_then(Value::as_str)
            .ok_or_else(invalid)?;
        let ingredient = instruction
            .get("on")
            .and_then(Value::as_str)
            .ok_or_else(invalid)?;

        let template = match self.utensils.get(utensil) {
            None => {
                return Err(SkipReason::MissingUtensil {
                    number,
                    utensil: utensil.to_string(),
                });
            }
            Some(Value::String(template)) => template,
            Some(_) => {
                return Err(SkipReason::InvalidUtensil {
                    number,
                    utensil: utensil.to_string(),
                });
            }
        };

        let target = match self.ingredients.get(ingredient) {
            None => {
                return Err(SkipReason::MissingIngredient {
                    number,
                    ingredient: ingredient.to_string(),
                });
            }
            Some(Value::String(target)) => target,
            Some(_) => {
                return Err(SkipReason::InvalidIngredient {
                    number,
                    ingredient: ingredient.to_string(),
                });
            }
        };

        Ok(ResolvedInstruction {
            number,
            utensil: utensil.to_string(),
            ingredient: ingredient.to_string(),
            template: template.clone(),
            target: target.clone(),
        })
    }

    /// Resolve every instruction in recipe order.
    pub fn resolve_all(
        &self,
    ) -> impl Iterator<Item = std::result::Result<ResolvedInstruction, SkipReason>> + '_ {
        (0..self.instructions.len()).map(|index| self.resolve(index))
    }
}
