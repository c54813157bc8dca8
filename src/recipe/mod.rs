//! Recipe loading, validation, and instruction resolution.
//!
//! A recipe is a JSON document with three sections:
//!
//! ```json
//! {
//!   "ingredients": { "sources": "src" },
//!   "utensils": { "compile": "cc -c %i -o %n.o" },
//!   "instructions": [ { "run": "compile", "on": "sources" } ]
//! }
//! ```
//!
//! Missing or mistyped sections are fatal. Problems with a single instruction
//! are reported as a [`SkipReason`] and do not affect the others.

mod loader;
mod model;
mod skip;


pub use loader::{LoadError, load};
pub use model::{Recipe, ResolvedInstruction, load_recipe};
pub use skip::SkipReason;
