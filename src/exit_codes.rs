//! Exit code constants for the bakery CLI.
//!
//! - 0: Success (including `--help` and `--version`)
//! - 1: User error (bad arguments, invalid run configuration)
//! - 2: Recipe root is not a JSON object (or the file could not be read)
//! - 3: Recipe has no `ingredients` object
//! - 4: Recipe has no `utensils` object
//! - 5: Recipe has no `instructions` array
//!
//! Skipped instructions and failing child processes never change the exit code.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid run configuration.
pub const USER_ERROR: i32 = 1;

/// Recipe file is unreadable, unparseable, or its root is not an object.
pub const INVALID_ROOT: i32 = 2;

/// Recipe lacks an `ingredients` object.
pub const MISSING_INGREDIENTS: i32 = 3;

/// Recipe lacks a `utensils` object.
pub const MISSING_UTENSILS: i32 = 4;

/// Recipe lacks an `instructions` array.
pub const MISSING_INSTRUCTIONS: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            INVALID_ROOT,
            MISSING_INGREDIENTS,
            MISSING_UTENSILS,
            MISSING_INSTRUCTIONS,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn recipe_failures_are_small_and_nonzero() {
        for code in [
            INVALID_ROOT,
            MISSING_INGREDIENTS,
            MISSING_UTENSILS,
            MISSING_INSTRUCTIONS,
        ] {
            assert!(code > 0 && code < 16);
        }
    }
}
