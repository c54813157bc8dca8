//! Placeholder substitution for utensil command templates.
//!
//! # Syntax
//!
//! - `%i` - the matched file reference (`target/name` for directory ingredients)
//! - `%n` - the bare file name with its last extension removed
//!
//! Any other `%` is copied through unchanged. Substitution is a single pass:
//! text inserted for one placeholder is never scanned again, so a file called
//! `%n.txt` cannot trigger a second substitution.

use crate::targets::MatchedFile;

/// Build the concrete command for one matched file.
pub fn render_command(template: &str, file: &MatchedFile) -> String {
    let stem = strip_extension(&file.name);
    let mut result = String::with_capacity(template.len() + file.reference.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            result.push(ch);
            continue;
        }
        match chars.peek() {
            Some('i') => {
                chars.next();
                result.push_str(&file.reference);
            }
            Some('n') => {
                chars.next();
                result.push_str(stem);
            }
            _ => result.push('%'),
        }
    }

    result
}

/// Everything before the last `.`, or the whole name if there is none.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) => &name[..pos],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, reference: &str) -> MatchedFile {
        MatchedFile {
            name: name.to_string(),
            reference: reference.to_string(),
        }
    }

    #[test]
    fn test_directory_file_substitution() {
        let a = file("a.txt", "build/out/a.txt");
        assert_eq!(render_command("echo %n:%i", &a), "echo a:build/out/a.txt");
    }

    #[test]
    fn test_glob_file_substitution() {
        let logo = file("logo.png", "logo.png");
        assert_eq!(
            render_command("convert %i %n.webp", &logo),
            "convert logo.png logo.webp"
        );
    }

    #[test]
    fn test_every_occurrence_is_replaced() {
        let f = file("main.c", "src/main.c");
        assert_eq!(
            render_command("%n %n %i %i", &f),
            "main main src/main.c src/main.c"
        );
    }

    #[test]
    fn test_no_placeholders() {
        let f = file("x.txt", "x.txt");
        assert_eq!(render_command("make all", &f), "make all");
        assert_eq!(render_command("", &f), "");
    }

    #[test]
    fn test_other_percent_sequences_are_kept() {
        let f = file("x.txt", "x.txt");
        assert_eq!(render_command("date +%Y %", &f), "date +%Y %");
        assert_eq!(render_command("100%%i", &f), "100%x.txt");
    }

    #[test]
    fn test_substituted_text_is_not_rescanned() {
        let tricky = file("%i.%n", "dir/%i.%n");
        assert_eq!(render_command("[%n] [%i]", &tricky), "[%i] [dir/%i.%n]");
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let f = file("a.tar.gz", "pkgs/a.tar.gz");
        let first = render_command("tar -xf %i -C %n", &f);
        let second = render_command("tar -xf %i -C %n", &f);
        assert_eq!(first, second);
        assert_eq!(first, "tar -xf pkgs/a.tar.gz -C a.tar");
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("a.txt"), "a");
        assert_eq!(strip_extension("a.tar.gz"), "a.tar");
        assert_eq!(strip_extension("Makefile"), "Makefile");
        assert_eq!(strip_extension("trailing."), "trailing");
    }
}
