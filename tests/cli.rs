//! End-to-end checks of the `bakery` binary: exit codes and stream contracts.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn bakery(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bakery"))
        .current_dir(dir)
        .args(args)
        .env("SHELL", "/bin/sh")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bakery binary")
}

fn write(dir: &Path, name: &str, contents: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn version_prints_name_and_version() {
    let temp = TempDir::new().unwrap();
    let output = bakery(temp.path(), &["--version"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), format!("bakery {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_succeeds() {
    let temp = TempDir::new().unwrap();
    let output = bakery(temp.path(), &["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn missing_recipe_argument_exits_one_with_usage() {
    let temp = TempDir::new().unwrap();
    let output = bakery(temp.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("Usage:"));
}

#[test]
fn structural_failures_have_distinct_exit_codes() {
    let temp = TempDir::new().unwrap();
    let cases = [
        ("not-json.json", "{ nope", 2),
        ("array.json", "[]", 2),
        ("no-ingredients.json", r#"{ "utensils": {}, "instructions": [] }"#, 3),
        ("no-utensils.json", r#"{ "ingredients": {}, "instructions": [] }"#, 4),
        ("no-instructions.json", r#"{ "ingredients": {}, "utensils": {} }"#, 5),
    ];

    for (name, body, code) in cases {
        write(temp.path(), name, body);
        let output = bakery(temp.path(), &[name]);

        assert_eq!(output.status.code(), Some(code), "recipe {}", name);
        assert!(output.stdout.is_empty(), "recipe {}", name);
        assert_eq!(stderr(&output).lines().count(), 1, "recipe {}", name);
    }

    let output = bakery(temp.path(), &["absent.json"]);
    assert_eq!(output.status.code(), Some(2));
}

#[cfg(unix)]
#[test]
fn runs_recipe_and_reports_skips_without_failing() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "build/out/a.txt", "");
    write(temp.path(), "build/out/b.txt", "");
    write(
        temp.path(),
        "recipe.json",
        r#"{
            "ingredients": { "src": "build/out", "ghost": "missing" },
            "utensils": { "echo": "echo %n:%i" },
            "instructions": [
                { "run": "echo", "on": "ghost" },
                { "run": "echo", "on": "src" }
            ]
        }"#,
    );

    let output = bakery(temp.path(), &["recipe.json"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Instruction: echo a:build/out/a.txt\na:build/out/a.txt\n\
         Instruction: echo b:build/out/b.txt\nb:build/out/b.txt\n"
    );
    assert_eq!(
        stderr(&output),
        "Warning: Missing directory missing required for ingredient ghost (instruction 1). Skipping current instruction\n"
    );
}

#[cfg(unix)]
#[test]
fn invalid_config_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "bakery.yaml", "timeout_seconds: 0\n");
    write(
        temp.path(),
        "recipe.json",
        r#"{ "ingredients": {}, "utensils": {}, "instructions": [] }"#,
    );

    let output = bakery(temp.path(), &["--config", "bakery.yaml", "recipe.json"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("timeout_seconds"));
}
