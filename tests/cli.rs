//! CLI smoke tests
//!
//! The TUI itself needs a terminal, so these only exercise the argument
//! surface.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_describes_the_tool() {
    Command::cargo_bin("spendlog")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("expense tracker"))
        .stdout(predicate::str::contains("--empty"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("spendlog")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("spendlog"));
}

#[test]
fn test_unknown_flag_fails() {
    Command::cargo_bin("spendlog")
        .unwrap()
        .arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
