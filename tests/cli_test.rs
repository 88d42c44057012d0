//! CLI surface tests.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_usage() {
    Command::cargo_bin("sling")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("socket payload"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_prints_package_version() {
    Command::cargo_bin("sling")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_emit_shell_script() {
    Command::cargo_bin("sling")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sling"));
}

#[test]
fn unknown_flag_fails() {
    Command::cargo_bin("sling")
        .unwrap()
        .arg("--definitely-not-a-flag")
        .assert()
        .failure();
}
