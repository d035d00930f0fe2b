// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the CLI surface: version, help, and completion generation.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn refmark() -> Command {
    cargo_bin_cmd!("refmark")
}

#[test]
fn version_flag_prints_version() {
    refmark()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("refmark"));
}

#[test]
fn help_lists_commands() {
    let output = refmark().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["annotate", "install", "uninstall", "completion"] {
        assert!(stdout.contains(command), "help should mention {}", command);
    }
}

#[test]
fn annotate_help_shows_connection_flags() {
    let output = refmark().args(["annotate", "--help"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--host", "--port", "--user", "--password", "--insecure"] {
        assert!(stdout.contains(flag), "help should mention {}", flag);
    }
    assert!(stdout.contains("Examples:"));
}

#[test]
fn annotate_without_file_shows_help() {
    refmark().arg("annotate").assert().failure();
}

#[test]
fn unknown_command_fails() {
    refmark()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_generates_non_empty_output(shell: &str) {
    let output = refmark().args(["completion", shell]).output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "completion output should not be empty");
    assert!(
        stdout.to_lowercase().contains("refmark"),
        "completion should reference the refmark binary"
    );
}

#[test]
fn completion_invalid_shell_fails() {
    refmark().args(["completion", "tcsh"]).assert().failure();
}
