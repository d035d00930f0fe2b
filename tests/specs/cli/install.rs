// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `refmark install` and `refmark uninstall`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn refmark() -> Command {
    cargo_bin_cmd!("refmark")
}

/// Helper to create a temp directory with an initialized git repository.
fn init_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    let status = std::process::Command::new("git")
        .arg("init")
        .arg("--quiet")
        .current_dir(temp.path())
        .status()
        .expect("git init failed");
    assert!(status.success());
    temp
}

#[test]
fn install_writes_commit_msg_hook() {
    let temp = init_repo();

    refmark()
        .arg("install")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("installed commit-msg hook"));

    let hook = temp.path().join(".git/hooks/commit-msg");
    assert!(hook.exists());

    let content = std::fs::read_to_string(&hook).unwrap();
    assert!(content.contains("refmark annotate \"$1\""));
}

#[test]
fn uninstall_removes_hook() {
    let temp = init_repo();

    refmark()
        .arg("install")
        .current_dir(temp.path())
        .assert()
        .success();
    refmark()
        .arg("uninstall")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("removed commit-msg hook"));

    assert!(!temp.path().join(".git/hooks/commit-msg").exists());
}

#[test]
fn install_outside_repository_fails() {
    let temp = TempDir::new().unwrap();

    refmark()
        .arg("install")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a git repository"));
}

#[test]
fn install_twice_keeps_single_hook_block() {
    let temp = init_repo();

    refmark()
        .arg("install")
        .current_dir(temp.path())
        .assert()
        .success();
    refmark()
        .arg("install")
        .current_dir(temp.path())
        .assert()
        .success();

    let content = std::fs::read_to_string(temp.path().join(".git/hooks/commit-msg")).unwrap();
    assert_eq!(content.matches("# refmark-annotate").count(), 1);
}
