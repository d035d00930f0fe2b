// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git hook management for the annotate command.
//!
//! Installs a `commit-msg` hook that runs `refmark annotate` on the
//! message file. Existing hook content is preserved: the refmark block is
//! appended and identified by a marker comment, so uninstalling removes
//! only that block.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Marker comment identifying the refmark hook block.
const HOOK_MARKER: &str = "# refmark-annotate";

/// The hook managed by refmark.
const HOOK_NAME: &str = "commit-msg";

/// The commit-msg hook script.
const COMMIT_MSG_HOOK: &str = r#"#!/bin/sh
# refmark-annotate
# Annotate issue references in the commit message
refmark annotate "$1"
"#;

/// Runs the install command in the current directory.
pub fn run() -> Result<()> {
    let git_dir = find_git_dir(Path::new("."))?;
    let path = install_hook(&git_dir)?;
    println!("installed {} hook at {}", HOOK_NAME, path.display());
    Ok(())
}

/// Runs the uninstall command in the current directory.
pub fn uninstall() -> Result<()> {
    let git_dir = find_git_dir(Path::new("."))?;
    remove_hook(&git_dir)?;
    println!("removed {} hook", HOOK_NAME);
    Ok(())
}

/// Find the .git directory for a repository.
pub fn find_git_dir(from: &Path) -> Result<PathBuf> {
    let output = Command::new("git")
        .current_dir(from)
        .args(["rev-parse", "--git-dir"])
        .output()
        .map_err(|e| Error::Config(format!("failed to run git: {}", e)))?;

    if !output.status.success() {
        return Err(Error::Config("not a git repository".to_string()));
    }

    let git_dir = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if Path::new(&git_dir).is_absolute() {
        Ok(PathBuf::from(git_dir))
    } else {
        Ok(from.join(git_dir))
    }
}

/// Installs the commit-msg hook, appending to any existing hook script.
pub fn install_hook(git_dir: &Path) -> Result<PathBuf> {
    let hooks_dir = git_dir.join("hooks");
    fs::create_dir_all(&hooks_dir)?;

    let hook_path = hooks_dir.join(HOOK_NAME);
    let existing = if hook_path.exists() {
        fs::read_to_string(&hook_path)?
    } else {
        String::new()
    };

    if existing.contains(HOOK_MARKER) {
        return Ok(hook_path);
    }

    let content = if existing.is_empty() {
        COMMIT_MSG_HOOK.to_string()
    } else {
        format!("{}\n\n{}", existing.trim_end(), COMMIT_MSG_HOOK)
    };
    fs::write(&hook_path, content)?;

    let mut perms = fs::metadata(&hook_path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&hook_path, perms)?;

    Ok(hook_path)
}

/// Removes the refmark block from the commit-msg hook, deleting the file
/// when nothing else remains.
pub fn remove_hook(git_dir: &Path) -> Result<()> {
    let hook_path = git_dir.join("hooks").join(HOOK_NAME);
    if !hook_path.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(&hook_path)?;
    let mut kept: Vec<&str> = Vec::new();
    let mut in_block = false;
    for line in content.lines() {
        if line.contains(HOOK_MARKER) {
            in_block = true;
            continue;
        }
        if in_block {
            if line.is_empty() || line.starts_with("refmark ") || line.starts_with("# Annotate") {
                continue;
            }
            in_block = false;
        }
        kept.push(line);
    }

    let remaining = kept.join("\n");
    if remaining.trim().is_empty() || remaining.trim() == "#!/bin/sh" {
        fs::remove_file(&hook_path)?;
    } else {
        fs::write(&hook_path, format!("{}\n", remaining.trim_end()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "install_tests.rs"]
mod tests;
