// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rmrs - tracker-aware commit-message annotation library.
//!
//! This crate provides the core functionality for the `refmark` CLI tool,
//! a git `commit-msg` hook that resolves `refs #KEY` issue references
//! against a JIRA-style tracker and rewrites the message file in place. A
//! `refs #newissue` marker instead creates a tracker issue from the
//! message and references it.
//!
//! # Main Components
//!
//! - [`TrackerClient`] - a logged-in REST session against the tracker
//! - [`ConnectionConfig`] - connection settings (flags, env, config file)
//! - [`commands`] - the `annotate`, `install`, and `uninstall` commands
//! - [`Error`] - error types for all operations

mod cli;
mod prompt;

pub mod commands;
pub mod config;
pub mod error;
pub mod tracker;

pub use cli::{Cli, Command, ConnectionArgs};
pub use config::ConnectionConfig;
pub use error::{Error, Result};
pub use tracker::TrackerClient;

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Annotate { file, connection } => {
            let config = ConnectionConfig::resolve(&connection)?;
            commands::annotate::run(&file, &config)
        }
        Command::Install => commands::install::run(),
        Command::Uninstall => commands::install::uninstall(),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "refmark", &mut std::io::stdout());
            Ok(())
        }
    }
}
