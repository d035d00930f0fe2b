// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

#[derive(Parser)]
#[command(name = "refmark")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Annotate commit messages with issue-tracker summaries")]
#[command(
    long_about = "Annotate commit messages with issue-tracker summaries.\n\n\
    Run as a git commit-msg hook: every 'refs #KEY' reference is resolved against\n\
    the tracker and rewritten as 'refs #KEY (summary)'. A 'refs #newissue PROJECT'\n\
    marker creates a new tracker issue from the message instead."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Annotate issue references in a commit message file
    #[command(arg_required_else_help = true)]
    #[command(after_help = "\
Examples:
  refmark annotate .git/COMMIT_EDITMSG --host tracker.example.com --user bot
  refmark annotate msg.txt --host localhost --port 8443 --insecure
  REFMARK_PASSWORD=... refmark annotate msg.txt --host tracker.example.com --user bot")]
    Annotate {
        /// Path to the commit message file (supplied by git to commit-msg hooks)
        #[arg(value_name = "file")]
        file: PathBuf,

        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// Install the commit-msg hook into the current repository
    Install,

    /// Remove the commit-msg hook from the current repository
    Uninstall,

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Tracker connection parameters shared by network commands.
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// Tracker host, optionally with an explicit http:// or https:// scheme
    #[arg(long, env = "REFMARK_HOST", value_parser = non_empty_string)]
    pub host: Option<String>,

    /// Tracker port
    #[arg(long, env = "REFMARK_PORT")]
    pub port: Option<u16>,

    /// Tracker login user
    #[arg(long, env = "REFMARK_USER", value_parser = non_empty_string)]
    pub user: Option<String>,

    /// Tracker login password
    #[arg(long, env = "REFMARK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long)]
    pub insecure: bool,
}
