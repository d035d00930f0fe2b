// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use rmrs::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr; stdout stays clean for hook output.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    if let Err(e) = rmrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
