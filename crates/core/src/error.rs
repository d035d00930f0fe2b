// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the rm-core library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid issue reference: '{0}'\n  hint: references look like PROJECT-123")]
    InvalidRef(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// A specialized Result type for rm-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
