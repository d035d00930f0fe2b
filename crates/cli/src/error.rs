// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the rmrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("authentication failed for user '{user}'")]
    AuthenticationFailed { user: String },

    #[error("tracker returned {status} for {action}: {body}")]
    ClientStatus {
        status: u16,
        action: String,
        body: String,
    },

    #[error("tracker request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("no issue type matches '{tag}'\n  hint: the tracker's issue type names must contain the tag text")]
    IssueTypeNotFound { tag: String },

    #[error("author email not set\n  hint: git exports GIT_AUTHOR_EMAIL to commit hooks; set it when invoking manually")]
    AuthorEmailMissing,

    #[error("no tracker account matches author email '{0}'")]
    AuthorNotFound(String),

    #[error("component selection aborted: {0}")]
    SelectionAborted(String),

    #[error("tracker {setting} not configured\n  hint: pass {flag}, set {env}, or add it to the config file")]
    MissingSetting {
        setting: &'static str,
        flag: &'static str,
        env: &'static str,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Core(#[from] rm_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for rmrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
