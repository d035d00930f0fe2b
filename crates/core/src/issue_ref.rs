// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue reference tokens.
//!
//! A reference is a project key plus a numeric identifier, written
//! `PROJECT-123`. References are immutable once parsed.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A tracker issue reference such as `PROJ-123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueRef {
    project: String,
    number: u64,
}

impl IssueRef {
    /// Creates a reference from a project key and issue number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRef`] if the project key is empty or contains
    /// characters outside `[A-Za-z0-9_]`.
    pub fn new(project: impl Into<String>, number: u64) -> Result<Self> {
        let project = project.into();
        if project.is_empty()
            || !project
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(Error::InvalidRef(format!("{}-{}", project, number)));
        }
        Ok(IssueRef { project, number })
    }

    /// The project key portion (`PROJ` in `PROJ-123`).
    pub fn project(&self) -> &str {
        &self.project
    }

    /// The numeric portion (`123` in `PROJ-123`).
    pub fn number(&self) -> u64 {
        self.number
    }

    /// The full key, `PROJECT-NUMBER`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.project, self.number)
    }
}

impl fmt::Display for IssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.project, self.number)
    }
}

impl FromStr for IssueRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (project, number) = s
            .split_once('-')
            .ok_or_else(|| Error::InvalidRef(s.to_string()))?;
        let number: u64 = number
            .parse()
            .map_err(|_| Error::InvalidRef(s.to_string()))?;
        IssueRef::new(project, number)
    }
}

#[cfg(test)]
#[path = "issue_ref_tests.rs"]
mod tests;
