// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rm-core - shared domain types and utilities for the refmark toolkit.
//!
//! This crate provides the pure-text domain of the `refmark` CLI tool
//! (issue references, the commit-message model, annotated-summary
//! composition) plus two standalone helpers that predate the hook and are
//! kept with it:
//!
//! - [`chunk`] - a fixed-size chunking adaptor for iterators
//! - [`txn`] - transaction scopes over SQLite connections
//!
//! # Main Components
//!
//! - [`IssueRef`] - a `PROJECT-123` issue reference token
//! - [`CommitMessage`] - commit-message text with header/body splitting
//! - [`summary`] - composition rules for annotated references
//! - [`Error`] - error types for all operations

pub mod chunk;
pub mod error;
pub mod issue_ref;
pub mod message;
pub mod summary;
pub mod txn;

pub use chunk::IteratorChunks;
pub use error::{Error, Result};
pub use issue_ref::IssueRef;
pub use message::CommitMessage;
