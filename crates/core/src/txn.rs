// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transaction scopes over SQLite connections.
//!
//! Wraps a unit of work in a transaction: commit when the closure
//! succeeds, roll back when it fails. [`with_transaction_or`] additionally
//! consults a fallback handler that may map the failure to a recovery
//! value instead of propagating it.

use std::fmt;

use rusqlite::{Connection, Transaction};
use tracing::warn;

/// Runs `work` inside a transaction on `conn`.
///
/// Commits when `work` returns `Ok`; rolls back and propagates the error
/// otherwise. A rollback failure replaces the original error.
pub fn with_transaction<T, E, F>(conn: &mut Connection, work: F) -> Result<T, E>
where
    E: From<rusqlite::Error> + fmt::Display,
    F: FnOnce(&Transaction<'_>) -> Result<T, E>,
{
    with_transaction_or(conn, work, |_| None)
}

/// Like [`with_transaction`], but a failed unit of work is offered to
/// `fallback` after the rollback. A `Some` result replaces the error and
/// is returned (the swallowed error is logged at warn level); `None`
/// propagates the original error.
pub fn with_transaction_or<T, E, F, H>(conn: &mut Connection, work: F, fallback: H) -> Result<T, E>
where
    E: From<rusqlite::Error> + fmt::Display,
    F: FnOnce(&Transaction<'_>) -> Result<T, E>,
    H: FnOnce(&E) -> Option<T>,
{
    let tx = conn.transaction()?;
    match work(&tx) {
        Ok(value) => {
            tx.commit()?;
            Ok(value)
        }
        Err(e) => {
            tx.rollback()?;
            match fallback(&e) {
                Some(value) => {
                    warn!("transaction handler swallowed error: {}", e);
                    Ok(value)
                }
                None => Err(e),
            }
        }
    }
}

#[cfg(test)]
#[path = "txn_tests.rs"]
mod tests;
