// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `annotate` command: the commit-msg hook entry point.
//!
//! Resolves every `refs #KEY` occurrence in the message against the
//! tracker and rewrites the file in place. A `refs #newissue` marker
//! routes the whole message to issue creation instead.

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use rm_core::message::CommitMessage;
use rm_core::summary;
use rm_core::IssueRef;

use crate::config::ConnectionConfig;
use crate::error::{Error, Result};
use crate::tracker::TrackerClient;

use super::newissue;

// Pre-compiled reference pattern: `refs #PROJ-123`, whitespace after
// `refs` optional. The pattern is hard-coded and known-valid.
static REF_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"refs\s*#(\w+-\d+)") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Runs the annotate command against `file`.
pub fn run(file: &Path, config: &ConnectionConfig) -> Result<()> {
    // Login happens before the file is touched; a rejected login aborts
    // the whole run.
    let client = TrackerClient::connect(config)?;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();
    rewrite_file(file, &client, &mut input, &mut out)
}

/// Reads, rewrites, and writes back a commit-message file. The output is
/// truncated and terminated by exactly one trailing newline.
pub fn rewrite_file<R: BufRead, W: Write>(
    file: &Path,
    client: &TrackerClient,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let text = fs::read_to_string(file)?;
    let rewritten = rewrite(&text, client, input, out)?;
    fs::write(file, CommitMessage::new(rewritten).normalized())?;
    Ok(())
}

/// Rewrites commit-message text.
pub fn rewrite<R: BufRead, W: Write>(
    text: &str,
    client: &TrackerClient,
    input: &mut R,
    out: &mut W,
) -> Result<String> {
    if let Some(marker) = newissue::find_marker(text) {
        let email = author_email()?;
        return newissue::run(client, text, &marker, &email, input, out);
    }
    annotate_references(text, client)
}

/// Resolves every issue reference in `text` independently.
fn annotate_references(text: &str, client: &TrackerClient) -> Result<String> {
    let epic_field = client.epic_link_field()?;
    let message = CommitMessage::new(text);
    let mut fatal: Option<Error> = None;

    let result = REF_RE.replace_all(text, |caps: &Captures<'_>| {
        let key = caps.get(1).map_or("", |m| m.as_str());
        match annotate_one(client, epic_field.as_deref(), key, &message) {
            Ok(replacement) => replacement,
            // A 4xx for this one reference degrades it to a bare ref.
            Err(Error::ClientStatus { .. }) => summary::format_reference(key, None, &[]),
            Err(e) => {
                if fatal.is_none() {
                    fatal = Some(e);
                }
                caps.get(0).map_or("", |m| m.as_str()).to_string()
            }
        }
    });

    match fatal {
        Some(e) => Err(e),
        None => Ok(result.into_owned()),
    }
}

/// Produces the replacement text for a single `refs #KEY` match.
fn annotate_one(
    client: &TrackerClient,
    epic_field: Option<&str>,
    key: &str,
    original: &CommitMessage,
) -> Result<String> {
    let reference: IssueRef = key.parse()?;
    let key = reference.key();
    let issue = client.issue(&key)?;

    // The author already wrote the summary out; keep the reference bare.
    if original.contains(&issue.fields.summary) {
        return Ok(summary::format_reference(&key, None, &[]));
    }

    let parent_summary = match &issue.fields.parent {
        Some(parent) => Some(client.issue(&parent.key)?.fields.summary),
        None => None,
    };

    let epic_summary = match epic_field.and_then(|id| issue.fields.custom_string(id)) {
        Some(epic_key) => Some(client.issue(epic_key)?.fields.summary),
        None => None,
    };

    let composed = summary::compose(
        &issue.fields.summary,
        parent_summary.as_deref(),
        epic_summary.as_deref(),
    );
    Ok(summary::format_reference(
        &key,
        Some(&composed),
        &issue.fields.component_names(),
    ))
}

/// The committing author's email, as exported by git to commit hooks.
fn author_email() -> Result<String> {
    std::env::var("GIT_AUTHOR_EMAIL")
        .ok()
        .filter(|email| !email.is_empty())
        .ok_or(Error::AuthorEmailMissing)
}

#[cfg(test)]
#[path = "annotate_tests.rs"]
mod tests;
