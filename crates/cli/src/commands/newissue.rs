// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue creation from a `refs #newissue` marker.
//!
//! The marker names the target project and optionally a parent issue
//! number (`refs #newissue PROJ-12`). The message header becomes the
//! issue summary, the body the description; an inline `#bug` or
//! `#feature` tag picks the issue type. The operator chooses a component
//! from an enumerated prompt, and the replacement message references the
//! created issue.

use std::io::{BufRead, Write};
use std::sync::LazyLock;

use regex::{Captures, Regex};

use rm_core::message::CommitMessage;
use rm_core::summary;
use rm_core::IssueRef;

use crate::error::{Error, Result};
use crate::prompt;
use crate::tracker::models::{CreateFields, CreateIssue, IdRef, KeyRef, NameRef};
use crate::tracker::TrackerClient;

// Marker: optional leading whitespace, `refs #newissue`, a project key,
// an optional parent number, and trailing whitespace.
static NEWISSUE_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"\s*refs #newissue\s+(\w+)(?:-(\d+))?\s") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

// Issue-type tags recognized anywhere in the message.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"(?i)#(?:bug|feature)") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Default issue-type tag when the message carries none.
const DEFAULT_TAG: &str = "bug";

/// Finds the new-issue marker in `text`. Group 1 is the project key,
/// group 2 the optional parent number.
pub fn find_marker(text: &str) -> Option<Captures<'_>> {
    NEWISSUE_RE.captures(text)
}

/// Creates a tracker issue from the commit message and returns the
/// replacement message content (`refs #KEY (summary) components`).
pub fn run<R: BufRead, W: Write>(
    client: &TrackerClient,
    text: &str,
    marker: &Captures<'_>,
    author_email: &str,
    input: &mut R,
    out: &mut W,
) -> Result<String> {
    let project = marker.get(1).map_or("", |m| m.as_str());
    let parent_key = match marker.get(2) {
        Some(number) => {
            let number = number.as_str().parse::<u64>().map_err(|_| {
                Error::Config(format!("parent issue number out of range: {}", number.as_str()))
            })?;
            Some(IssueRef::new(project, number)?.key())
        }
        None => None,
    };

    let tag = detect_tag(text);
    let type_id = resolve_issue_type(client, tag)?;

    let message = CommitMessage::new(text);
    let (header, description) = message.split_summary_description();
    let summary_text = strip_tags(header, marker.get(0).map_or("", |m| m.as_str()));

    let mut components = client.components(project)?;
    components.sort_by(|a, b| a.name.cmp(&b.name));
    let chosen = prompt::select_component(&components, input, out)?;

    let author = client
        .user_by_email(author_email)?
        .ok_or_else(|| Error::AuthorNotFound(author_email.to_string()))?;

    let request = CreateIssue {
        fields: CreateFields {
            project: KeyRef {
                key: project.to_string(),
            },
            issuetype: IdRef { id: type_id },
            assignee: NameRef {
                name: author.name.clone(),
            },
            reporter: NameRef { name: author.name },
            summary: summary_text.clone(),
            description: description.to_string(),
            parent: parent_key.map(|key| KeyRef { key }),
            components: chosen.iter().map(|c| IdRef { id: c.id.clone() }).collect(),
        },
    };
    let created = client.create_issue(&request)?;
    writeln!(out, "created issue {}", created.self_link)?;

    let names: Vec<String> = chosen.iter().map(|c| c.name.clone()).collect();
    Ok(summary::format_reference(
        &created.key,
        Some(&summary_text),
        &names,
    ))
}

/// Picks the issue-type tag: `#bug` wins over `#feature`; the default is
/// `bug`.
fn detect_tag(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    if lower.contains("#bug") {
        "bug"
    } else if lower.contains("#feature") {
        "feature"
    } else {
        DEFAULT_TAG
    }
}

/// Maps a tag to the tracker's issue-type id by case-insensitive
/// substring match on the type name.
fn resolve_issue_type(client: &TrackerClient, tag: &str) -> Result<String> {
    let types = client.issue_types()?;
    types
        .into_iter()
        .find(|t| t.name.to_lowercase().contains(tag))
        .map(|t| t.id)
        .ok_or_else(|| Error::IssueTypeNotFound {
            tag: tag.to_string(),
        })
}

/// Removes the creation marker and any issue-type tag from the summary
/// line.
fn strip_tags(header: &str, marker_text: &str) -> String {
    let without_marker = header.replace(marker_text.trim(), "");
    let without_tags = TAG_RE.replace_all(&without_marker, "");
    without_tags.trim().to_string()
}

#[cfg(test)]
#[path = "newissue_tests.rs"]
mod tests;
