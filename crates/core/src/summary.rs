// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Composition rules for annotated issue references.
//!
//! An annotated reference reads `refs #KEY (summary)` with an optional
//! component suffix. The summary chains epic and parent summaries ahead of
//! the issue's own, joined by ` - `.

/// Fixed label preceding the component list in an annotated reference.
pub const COMPONENT_LABEL: &str = " components: ";

/// Separator between chained summaries.
const SUMMARY_JOIN: &str = " - ";

/// Composes the display summary for an issue. Epic and parent summaries,
/// when present, prefix the issue's own summary in that order.
pub fn compose(own: &str, parent: Option<&str>, epic: Option<&str>) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(3);
    if let Some(epic) = epic {
        parts.push(epic);
    }
    if let Some(parent) = parent {
        parts.push(parent);
    }
    parts.push(own);
    parts.join(SUMMARY_JOIN)
}

/// Renders the component suffix: [`COMPONENT_LABEL`] followed by the
/// sorted component names joined by `/`. No components, no suffix.
pub fn component_suffix(components: &[String]) -> String {
    if components.is_empty() {
        return String::new();
    }
    let mut names: Vec<&str> = components.iter().map(String::as_str).collect();
    names.sort_unstable();
    format!("{}{}", COMPONENT_LABEL, names.join("/"))
}

/// Renders a full reference replacement. A reference without a summary
/// stays bare (`refs #KEY`).
pub fn format_reference(key: &str, summary: Option<&str>, components: &[String]) -> String {
    match summary {
        Some(summary) => format!(
            "refs #{} ({}){}",
            key,
            summary,
            component_suffix(components)
        ),
        None => format!("refs #{}", key),
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
