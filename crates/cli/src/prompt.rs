// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive component selection for the issue-creation path.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::tracker::models::Component;

/// Presents an enumerated component list and reads a selection index.
///
/// Non-numeric or out-of-range input re-prompts; end of input aborts the
/// run. An empty component list skips the prompt entirely.
pub fn select_component<R: BufRead, W: Write>(
    components: &[Component],
    input: &mut R,
    out: &mut W,
) -> Result<Option<Component>> {
    if components.is_empty() {
        return Ok(None);
    }

    for (index, component) in components.iter().enumerate() {
        writeln!(out, "  [{}] {}", index, component.name)?;
    }

    loop {
        write!(out, "select a component [0-{}]: ", components.len() - 1)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::SelectionAborted("end of input".to_string()));
        }

        let choice = line.trim();
        match choice.parse::<usize>().ok().and_then(|i| components.get(i)) {
            Some(component) => return Ok(Some(component.clone())),
            None => writeln!(out, "invalid selection: {}", choice)?,
        }
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
