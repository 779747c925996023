use std::fs::{self, OpenOptions};
use std::io::Write;
use std::ops::Range;
use std::path::Path;

use crate::errors::ScanError;

use super::finder::Duplicate;

/// Locate the textual span of `name`'s definition inside `text`.
///
/// The span starts at the first `def <name>` marker and runs to the next
/// `def ` marker, or to the end of the text when there is none. When a
/// `return ` token appears before that boundary, the stretch between it
/// and the boundary is searched for an earlier `def ` marker to narrow
/// the span.
///
/// The markers are literal substrings, not parse-tree boundaries. The
/// span stops early at a nested definition and swallows blank lines or
/// comments that precede the next marker; a short name also matches
/// longer names it prefixes. That imprecision is the documented contract
/// of this extractor.
///
/// Returns `None` when the `def <name>` marker is absent.
pub fn function_span(text: &str, name: &str) -> Option<Range<usize>> {
    let marker = format!("def {name}");
    let start = text.find(&marker)?;

    let mut end = match text[start + 1..].find("def ") {
        Some(offset) => start + 1 + offset,
        None => text.len(),
    };

    if end < text.len()
        && let Some(offset) = text[start..end].find("return ")
    {
        let ret = start + offset;
        if let Some(next_def) = text[ret..end].find("def ") {
            end = ret + next_def;
        }
    }

    Some(start..end)
}

/// Append the source span of every duplicate to the output file.
///
/// The output file is created if absent and opened in append mode, so
/// re-running adds to whatever is already there. Each extracted span is
/// followed by two newlines. A duplicate whose marker cannot be found in
/// its file is reported on stderr and skipped; I/O failures abort with no
/// rollback of already-appended content.
pub fn extract_into(duplicates: &[Duplicate], output: &Path) -> Result<(), ScanError> {
    let mut out = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output)
        .map_err(|source| ScanError::FileAccess {
            path: output.to_path_buf(),
            source,
        })?;

    for dup in duplicates {
        let text = fs::read_to_string(&dup.file).map_err(|source| ScanError::FileAccess {
            path: dup.file.clone(),
            source,
        })?;

        let Some(span) = function_span(&text, &dup.name) else {
            eprintln!(
                "warning: function '{}' not found in '{}'",
                dup.name,
                dup.file.display()
            );
            continue;
        };

        out.write_all(text[span].as_bytes())
            .map_err(|source| ScanError::FileAccess {
                path: output.to_path_buf(),
                source,
            })?;
        out.write_all(b"\n\n").map_err(|source| ScanError::FileAccess {
            path: output.to_path_buf(),
            source,
        })?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
