// SPDX-License-Identifier: Apache-2.0

//! Markdown export for bulk runs.
//!
//! A single table of `PR Number | Comment Body | File Path` rows under a
//! title and a generated-at line. Cell text is escaped so multi-line
//! bodies stay inside one table row: pipes become `\|` and newlines
//! become `<br>`.

use std::path::Path;

use crate::Result;
use crate::models::FetchResult;

/// Escapes text for use inside a Markdown table cell.
///
/// `\r\n` and bare `\r` are normalized to `\n` first, then every `|`
/// becomes `\|` and every newline becomes `<br>`.
#[must_use]
pub fn escape_cell(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('|', "\\|")
        .replace('\n', "<br>")
}

/// Renders the comment rows of every result as a Markdown document.
///
/// `generated_at` is stamped into the preamble; pass the current time in
/// RFC 3339 form.
#[must_use]
pub fn render(results: &[FetchResult], generated_at: &str) -> String {
    let mut out = String::new();
    out.push_str("# PR Review Comments\n\n");
    out.push_str(&format!("Generated: {generated_at}\n\n"));
    out.push_str("| PR Number | Comment Body | File Path |\n");
    out.push_str("|-----------|--------------|----------|\n");
    for result in results {
        for comment in &result.all_comments {
            let body = escape_cell(&comment.body);
            let path = escape_cell(comment.path.as_deref().unwrap_or(""));
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                result.pull_request.number, body, path
            ));
        }
    }
    out
}

/// Writes the Markdown document for `results` to `path`.
///
/// # Errors
///
/// Returns [`crate::GleanError::Io`] on write failure.
pub fn write(path: &Path, results: &[FetchResult]) -> Result<()> {
    std::fs::write(path, render(results, &chrono::Utc::now().to_rfc3339()))?;
    Ok(())
}
