// SPDX-License-Identifier: Apache-2.0

//! CSV export for bulk runs.
//!
//! One row per comment across all fetched PRs, in result order. The
//! escaping here is the whole format: a field containing a comma,
//! double-quote, or line break is wrapped in double quotes with embedded
//! quotes doubled (RFC 4180). Rows end with `\n`. Missing values render
//! as empty fields.

use std::path::Path;

use crate::Result;
use crate::models::{Comment, FetchResult, PullRequestInfo};

/// Column order of the emitted CSV, one entry per field.
pub const COLUMNS: [&str; 12] = [
    "pr_number",
    "pr_title",
    "pr_state",
    "pr_author",
    "comment_id",
    "comment_author",
    "comment_body",
    "file_path",
    "line_number",
    "created_at",
    "updated_at",
    "in_reply_to",
];

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_row(out: &mut String, pr: &PullRequestInfo, comment: &Comment) {
    let fields = [
        pr.number.to_string(),
        pr.title.clone(),
        pr.state.to_string(),
        pr.author.clone(),
        comment.id.to_string(),
        comment.author.clone().unwrap_or_default(),
        comment.body.clone(),
        comment.path.clone().unwrap_or_default(),
        comment.line.map(|l| l.to_string()).unwrap_or_default(),
        comment.created_at.clone(),
        comment.updated_at.clone(),
        comment
            .in_reply_to_id
            .map(|id| id.to_string())
            .unwrap_or_default(),
    ];
    let row: Vec<String> = fields.iter().map(|field| escape(field)).collect();
    out.push_str(&row.join(","));
    out.push('\n');
}

/// Renders the comment rows of every result as a CSV document.
///
/// The header row is always present, so an empty result set yields a
/// header-only document.
#[must_use]
pub fn render(results: &[FetchResult]) -> String {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));
    out.push('\n');
    for result in results {
        for comment in &result.all_comments {
            push_row(&mut out, &result.pull_request, comment);
        }
    }
    out
}

/// Writes the CSV document for `results` to `path`.
///
/// # Errors
///
/// Returns [`crate::GleanError::Io`] on write failure.
pub fn write(path: &Path, results: &[FetchResult]) -> Result<()> {
    std::fs::write(path, render(results))?;
    Ok(())
}
