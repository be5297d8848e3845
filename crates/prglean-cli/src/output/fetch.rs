// SPDX-License-Identifier: Apache-2.0

//! Rendering for single-PR fetch results.

use std::io::{self, Write};

use console::style;
use prglean_core::{FetchResult, utils::truncate};

/// Number of target comments previewed below the summary.
const PREVIEW_LIMIT: usize = 3;

/// Maximum preview length for a comment body, in characters.
const PREVIEW_CHARS: usize = 100;

/// Renders the fetch summary for one pull request.
pub fn render_summary(out: &mut dyn Write, result: &FetchResult) -> io::Result<()> {
    let pr = &result.pull_request;
    let summary = &result.summary;

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style(format!("PR #{}: {}", pr.number, pr.title)).cyan().bold()
    )?;
    writeln!(out, "State: {}", pr.state)?;
    writeln!(out, "Reviews: {}", summary.total_reviews)?;
    writeln!(out, "Review comments: {}", summary.total_review_comments)?;
    writeln!(out, "Issue comments: {}", summary.total_issue_comments)?;
    writeln!(out, "All comments: {}", summary.total_all_comments)?;
    writeln!(out, "Target comments: {}", summary.total_target_comments)?;

    if !summary.review_states.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", style("Review States").bold())?;
        for (state, count) in summary.review_states.iter() {
            writeln!(out, "  {state}: {count}")?;
        }
    }

    if !result.target_comments.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", style("Target Comments").bold())?;
        for (i, comment) in result
            .target_comments
            .iter()
            .take(PREVIEW_LIMIT)
            .enumerate()
        {
            let author = comment.author.as_deref().unwrap_or("unknown");
            writeln!(
                out,
                "  {}. [{}] {}: {}",
                i + 1,
                comment.kind,
                author,
                truncate(&comment.body, PREVIEW_CHARS)
            )?;
        }
        let remaining = result.target_comments.len().saturating_sub(PREVIEW_LIMIT);
        if remaining > 0 {
            writeln!(
                out,
                "{}",
                style(format!("  ... and {remaining} more comments")).dim()
            )?;
        }
    }

    Ok(())
}
