// SPDX-License-Identifier: Apache-2.0

//! Rendering for bulk runs: progress lines, the aggregate report, and
//! the final outcome.

use std::io::{self, Write};

use console::style;
use prglean_core::{BulkEvent, BulkFailure, BulkReport, CountMap};

/// Prints one progress line per bulk event to stdout.
pub fn print_progress(event: &BulkEvent) {
    match event {
        BulkEvent::Started {
            current,
            total,
            pr_number,
        } => {
            println!(
                "{} Fetching PR #{pr_number}",
                style(format!("[{current}/{total}]")).cyan().bold()
            );
        }
        BulkEvent::Fetched {
            all_comments,
            target_comments,
            ..
        } => {
            println!(
                "  {} {all_comments} comments ({target_comments} target)",
                style("✓").green()
            );
        }
        BulkEvent::Failed { error, .. } => {
            println!("  {} {error}", style("✗").red());
        }
    }
}

/// Renders the aggregate report across all successfully fetched PRs.
pub fn render_report(out: &mut dyn Write, report: &BulkReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style("Summary Report").cyan().bold())?;
    writeln!(out, "Total PRs processed: {}", report.total_prs)?;
    writeln!(out, "Total reviews: {}", report.total_reviews)?;
    writeln!(out, "Total comments: {}", report.total_comments)?;

    render_section(out, "PR States", &report.pr_states, "")?;
    render_section(out, "Review States", &report.review_states, "")?;
    render_section(out, "Top Reviewers", &report.top_reviewers, " reviews")?;
    render_section(out, "Top Commenters", &report.top_commenters, " comments")?;
    render_section(
        out,
        "Files with Most Comments",
        &report.files_with_most_comments,
        "",
    )?;

    Ok(())
}

fn render_section(
    out: &mut dyn Write,
    title: &str,
    counts: &CountMap,
    suffix: &str,
) -> io::Result<()> {
    if counts.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{}", style(title).bold())?;
    for (key, count) in counts.iter() {
        writeln!(out, "  {key}: {count}{suffix}")?;
    }
    Ok(())
}

/// Renders the final processed/failed tally, listing each failed PR.
pub fn render_outcome(
    out: &mut dyn Write,
    processed: usize,
    failures: &[BulkFailure],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Processed: {}", style(processed).green())?;
    if !failures.is_empty() {
        writeln!(out, "Failed: {}", style(failures.len()).red())?;
        for failure in failures {
            writeln!(out, "  PR #{}: {}", failure.pr_number, failure.error)?;
        }
    }
    Ok(())
}
