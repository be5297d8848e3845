// SPDX-License-Identifier: Apache-2.0

//! Single-PR fetch pipeline.
//!
//! One call gathers everything the exports need for a PR: metadata,
//! reviews, both comment populations, and the derived summary. Requests
//! run sequentially; the first failure aborts the pipeline and surfaces
//! as-is.

use octocrab::Octocrab;
use tracing::{info, instrument};

use crate::Result;
use crate::classify::{merge_comments, target_comments};
use crate::github::comments::fetch_issue_comments;
use crate::github::pulls::{fetch_pull_request, fetch_review_comments, fetch_reviews};
use crate::models::FetchResult;
use crate::summary::Summary;

/// Fetches the complete review activity for one pull request.
///
/// # Errors
///
/// Propagates the first [`crate::GleanError`] from any of the four
/// underlying requests.
#[instrument(skip(client), fields(owner = %owner, repo = %repo, number))]
pub async fn fetch_pr_activity(
    client: &Octocrab,
    owner: &str,
    repo: &str,
    number: u64,
    per_page: u8,
) -> Result<FetchResult> {
    let pull_request = fetch_pull_request(client, owner, repo, number).await?;
    let reviews = fetch_reviews(client, owner, repo, number, per_page).await?;
    let review_comments = fetch_review_comments(client, owner, repo, number, per_page).await?;
    let issue_comments = fetch_issue_comments(client, owner, repo, number, per_page).await?;

    let all_comments = merge_comments(review_comments, issue_comments);
    let target_comments = target_comments(&all_comments);
    let summary = Summary::compute(&reviews, &all_comments, &target_comments);

    info!(
        reviews = summary.total_reviews,
        comments = summary.total_all_comments,
        targets = summary.total_target_comments,
        "Fetched PR activity"
    );

    Ok(FetchResult {
        pull_request,
        reviews,
        all_comments,
        target_comments,
        summary,
        fetched_at: chrono::Utc::now().to_rfc3339(),
    })
}
