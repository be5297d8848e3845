// SPDX-License-Identifier: Apache-2.0

//! Issue-side discussion comments.
//!
//! PR discussion comments live on the issues API, not the pulls API, so
//! they are fetched from `/repos/{owner}/{repo}/issues/{number}/comments`.

use octocrab::Octocrab;
use tracing::instrument;

use crate::Result;
use crate::github::paginate::fetch_all_pages;
use crate::models::{ApiIssueComment, Comment};

/// Fetches all discussion-thread comments for a pull request, in API
/// return order.
///
/// # Errors
///
/// Returns [`crate::GleanError::Fetch`] on a non-success response and
/// [`crate::GleanError::Api`] on transport failures.
#[instrument(skip(client), fields(owner = %owner, repo = %repo, number))]
pub async fn fetch_issue_comments(
    client: &Octocrab,
    owner: &str,
    repo: &str,
    number: u64,
    per_page: u8,
) -> Result<Vec<Comment>> {
    let route = format!("/repos/{owner}/{repo}/issues/{number}/comments");
    let raw: Vec<ApiIssueComment> = fetch_all_pages(client, &route, per_page).await?;
    Ok(raw.into_iter().map(Comment::from).collect())
}
