// SPDX-License-Identifier: Apache-2.0

//! Cross-PR aggregate statistics for bulk runs.

use serde::{Deserialize, Serialize};

use crate::models::FetchResult;
use crate::summary::CountMap;

/// How many entries the leaderboard fields keep.
const TOP_N: usize = 10;

/// Aggregate statistics across every successfully fetched PR in a bulk
/// run.
///
/// The leaderboard fields (`top_reviewers`, `top_commenters`,
/// `files_with_most_comments`) keep at most ten entries, highest count
/// first; ties stay in first-seen order. Comments and reviews without an
/// author (deleted accounts) are skipped in the leaderboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkReport {
    /// Number of PRs that produced a result.
    pub total_prs: usize,
    /// Reviews summed across all PRs.
    pub total_reviews: usize,
    /// Comments (both kinds) summed across all PRs.
    pub total_comments: usize,
    /// Review-state histogram merged across PRs, first-seen order.
    pub review_states: CountMap,
    /// Most active reviewers by review count.
    pub top_reviewers: CountMap,
    /// Most active commenters by comment count.
    pub top_commenters: CountMap,
    /// PR state histogram (open/closed/merged).
    pub pr_states: CountMap,
    /// Files drawing the most review comments.
    pub files_with_most_comments: CountMap,
}

impl BulkReport {
    /// Builds the report from the successful results of a bulk run.
    #[must_use]
    pub fn compute(results: &[FetchResult]) -> Self {
        let mut review_states = CountMap::new();
        let mut pr_states = CountMap::new();
        let mut reviewers = CountMap::new();
        let mut commenters = CountMap::new();
        let mut files = CountMap::new();
        let mut total_reviews = 0;
        let mut total_comments = 0;

        for result in results {
            total_reviews += result.summary.total_reviews;
            total_comments += result.summary.total_all_comments;
            for (state, count) in result.summary.review_states.iter() {
                review_states.add(state, count);
            }
            pr_states.bump(&result.pull_request.state.to_string());

            for review in &result.reviews {
                if let Some(author) = &review.author {
                    reviewers.bump(author);
                }
            }
            for comment in &result.all_comments {
                if let Some(author) = &comment.author {
                    commenters.bump(author);
                }
                if let Some(path) = &comment.path {
                    files.bump(path);
                }
            }
        }

        Self {
            total_prs: results.len(),
            total_reviews,
            total_comments,
            review_states,
            top_reviewers: reviewers.top(TOP_N),
            top_commenters: commenters.top(TOP_N),
            pr_states,
            files_with_most_comments: files.top(TOP_N),
        }
    }
}
