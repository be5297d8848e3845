// SPDX-License-Identifier: Apache-2.0

//! Bulk orchestration across a sequence of PRs.
//!
//! PRs are processed strictly one after another in input order. A PR
//! whose fetch fails is recorded and skipped; the batch always runs to
//! the end. Progress is surfaced through a callback so callers decide
//! how (and whether) to display it.

use std::time::Duration;

use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use crate::fetch::fetch_pr_activity;
use crate::models::FetchResult;

/// A PR that could not be fetched, with the error rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkFailure {
    /// The PR number that failed.
    pub pr_number: u64,
    /// Human-readable error description.
    pub error: String,
}

/// Outcome of a bulk run: successes and failures, both in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkResult {
    /// One entry per successfully fetched PR.
    pub results: Vec<FetchResult>,
    /// One entry per PR whose fetch failed.
    pub failures: Vec<BulkFailure>,
}

impl BulkResult {
    /// Whether at least one PR was fetched successfully.
    #[must_use]
    pub fn any_succeeded(&self) -> bool {
        !self.results.is_empty()
    }
}

/// Progress notification emitted while a bulk run advances.
///
/// `current` is 1-indexed, matching the `[current/total]` display most
/// callers want.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkEvent {
    /// Fetching of one PR is about to start.
    Started {
        /// 1-indexed position in the batch.
        current: usize,
        /// Batch size.
        total: usize,
        /// The PR number being fetched.
        pr_number: u64,
    },
    /// One PR was fetched successfully.
    Fetched {
        /// 1-indexed position in the batch.
        current: usize,
        /// Batch size.
        total: usize,
        /// The PR number that was fetched.
        pr_number: u64,
        /// Size of the merged comment list.
        all_comments: usize,
        /// Size of the target subset.
        target_comments: usize,
    },
    /// One PR failed and was recorded in the failure list.
    Failed {
        /// 1-indexed position in the batch.
        current: usize,
        /// Batch size.
        total: usize,
        /// The PR number that failed.
        pr_number: u64,
        /// Human-readable error description.
        error: String,
    },
}

/// Fetches review activity for every PR in `pr_numbers`, sequentially.
///
/// Waits `delay` after each PR except the last, success or failure
/// alike. Per-PR errors land in [`BulkResult::failures`]; this function
/// itself never fails.
#[instrument(skip(client, on_event), fields(owner = %owner, repo = %repo, prs = pr_numbers.len()))]
pub async fn run_bulk<F>(
    client: &Octocrab,
    owner: &str,
    repo: &str,
    pr_numbers: &[u64],
    per_page: u8,
    delay: Duration,
    mut on_event: F,
) -> BulkResult
where
    F: FnMut(&BulkEvent),
{
    let total = pr_numbers.len();
    let mut outcome = BulkResult::default();

    for (index, &pr_number) in pr_numbers.iter().enumerate() {
        let current = index + 1;
        on_event(&BulkEvent::Started {
            current,
            total,
            pr_number,
        });

        match fetch_pr_activity(client, owner, repo, pr_number, per_page).await {
            Ok(result) => {
                on_event(&BulkEvent::Fetched {
                    current,
                    total,
                    pr_number,
                    all_comments: result.all_comments.len(),
                    target_comments: result.target_comments.len(),
                });
                outcome.results.push(result);
            }
            Err(err) => {
                let error = err.to_string();
                warn!(pr_number, %error, "Skipping PR after fetch failure");
                on_event(&BulkEvent::Failed {
                    current,
                    total,
                    pr_number,
                    error: error.clone(),
                });
                outcome.failures.push(BulkFailure { pr_number, error });
            }
        }

        if current < total {
            tokio::time::sleep(delay).await;
        }
    }

    outcome
}
