// SPDX-License-Identifier: Apache-2.0

//! Domain types for PR review activity.
//!
//! The structs here are the export schema: serializing a [`FetchResult`]
//! with `serde_json` produces exactly the documented JSON layout. Raw API
//! payloads deserialize into the `Api*` types at the gateway boundary and
//! convert into domain types via `From`.

use serde::{Deserialize, Serialize};

use crate::summary::Summary;

/// Pull request state as reported in exports.
///
/// The REST API only knows `open` and `closed`; a closed PR with a merge
/// timestamp is reported as `merged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrState {
    /// PR is open.
    Open,
    /// PR was closed without merging.
    Closed,
    /// PR was merged.
    Merged,
}

impl std::fmt::Display for PrState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PrState::Open => "open",
            PrState::Closed => "closed",
            PrState::Merged => "merged",
        };
        f.write_str(s)
    }
}

/// Snapshot of pull request metadata, fetched once per PR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestInfo {
    /// PR number.
    pub number: u64,
    /// PR title.
    pub title: String,
    /// Open, closed, or merged.
    pub state: PrState,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Last-update timestamp (ISO 8601).
    pub updated_at: String,
    /// Merge timestamp, or null if unmerged.
    pub merged_at: Option<String>,
    /// Author login.
    #[serde(rename = "user")]
    pub author: String,
    /// Target branch name.
    pub base_branch: String,
    /// Source branch name.
    pub head_branch: String,
}

/// Verdict state of a submitted review.
///
/// The catch-all variant preserves any state string the API introduces
/// beyond the documented set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    /// Changes approved.
    Approved,
    /// Changes requested.
    ChangesRequested,
    /// Review submitted as a plain comment.
    Commented,
    /// Review was dismissed.
    Dismissed,
    /// Review is pending submission.
    Pending,
    /// Any other state, preserved verbatim.
    #[serde(untagged)]
    Other(String),
}

impl std::fmt::Display for ReviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReviewState::Approved => "APPROVED",
            ReviewState::ChangesRequested => "CHANGES_REQUESTED",
            ReviewState::Commented => "COMMENTED",
            ReviewState::Dismissed => "DISMISSED",
            ReviewState::Pending => "PENDING",
            ReviewState::Other(s) => s,
        };
        f.write_str(s)
    }
}

/// A submitted review on a PR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Review identifier.
    pub id: u64,
    /// Reviewer login, or null for deleted accounts.
    #[serde(rename = "user")]
    pub author: Option<String>,
    /// Verdict state.
    pub state: ReviewState,
    /// Review body, or null when none was written.
    pub body: Option<String>,
    /// Submission timestamp (ISO 8601), or null for pending reviews.
    pub submitted_at: Option<String>,
    /// Commit the review applies to.
    pub commit_id: Option<String>,
}

/// Origin of a comment: anchored to a diff line, or on the PR discussion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    /// Line-level comment on the PR diff.
    ReviewComment,
    /// Comment on the PR's overall discussion thread.
    IssueComment,
}

impl std::fmt::Display for CommentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CommentKind::ReviewComment => "review_comment",
            CommentKind::IssueComment => "issue_comment",
        };
        f.write_str(s)
    }
}

/// A single comment, unified across both origins.
///
/// The diff-anchoring fields (`path`, `line`, `commit_id`,
/// `in_reply_to_id`, `pull_request_review_id`) are null for issue
/// comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier, unique within a PR's comment set.
    pub id: u64,
    /// Author login, or null for deleted accounts.
    #[serde(rename = "user")]
    pub author: Option<String>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Last-edit timestamp (ISO 8601).
    pub updated_at: String,
    /// Comment text.
    pub body: String,
    /// File path the comment is anchored to.
    pub path: Option<String>,
    /// Diff line number, or null when the anchor is outdated.
    pub line: Option<u64>,
    /// Commit the comment was made against.
    pub commit_id: Option<String>,
    /// Identifier of the comment this one replies to.
    pub in_reply_to_id: Option<u64>,
    /// Identifier of the owning review.
    pub pull_request_review_id: Option<u64>,
    /// Origin of the comment.
    #[serde(rename = "type")]
    pub kind: CommentKind,
}

impl Comment {
    /// Whether this comment is a target (non-root) comment.
    ///
    /// Every issue comment is a target, and a review comment is a target
    /// exactly when it replies to another comment. The predicate looks
    /// only at this comment; the parent is never resolved.
    #[must_use]
    pub fn is_target(&self) -> bool {
        match self.kind {
            CommentKind::IssueComment => true,
            CommentKind::ReviewComment => self.in_reply_to_id.is_some(),
        }
    }
}

/// Complete review activity for one PR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchResult {
    /// PR metadata snapshot.
    pub pull_request: PullRequestInfo,
    /// Reviews in API return order.
    pub reviews: Vec<Review>,
    /// Review comments followed by issue comments, each in fetch order.
    pub all_comments: Vec<Comment>,
    /// The non-root subset of `all_comments`, order preserved.
    pub target_comments: Vec<Comment>,
    /// Aggregate counts.
    pub summary: Summary,
    /// When this result was assembled (RFC 3339).
    pub fetched_at: String,
}

// ---- Raw API payloads ----

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiBranchRef {
    #[serde(rename = "ref")]
    pub(crate) ref_: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequest {
    pub(crate) number: u64,
    pub(crate) title: String,
    pub(crate) state: String,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
    pub(crate) merged_at: Option<String>,
    pub(crate) user: Option<ApiUser>,
    pub(crate) base: ApiBranchRef,
    pub(crate) head: ApiBranchRef,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiReview {
    pub(crate) id: u64,
    pub(crate) user: Option<ApiUser>,
    pub(crate) state: ReviewState,
    pub(crate) body: Option<String>,
    pub(crate) submitted_at: Option<String>,
    pub(crate) commit_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiReviewComment {
    pub(crate) id: u64,
    pub(crate) user: Option<ApiUser>,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
    pub(crate) body: Option<String>,
    pub(crate) path: String,
    pub(crate) line: Option<u64>,
    pub(crate) commit_id: Option<String>,
    pub(crate) in_reply_to_id: Option<u64>,
    pub(crate) pull_request_review_id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiIssueComment {
    pub(crate) id: u64,
    pub(crate) user: Option<ApiUser>,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
    pub(crate) body: Option<String>,
}

impl From<ApiPullRequest> for PullRequestInfo {
    fn from(value: ApiPullRequest) -> Self {
        let state = if value.merged_at.is_some() {
            PrState::Merged
        } else if value.state == "open" {
            PrState::Open
        } else {
            PrState::Closed
        };
        Self {
            number: value.number,
            title: value.title,
            state,
            created_at: value.created_at,
            updated_at: value.updated_at,
            merged_at: value.merged_at,
            author: value
                .user
                .and_then(|user| user.login)
                .unwrap_or_default(),
            base_branch: value.base.ref_,
            head_branch: value.head.ref_,
        }
    }
}

impl From<ApiReview> for Review {
    fn from(value: ApiReview) -> Self {
        Self {
            id: value.id,
            author: value.user.and_then(|user| user.login),
            state: value.state,
            body: value.body,
            submitted_at: value.submitted_at,
            commit_id: value.commit_id,
        }
    }
}

impl From<ApiReviewComment> for Comment {
    fn from(value: ApiReviewComment) -> Self {
        Self {
            id: value.id,
            author: value.user.and_then(|user| user.login),
            created_at: value.created_at,
            updated_at: value.updated_at,
            body: value.body.unwrap_or_default(),
            path: Some(value.path),
            line: value.line,
            commit_id: value.commit_id,
            in_reply_to_id: value.in_reply_to_id,
            pull_request_review_id: value.pull_request_review_id,
            kind: CommentKind::ReviewComment,
        }
    }
}

impl From<ApiIssueComment> for Comment {
    fn from(value: ApiIssueComment) -> Self {
        Self {
            id: value.id,
            author: value.user.and_then(|user| user.login),
            created_at: value.created_at,
            updated_at: value.updated_at,
            body: value.body.unwrap_or_default(),
            path: None,
            line: None,
            commit_id: None,
            in_reply_to_id: None,
            pull_request_review_id: None,
            kind: CommentKind::IssueComment,
        }
    }
}
