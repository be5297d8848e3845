// SPDX-License-Identifier: Apache-2.0

//! Comment merging and thread-position classification.
//!
//! The merged list always holds review comments first, then issue
//! comments, each in fetch order. Target derivation is a pure filter over
//! [`Comment::is_target`]; the parent of a reply is never looked up.

use crate::models::Comment;

/// Merges the two comment streams into the unified `all_comments` list.
///
/// Review comments come first, issue comments after, both keeping the
/// order they were fetched in.
#[must_use]
pub fn merge_comments(review_comments: Vec<Comment>, issue_comments: Vec<Comment>) -> Vec<Comment> {
    let mut all = review_comments;
    all.extend(issue_comments);
    all
}

/// Extracts the target (non-root) subset of a merged comment list.
///
/// Order is preserved; the input is untouched.
#[must_use]
pub fn target_comments(all_comments: &[Comment]) -> Vec<Comment> {
    all_comments
        .iter()
        .filter(|comment| comment.is_target())
        .cloned()
        .collect()
}
