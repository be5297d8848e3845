// SPDX-License-Identifier: Apache-2.0

//! JSON export for single-PR results and bulk documents.
//!
//! Output is pretty-printed with a trailing newline. Null fields stay
//! present as explicit `null`, never omitted, so consumers get a stable
//! shape.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::bulk::{BulkFailure, BulkResult};
use crate::error::GleanError;
use crate::models::FetchResult;
use crate::report::BulkReport;

/// Top-level document written by a bulk run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkDocument {
    /// Repository in `owner/repo` form.
    pub repository: String,
    /// PR numbers as parsed from the input, in input order.
    pub pr_numbers: Vec<u64>,
    /// When the document was assembled (RFC 3339).
    pub fetched_at: String,
    /// Per-PR results, in input order.
    pub results: Vec<FetchResult>,
    /// PRs that failed, in input order.
    pub failures: Vec<BulkFailure>,
    /// Aggregate report across all successful results.
    pub summary: BulkReport,
}

impl BulkDocument {
    /// Assembles the bulk document from a finished run.
    #[must_use]
    pub fn new(owner: &str, repo: &str, pr_numbers: &[u64], outcome: BulkResult) -> Self {
        let summary = BulkReport::compute(&outcome.results);
        Self {
            repository: format!("{owner}/{repo}"),
            pr_numbers: pr_numbers.to_vec(),
            fetched_at: chrono::Utc::now().to_rfc3339(),
            results: outcome.results,
            failures: outcome.failures,
            summary,
        }
    }
}

/// Renders one PR's activity as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`GleanError::Export`] if serialization fails.
pub fn render_single(result: &FetchResult) -> Result<String> {
    let mut out = serde_json::to_string_pretty(result).map_err(GleanError::Export)?;
    out.push('\n');
    Ok(out)
}

/// Renders a bulk document as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`GleanError::Export`] if serialization fails.
pub fn render_bulk(document: &BulkDocument) -> Result<String> {
    let mut out = serde_json::to_string_pretty(document).map_err(GleanError::Export)?;
    out.push('\n');
    Ok(out)
}

/// Writes one PR's activity to `path` as JSON.
///
/// # Errors
///
/// Returns [`GleanError::Export`] on serialization failure and
/// [`GleanError::Io`] on write failure.
pub fn write_single(path: &Path, result: &FetchResult) -> Result<()> {
    std::fs::write(path, render_single(result)?)?;
    Ok(())
}

/// Writes a bulk document to `path` as JSON.
///
/// # Errors
///
/// Returns [`GleanError::Export`] on serialization failure and
/// [`GleanError::Io`] on write failure.
pub fn write_bulk(path: &Path, document: &BulkDocument) -> Result<()> {
    std::fs::write(path, render_bulk(document)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::{issue_comment, pr_info, review_comment};
    use crate::models::{FetchResult, PrState};
    use crate::summary::Summary;

    fn sample_result() -> FetchResult {
        let all_comments = vec![review_comment(501, None), issue_comment(601)];
        let target_comments = vec![issue_comment(601)];
        let summary = Summary::compute(&[], &all_comments, &target_comments);
        FetchResult {
            pull_request: pr_info(10, PrState::Open),
            reviews: vec![],
            all_comments,
            target_comments,
            summary,
            fetched_at: "2025-06-05T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_single_render_keeps_nulls_and_trailing_newline() {
        let rendered = render_single(&sample_result()).unwrap();
        assert!(rendered.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["pull_request"]["number"], 10);
        // Issue comment anchor fields are explicit nulls.
        let issue = &value["all_comments"][1];
        assert_eq!(issue["type"], "issue_comment");
        assert!(issue.get("path").is_some_and(serde_json::Value::is_null));
        assert!(
            issue
                .get("in_reply_to_id")
                .is_some_and(serde_json::Value::is_null)
        );
    }

    #[test]
    fn test_bulk_document_shape() {
        let outcome = BulkResult {
            results: vec![sample_result()],
            failures: vec![BulkFailure {
                pr_number: 11,
                error: "GitHub returned 404 for /repos/octo/widgets/pulls/11: Not Found"
                    .to_string(),
            }],
        };
        let document = BulkDocument::new("octo", "widgets", &[10, 11], outcome);
        assert_eq!(document.repository, "octo/widgets");
        assert_eq!(document.pr_numbers, vec![10, 11]);
        assert_eq!(document.summary.total_prs, 1);

        let rendered = render_bulk(&document).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["repository"], "octo/widgets");
        assert_eq!(value["failures"][0]["pr_number"], 11);
        assert!(
            value["failures"][0]["error"]
                .as_str()
                .unwrap()
                .contains("404")
        );
        assert_eq!(value["summary"]["total_prs"], 1);
    }

    #[test]
    fn test_write_single_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("review_comments.json");
        write_single(&path, &sample_result()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["pull_request"]["number"], 10);
    }
}
