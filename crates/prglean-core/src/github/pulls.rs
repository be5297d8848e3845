// SPDX-License-Identifier: Apache-2.0

//! Pull request endpoints: metadata, reviews, and diff-anchored comments.

use octocrab::Octocrab;
use tracing::{debug, instrument};

use crate::Result;
use crate::github::paginate::{fetch_all_pages, fetch_one};
use crate::models::{ApiPullRequest, ApiReview, ApiReviewComment, Comment, PullRequestInfo, Review};

/// Fetches the metadata snapshot for one pull request.
///
/// # Errors
///
/// Returns [`crate::GleanError::Fetch`] on a non-success response (404
/// for an unknown PR, 401 for bad credentials) and
/// [`crate::GleanError::Api`] on transport failures.
#[instrument(skip(client), fields(owner = %owner, repo = %repo, number))]
pub async fn fetch_pull_request(
    client: &Octocrab,
    owner: &str,
    repo: &str,
    number: u64,
) -> Result<PullRequestInfo> {
    let route = format!("/repos/{owner}/{repo}/pulls/{number}");
    let raw: ApiPullRequest = fetch_one(client, &route).await?;
    let info = PullRequestInfo::from(raw);
    debug!(state = %info.state, "Fetched pull request");
    Ok(info)
}

/// Fetches all submitted reviews for a pull request, in API return order.
///
/// # Errors
///
/// Same taxonomy as [`fetch_pull_request`].
#[instrument(skip(client), fields(owner = %owner, repo = %repo, number))]
pub async fn fetch_reviews(
    client: &Octocrab,
    owner: &str,
    repo: &str,
    number: u64,
    per_page: u8,
) -> Result<Vec<Review>> {
    let route = format!("/repos/{owner}/{repo}/pulls/{number}/reviews");
    let raw: Vec<ApiReview> = fetch_all_pages(client, &route, per_page).await?;
    Ok(raw.into_iter().map(Review::from).collect())
}

/// Fetches all diff-anchored review comments for a pull request, in API
/// return order.
///
/// # Errors
///
/// Same taxonomy as [`fetch_pull_request`].
#[instrument(skip(client), fields(owner = %owner, repo = %repo, number))]
pub async fn fetch_review_comments(
    client: &Octocrab,
    owner: &str,
    repo: &str,
    number: u64,
    per_page: u8,
) -> Result<Vec<Comment>> {
    let route = format!("/repos/{owner}/{repo}/pulls/{number}/comments");
    let raw: Vec<ApiReviewComment> = fetch_all_pages(client, &route, per_page).await?;
    Ok(raw.into_iter().map(Comment::from).collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::error::GleanError;
    use crate::models::{CommentKind, PrState, ReviewState};

    async fn client_for(server: &MockServer) -> Octocrab {
        Octocrab::builder()
            .base_uri(server.uri())
            .unwrap()
            .build()
            .unwrap()
    }

    async fn mount_list(server: &MockServer, route: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .and(wiremock::matchers::query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path(route))
            .and(wiremock::matchers::query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_fetch_pull_request_maps_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/widgets/pulls/10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "number": 10,
                "title": "Refactor parser",
                "state": "closed",
                "created_at": "2025-06-01T00:00:00Z",
                "updated_at": "2025-06-05T00:00:00Z",
                "merged_at": "2025-06-05T00:00:00Z",
                "user": { "login": "octocat", "id": 1 },
                "base": { "ref": "main", "sha": "aaa" },
                "head": { "ref": "refactor-parser", "sha": "bbb" },
                "html_url": "https://example.invalid/pr/10"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let info = fetch_pull_request(&client, "octo", "widgets", 10)
            .await
            .unwrap();

        assert_eq!(info.number, 10);
        assert_eq!(info.title, "Refactor parser");
        assert_eq!(info.state, PrState::Merged);
        assert_eq!(info.author, "octocat");
        assert_eq!(info.base_branch, "main");
        assert_eq!(info.head_branch, "refactor-parser");
    }

    #[tokio::test]
    async fn test_fetch_pull_request_unknown_number_is_fetch_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/widgets/pulls/999"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let err = fetch_pull_request(&client, "octo", "widgets", 999)
            .await
            .unwrap_err();

        match err {
            GleanError::Fetch {
                status, endpoint, ..
            } => {
                assert_eq!(status, 404);
                assert_eq!(endpoint, "/repos/octo/widgets/pulls/999");
            }
            other => panic!("expected Fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_reviews_keeps_return_order() {
        let server = MockServer::start().await;
        mount_list(
            &server,
            "/repos/octo/widgets/pulls/10/reviews",
            json!([
                {
                    "id": 900,
                    "user": { "login": "carol" },
                    "state": "CHANGES_REQUESTED",
                    "body": "Needs a test.",
                    "submitted_at": "2025-06-02T09:00:00Z",
                    "commit_id": "abc123"
                },
                {
                    "id": 901,
                    "user": null,
                    "state": "APPROVED",
                    "body": null,
                    "submitted_at": "2025-06-03T09:00:00Z",
                    "commit_id": "def456"
                }
            ]),
        )
        .await;

        let client = client_for(&server).await;
        let reviews = fetch_reviews(&client, "octo", "widgets", 10, 100)
            .await
            .unwrap();

        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].id, 900);
        assert_eq!(reviews[0].author.as_deref(), Some("carol"));
        assert_eq!(reviews[0].state, ReviewState::ChangesRequested);
        assert_eq!(reviews[1].author, None);
        assert_eq!(reviews[1].state, ReviewState::Approved);
    }

    #[tokio::test]
    async fn test_fetch_review_comments_marks_kind_and_replies() {
        let server = MockServer::start().await;
        mount_list(
            &server,
            "/repos/octo/widgets/pulls/10/comments",
            json!([
                {
                    "id": 501,
                    "user": { "login": "carol" },
                    "created_at": "2025-06-02T09:01:00Z",
                    "updated_at": "2025-06-02T09:01:00Z",
                    "body": "This loop allocates per iteration.",
                    "path": "src/parser.rs",
                    "line": 42,
                    "commit_id": "abc123",
                    "in_reply_to_id": null,
                    "pull_request_review_id": 900
                },
                {
                    "id": 502,
                    "user": { "login": "octocat" },
                    "created_at": "2025-06-02T10:00:00Z",
                    "updated_at": "2025-06-02T10:00:00Z",
                    "body": "Fixed in the next commit.",
                    "path": "src/parser.rs",
                    "line": 42,
                    "commit_id": "abc123",
                    "in_reply_to_id": 501,
                    "pull_request_review_id": 900
                }
            ]),
        )
        .await;

        let client = client_for(&server).await;
        let comments = fetch_review_comments(&client, "octo", "widgets", 10, 100)
            .await
            .unwrap();

        assert_eq!(comments.len(), 2);
        assert!(
            comments
                .iter()
                .all(|c| c.kind == CommentKind::ReviewComment)
        );
        assert!(!comments[0].is_target());
        assert!(comments[1].is_target());
        assert_eq!(comments[1].in_reply_to_id, Some(501));
        assert_eq!(comments[0].path.as_deref(), Some("src/parser.rs"));
    }
}
