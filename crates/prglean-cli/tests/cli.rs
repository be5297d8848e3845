use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_version() {
    let mut cmd = cargo_bin_cmd!("prglean");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("prglean"));
}

#[test]
fn test_help_contains_all_commands() {
    let mut cmd = cargo_bin_cmd!("prglean");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("bulk"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn test_completion_bash() {
    let mut cmd = cargo_bin_cmd!("prglean");
    cmd.arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("bash").or(predicate::str::contains("complete")));
}

#[test]
fn test_completion_zsh() {
    let mut cmd = cargo_bin_cmd!("prglean");
    cmd.arg("completion")
        .arg("zsh")
        .assert()
        .success()
        .stdout(predicate::str::contains("zsh").or(predicate::str::contains("compdef")));
}

#[test]
fn test_invalid_command() {
    let mut cmd = cargo_bin_cmd!("prglean");
    cmd.arg("invalidcmd")
        .assert()
        .failure()
        .code(predicate::eq(2));
}

#[test]
fn test_fetch_requires_coordinates() {
    let mut cmd = cargo_bin_cmd!("prglean");
    cmd.arg("fetch").assert().failure().code(predicate::eq(2));
}

#[test]
fn test_bulk_rejects_malformed_pr_spec() {
    let mut cmd = cargo_bin_cmd!("prglean");
    cmd.arg("bulk")
        .arg("octo")
        .arg("demo")
        .arg("1,x")
        .arg("--token")
        .arg("test-token")
        .assert()
        .failure()
        .code(predicate::eq(1))
        .stderr(predicate::str::contains("invalid PR number spec"))
        .stderr(predicate::str::contains("1,3-5,7"));
}

#[test]
fn test_missing_token_is_a_config_error() {
    let mut cmd = cargo_bin_cmd!("prglean");
    cmd.env_remove("GITHUB_TOKEN")
        .arg("bulk")
        .arg("octo")
        .arg("demo")
        .arg("1")
        .assert()
        .failure()
        .code(predicate::eq(1))
        .stderr(predicate::str::contains("GITHUB_TOKEN"));
}

/// Mounts a paginated list route: one page of content, then an empty page.
async fn mount_list(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
}

/// Mounts PR #10 with one review, a comment thread, and an issue comment.
async fn mount_active_pr(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/repos/octo/demo/pulls/10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "number": 10,
            "title": "Add frobnicator guard",
            "state": "open",
            "created_at": "2024-01-15T09:00:00Z",
            "updated_at": "2024-01-16T10:00:00Z",
            "merged_at": null,
            "user": {"login": "octocat"},
            "base": {"ref": "main"},
            "head": {"ref": "frobnicator-guard"}
        })))
        .mount(server)
        .await;

    mount_list(
        server,
        "/repos/octo/demo/pulls/10/reviews",
        json!([{
            "id": 800,
            "user": {"login": "carol"},
            "state": "CHANGES_REQUESTED",
            "body": "Needs a guard",
            "submitted_at": "2024-01-15T12:00:00Z",
            "commit_id": "abc123"
        }]),
    )
    .await;

    mount_list(
        server,
        "/repos/octo/demo/pulls/10/comments",
        json!([
            {
                "id": 501,
                "user": {"login": "carol"},
                "created_at": "2024-01-15T12:01:00Z",
                "updated_at": "2024-01-15T12:01:00Z",
                "body": "This can overflow",
                "path": "src/frob.rs",
                "line": 42,
                "commit_id": "abc123",
                "in_reply_to_id": null,
                "pull_request_review_id": 800
            },
            {
                "id": 502,
                "user": {"login": "octocat"},
                "created_at": "2024-01-15T12:05:00Z",
                "updated_at": "2024-01-15T12:05:00Z",
                "body": "Good catch, fixed",
                "path": "src/frob.rs",
                "line": 42,
                "commit_id": "abc123",
                "in_reply_to_id": 501,
                "pull_request_review_id": 800
            }
        ]),
    )
    .await;

    mount_list(
        server,
        "/repos/octo/demo/issues/10/comments",
        json!([{
            "id": 601,
            "user": {"login": "dave"},
            "created_at": "2024-01-15T13:00:00Z",
            "updated_at": "2024-01-15T13:00:00Z",
            "body": "Rebased on main"
        }]),
    )
    .await;
}

async fn mount_missing_pr(server: &MockServer, number: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/octo/demo/pulls/{number}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_writes_json_and_prints_summary() {
    let server = MockServer::start().await;
    mount_active_pr(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("pr10.json");

    let mut cmd = cargo_bin_cmd!("prglean");
    cmd.env("PRGLEAN_GITHUB__API_BASE", server.uri())
        .env("GITHUB_TOKEN", "test-token")
        .arg("fetch")
        .arg("octo")
        .arg("demo")
        .arg("10")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("PR #10: Add frobnicator guard"))
        .stdout(predicate::str::contains("All comments: 3"))
        .stdout(predicate::str::contains("Target comments: 2"))
        .stdout(predicate::str::contains("Data saved to"));

    let text = std::fs::read_to_string(&output).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["pull_request"]["number"], json!(10));
    assert_eq!(doc["all_comments"].as_array().unwrap().len(), 3);
    assert_eq!(doc["target_comments"][0]["id"], json!(502));
    assert_eq!(doc["target_comments"][1]["id"], json!(601));
    assert_eq!(doc["summary"]["review_states"]["CHANGES_REQUESTED"], json!(1));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_missing_pr_fails_with_status() {
    let server = MockServer::start().await;
    mount_missing_pr(&server, 99).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("pr99.json");

    let mut cmd = cargo_bin_cmd!("prglean");
    cmd.env("PRGLEAN_GITHUB__API_BASE", server.uri())
        .env("GITHUB_TOKEN", "test-token")
        .arg("fetch")
        .arg("octo")
        .arg("demo")
        .arg("99")
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .code(predicate::eq(1))
        .stderr(predicate::str::contains("404"));

    assert!(!output.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bulk_writes_all_exports_and_isolates_failures() {
    let server = MockServer::start().await;
    mount_active_pr(&server).await;
    mount_missing_pr(&server, 11).await;

    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("bulk.json");
    let csv_path = dir.path().join("bulk.csv");
    let md_path = dir.path().join("bulk.md");

    let mut cmd = cargo_bin_cmd!("prglean");
    cmd.env("PRGLEAN_GITHUB__API_BASE", server.uri())
        .env("GITHUB_TOKEN", "test-token")
        .arg("bulk")
        .arg("octo")
        .arg("demo")
        .arg("10,11")
        .arg("--delay")
        .arg("0")
        .arg("--output-json")
        .arg(&json_path)
        .arg("--output-csv")
        .arg(&csv_path)
        .arg("--output-md")
        .arg(&md_path)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/2] Fetching PR #10"))
        .stdout(predicate::str::contains("[2/2] Fetching PR #11"))
        .stdout(predicate::str::contains("Summary Report"))
        .stdout(predicate::str::contains("Processed: 1"))
        .stdout(predicate::str::contains("Failed: 1"));

    let text = std::fs::read_to_string(&json_path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["repository"], json!("octo/demo"));
    assert_eq!(doc["pr_numbers"], json!([10, 11]));
    assert_eq!(doc["results"].as_array().unwrap().len(), 1);
    assert_eq!(doc["failures"][0]["pr_number"], json!(11));
    assert!(
        doc["failures"][0]["error"]
            .as_str()
            .unwrap()
            .contains("404")
    );
    assert_eq!(doc["summary"]["total_prs"], json!(1));

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("pr_number,pr_title"));
    assert!(lines[1].starts_with("10,Add frobnicator guard,open,octocat,501,"));

    let md = std::fs::read_to_string(&md_path).unwrap();
    assert!(md.starts_with("# PR Review Comments\n"));
    assert!(md.contains("| PR Number | Comment Body | File Path |"));
    assert!(md.contains("| 10 | This can overflow | src/frob.rs |"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bulk_with_no_successes_exits_nonzero() {
    let server = MockServer::start().await;
    mount_missing_pr(&server, 11).await;

    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("bulk.json");

    let mut cmd = cargo_bin_cmd!("prglean");
    cmd.env("PRGLEAN_GITHUB__API_BASE", server.uri())
        .env("GITHUB_TOKEN", "test-token")
        .arg("bulk")
        .arg("octo")
        .arg("demo")
        .arg("11")
        .arg("--output-json")
        .arg(&json_path)
        .assert()
        .failure()
        .code(predicate::eq(1))
        .stderr(predicate::str::contains("failed"));

    // The document is still written so the failure list survives.
    let text = std::fs::read_to_string(&json_path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["results"].as_array().unwrap().len(), 0);
    assert_eq!(doc["failures"].as_array().unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_quiet_bulk_prints_nothing() {
    let server = MockServer::start().await;
    mount_active_pr(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("bulk.json");

    let mut cmd = cargo_bin_cmd!("prglean");
    cmd.env("PRGLEAN_GITHUB__API_BASE", server.uri())
        .env("GITHUB_TOKEN", "test-token")
        .arg("--quiet")
        .arg("bulk")
        .arg("octo")
        .arg("demo")
        .arg("10")
        .arg("--delay")
        .arg("0")
        .arg("--output-json")
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(json_path.exists());
}
