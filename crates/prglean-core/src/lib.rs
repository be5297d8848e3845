// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # prglean Core
//!
//! Core library for the prglean CLI - PR review activity aggregation.
//!
//! This crate provides reusable components for:
//! - GitHub API integration (authentication, paginated fetching)
//! - Comment classification (review vs. discussion, root vs. reply)
//! - Summary aggregation over reviews and comments
//! - Bulk fetching across PR ranges with per-PR failure isolation
//! - Export serialization (JSON, CSV, Markdown)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prglean_core::{Result, create_client, fetch_pr_activity, resolve_token};
//!
//! # async fn example() -> Result<()> {
//! // Resolve a token from the flag or GITHUB_TOKEN
//! let (token, _source) = resolve_token(None)?;
//!
//! // Build a client and fetch one PR's review activity
//! let client = create_client(&token, "https://api.github.com")?;
//! let result = fetch_pr_activity(&client, "rust-lang", "cargo", 12345, 100).await?;
//! println!(
//!     "{} comments, {} in threads",
//!     result.summary.total_all_comments, result.summary.total_target_comments
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`bulk`] - Sequential multi-PR orchestration
//! - [`classify`] - Comment merging and target filtering
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types
//! - [`export`] - JSON/CSV/Markdown serialization
//! - [`fetch`] - Single-PR fetch pipeline
//! - [`github`] - GitHub API (auth, pagination, endpoints)
//! - [`models`] - Domain types and API payload conversion
//! - [`range`] - PR-number range parsing
//! - [`report`] - Bulk aggregate reporting
//! - [`summary`] - Per-PR summary aggregation
//! - [`utils`] - Text truncation for terminal previews

// ============================================================================
// Error Handling
// ============================================================================

pub use error::GleanError;

/// Convenience Result type for prglean operations.
///
/// This is equivalent to `std::result::Result<T, GleanError>`.
pub type Result<T> = std::result::Result<T, GleanError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{AppConfig, FetchConfig, GithubConfig, config_dir, config_file_path, load_config};

// ============================================================================
// Range Parsing
// ============================================================================

pub use range::parse_pr_spec;

// ============================================================================
// Domain Models
// ============================================================================

pub use models::{
    Comment, CommentKind, FetchResult, PrState, PullRequestInfo, Review, ReviewState,
};

// ============================================================================
// Classification & Aggregation
// ============================================================================

pub use classify::{merge_comments, target_comments};
pub use report::BulkReport;
pub use summary::{CountMap, Summary};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::auth::{TokenSource, create_client, resolve_token};
pub use github::comments::fetch_issue_comments;
pub use github::pulls::{fetch_pull_request, fetch_review_comments, fetch_reviews};

// ============================================================================
// Fetch Pipelines
// ============================================================================

pub use bulk::{BulkEvent, BulkFailure, BulkResult, run_bulk};
pub use fetch::fetch_pr_activity;

// ============================================================================
// Export
// ============================================================================

pub use export::json::BulkDocument;

// ============================================================================
// Utilities
// ============================================================================

pub use utils::{truncate, truncate_with_suffix};

// ============================================================================
// Modules
// ============================================================================

pub mod bulk;
pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod github;
pub mod models;
pub mod range;
pub mod report;
pub mod summary;
pub mod utils;
