// SPDX-License-Identifier: Apache-2.0

//! GitHub token resolution and client construction.
//!
//! Token resolution priority chain:
//! 1. `--token` command-line flag
//! 2. `GITHUB_TOKEN` environment variable
//!
//! Missing both is a configuration error: every endpoint this tool
//! touches requires authentication for private repositories and gets
//! much higher rate limits with it.

use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::Result;
use crate::error::GleanError;

/// Source of the GitHub authentication token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    /// Token from the `--token` command-line flag.
    Flag,
    /// Token from the `GITHUB_TOKEN` environment variable.
    Environment,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSource::Flag => write!(f, "command-line flag"),
            TokenSource::Environment => write!(f, "environment variable"),
        }
    }
}

/// Resolves a GitHub token using the priority chain.
///
/// Returns the token and its source.
///
/// # Errors
///
/// Returns [`GleanError::Config`] when neither the flag nor
/// `GITHUB_TOKEN` provides a non-empty token.
#[instrument(skip(flag_token))]
pub fn resolve_token(flag_token: Option<&str>) -> Result<(SecretString, TokenSource)> {
    // Priority 1: --token flag
    if let Some(token) = flag_token
        && !token.is_empty()
    {
        debug!("Using token from --token flag");
        return Ok((SecretString::from(token.to_owned()), TokenSource::Flag));
    }

    // Priority 2: GITHUB_TOKEN environment variable
    if let Ok(token) = std::env::var("GITHUB_TOKEN")
        && !token.is_empty()
    {
        debug!("Using token from GITHUB_TOKEN environment variable");
        return Ok((SecretString::from(token), TokenSource::Environment));
    }

    Err(GleanError::Config {
        message: "No GitHub token found. Pass --token or set the GITHUB_TOKEN \
                  environment variable."
            .to_string(),
    })
}

/// Creates an authenticated Octocrab client against `api_base`.
///
/// # Errors
///
/// Returns [`GleanError::Config`] when `api_base` is not a valid URI or
/// the client cannot be constructed.
#[instrument(skip(token), fields(api_base = %api_base))]
pub fn create_client(token: &SecretString, api_base: &str) -> Result<Octocrab> {
    let client = Octocrab::builder()
        .personal_token(token.expose_secret().to_string())
        .base_uri(api_base)
        .map_err(|e| GleanError::Config {
            message: format!("Invalid API base URI '{api_base}': {e}"),
        })?
        .build()
        .map_err(|e| GleanError::Config {
            message: format!("Failed to build GitHub client: {e}"),
        })?;

    info!("Created authenticated GitHub client");
    Ok(client)
}
