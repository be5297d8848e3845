// SPDX-License-Identifier: Apache-2.0

//! Error types for prglean.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur during prglean operations.
#[derive(Error, Debug)]
pub enum GleanError {
    /// Malformed PR-number specification (e.g. `"1,x"` or `"5-3"`).
    #[error("invalid PR number spec: {message}")]
    Parse {
        /// What was wrong with the spec.
        message: String,
    },

    /// Non-success HTTP response from a GitHub endpoint.
    #[error("GitHub returned {status} for {endpoint}: {message}")]
    Fetch {
        /// HTTP status code of the failed response.
        status: u16,
        /// Endpoint route that produced the failure.
        endpoint: String,
        /// Error message from the API response body.
        message: String,
    },

    /// Transport-level or payload-decoding failure with no HTTP status.
    #[error("GitHub request to {endpoint} failed: {source}")]
    Api {
        /// Endpoint route the request was addressed to.
        endpoint: String,
        /// Underlying octocrab error.
        #[source]
        source: octocrab::Error,
    },

    /// Missing credentials or invalid configuration.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// Export document could not be serialized.
    #[error("Failed to serialize export document")]
    Export(#[source] serde_json::Error),

    /// Failure writing an export file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GleanError {
    /// Maps an octocrab error for a request against `endpoint` into the
    /// domain taxonomy.
    ///
    /// GitHub error responses (4xx/5xx with a JSON body) become
    /// [`GleanError::Fetch`] carrying the HTTP status; everything else
    /// (connection failures, payload decoding) becomes [`GleanError::Api`]
    /// tagged with the endpoint.
    #[must_use]
    pub fn endpoint(endpoint: &str, err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => GleanError::Fetch {
                status: source.status_code.as_u16(),
                endpoint: endpoint.to_owned(),
                message: source.message,
            },
            other => GleanError::Api {
                endpoint: endpoint.to_owned(),
                source: other,
            },
        }
    }

    /// Whether this error is a GitHub rate-limit rejection.
    ///
    /// GitHub signals primary rate limits as 403 (secondary as 429) with a
    /// message mentioning the limit.
    #[must_use]
    pub fn is_rate_limit(&self) -> bool {
        match self {
            GleanError::Fetch {
                status, message, ..
            } => {
                matches!(status, 403 | 429) && message.to_lowercase().contains("rate limit")
            }
            _ => false,
        }
    }
}

impl From<config::ConfigError> for GleanError {
    fn from(err: config::ConfigError) -> Self {
        GleanError::Config {
            message: err.to_string(),
        }
    }
}
