// SPDX-License-Identifier: Apache-2.0

//! Error formatting with actionable hints.
//!
//! Maps library errors to short tips so users can fix the problem without
//! reading a stack trace.

use prglean_core::GleanError;

/// Formats an error for terminal display, appending a tip when one is known.
pub fn format_error(err: &anyhow::Error) -> String {
    let base = format!("{err:#}");

    let Some(glean_err) = err.downcast_ref::<GleanError>() else {
        return base;
    };

    match tip_for(glean_err) {
        Some(tip) => format!("{base}\n\nTip: {tip}"),
        None => base,
    }
}

fn tip_for(err: &GleanError) -> Option<String> {
    match err {
        err @ GleanError::Fetch { .. } if err.is_rate_limit() => Some(
            "GitHub is rate limiting this token. Wait a few minutes, or raise \
             --delay to slow down bulk fetches."
                .to_string(),
        ),
        GleanError::Fetch { status: 401, .. } => Some(
            "Check that the token passed via --token or GITHUB_TOKEN is valid \
             and has not expired."
                .to_string(),
        ),
        GleanError::Fetch { status: 404, .. } => Some(
            "Check the owner, repository, and PR number. Private repositories \
             need a token with repo scope."
                .to_string(),
        ),
        GleanError::Parse { .. } => Some(
            "PR numbers are comma-separated values and ranges, e.g. \"1,3-5,7\".".to_string(),
        ),
        GleanError::Config { .. } => {
            let path = prglean_core::config_file_path();
            Some(format!(
                "Pass --token, set GITHUB_TOKEN, or add a [github] section to {}.",
                path.display()
            ))
        }
        GleanError::Api { .. } => Some(
            "The request failed before GitHub returned a status. Check network \
             connectivity and the configured API base URL."
                .to_string(),
        ),
        _ => None,
    }
}
