// SPDX-License-Identifier: Apache-2.0

//! PR-number specification parsing.
//!
//! A spec is a comma-separated list of tokens, each a single number or an
//! inclusive `start-end` range: `"1,3-5,7"` expands to `[1, 3, 4, 5, 7]`.

use tracing::debug;

use crate::Result;
use crate::error::GleanError;

/// Expands a PR-number spec into an ordered, deduplicated list.
///
/// Tokens are expanded left-to-right and ranges low-to-high; a number that
/// appears more than once keeps its first position. Whitespace around
/// tokens is tolerated.
///
/// ```
/// use prglean_core::parse_pr_spec;
///
/// let numbers = parse_pr_spec("1,3-5,7").unwrap();
/// assert_eq!(numbers, vec![1, 3, 4, 5, 7]);
/// ```
///
/// # Errors
///
/// Returns [`GleanError::Parse`] when a token is empty or not a
/// non-negative integer, or when a range runs backwards (start > end).
pub fn parse_pr_spec(spec: &str) -> Result<Vec<u64>> {
    let mut numbers = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for raw in spec.split(',') {
        let token = raw.trim();
        if token.is_empty() {
            return Err(GleanError::Parse {
                message: format!("empty token in '{spec}'"),
            });
        }

        if let Some((start, end)) = token.split_once('-') {
            let start = parse_number(start.trim(), spec)?;
            let end = parse_number(end.trim(), spec)?;
            if start > end {
                return Err(GleanError::Parse {
                    message: format!("range {start}-{end} runs backwards"),
                });
            }
            for number in start..=end {
                if seen.insert(number) {
                    numbers.push(number);
                }
            }
        } else {
            let number = parse_number(token, spec)?;
            if seen.insert(number) {
                numbers.push(number);
            }
        }
    }

    debug!(count = numbers.len(), "Parsed PR number spec");
    Ok(numbers)
}

/// Parses one numeric token. Digits only; rejects signs and empty tokens.
fn parse_number(token: &str, spec: &str) -> Result<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GleanError::Parse {
            message: format!("'{token}' is not a PR number (in '{spec}')"),
        });
    }
    token.parse::<u64>().map_err(|_| GleanError::Parse {
        message: format!("'{token}' is not a PR number (in '{spec}')"),
    })
}
