// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the CLI.
//!
//! Uses `tracing-subscriber` with an env-filter layer. The `RUST_LOG`
//! environment variable takes precedence over the flag-derived default.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initializes the global tracing subscriber.
///
/// Filter precedence:
/// 1. `RUST_LOG` environment variable, if set
/// 2. `--verbose`: debug-level for prglean, warn for octocrab
/// 3. `--quiet`: errors only
/// 4. Default: warnings and errors
pub fn init_logging(quiet: bool, verbose: bool) {
    let default_filter = if verbose {
        "prglean_core=debug,prglean_cli=debug,octocrab=warn"
    } else if quiet {
        "prglean_core=error,prglean_cli=error,octocrab=error"
    } else {
        "prglean_core=warn,prglean_cli=warn,octocrab=error"
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
