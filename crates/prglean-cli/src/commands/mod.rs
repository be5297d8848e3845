// SPDX-License-Identifier: Apache-2.0

//! Command implementations.

mod bulk;
mod completion;
mod fetch;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use prglean_core::AppConfig;

use crate::cli::{Commands, OutputContext};

/// Creates a spinner with the given message when the context is
/// interactive, `None` otherwise.
pub(crate) fn maybe_spinner(ctx: OutputContext, msg: &str) -> Option<ProgressBar> {
    if !ctx.is_interactive() {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}").expect("valid template"));
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

/// Dispatches a parsed command to its implementation.
pub async fn run(command: Commands, config: &AppConfig, ctx: OutputContext) -> anyhow::Result<()> {
    match command {
        Commands::Fetch {
            owner,
            repo,
            pr_number,
            token,
            output,
        } => fetch::run(&owner, &repo, pr_number, token.as_deref(), &output, config, ctx).await,
        Commands::Bulk {
            owner,
            repo,
            pr_numbers,
            token,
            output_json,
            output_csv,
            output_md,
            delay,
            summary,
        } => {
            let args = bulk::BulkArgs {
                owner,
                repo,
                pr_numbers,
                token,
                output_json,
                output_csv,
                output_md,
                delay,
                summary,
            };
            bulk::run(args, config, ctx).await
        }
        Commands::Completion { shell } => completion::run(shell),
    }
}
