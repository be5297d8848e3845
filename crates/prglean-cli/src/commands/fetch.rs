// SPDX-License-Identifier: Apache-2.0

//! `fetch` command: review activity for a single pull request.

use std::path::Path;

use console::style;
use prglean_core::{AppConfig, create_client, export, fetch_pr_activity, resolve_token};

use crate::cli::OutputContext;
use crate::commands::maybe_spinner;
use crate::output;

pub(crate) async fn run(
    owner: &str,
    repo: &str,
    pr_number: u64,
    token: Option<&str>,
    output_path: &Path,
    config: &AppConfig,
    ctx: OutputContext,
) -> anyhow::Result<()> {
    let (token, _) = resolve_token(token)?;
    let client = create_client(&token, &config.github.api_base)?;

    let spinner = maybe_spinner(ctx, &format!("Fetching PR #{pr_number}..."));
    let fetched = fetch_pr_activity(&client, owner, repo, pr_number, config.github.per_page).await;
    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }
    let result = fetched?;

    export::json::write_single(output_path, &result)?;

    if !ctx.quiet {
        let mut stdout = std::io::stdout();
        output::fetch::render_summary(&mut stdout, &result)?;
        println!();
        println!(
            "{}",
            style(format!("Data saved to {}", output_path.display())).green()
        );
    }

    Ok(())
}
