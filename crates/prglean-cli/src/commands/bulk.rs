// SPDX-License-Identifier: Apache-2.0

//! `bulk` command: review activity across a set of pull requests.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::bail;
use console::style;
use prglean_core::{
    AppConfig, BulkDocument, create_client, export, parse_pr_spec, resolve_token, run_bulk,
};
use tracing::debug;

use crate::cli::OutputContext;
use crate::output;

/// Arguments to the bulk command, as parsed from the CLI.
pub(crate) struct BulkArgs {
    pub owner: String,
    pub repo: String,
    pub pr_numbers: String,
    pub token: Option<String>,
    pub output_json: PathBuf,
    pub output_csv: Option<PathBuf>,
    pub output_md: Option<PathBuf>,
    pub delay: Option<f64>,
    pub summary: bool,
}

pub(crate) async fn run(
    args: BulkArgs,
    config: &AppConfig,
    ctx: OutputContext,
) -> anyhow::Result<()> {
    let pr_numbers = parse_pr_spec(&args.pr_numbers)?;
    let (token, _) = resolve_token(args.token.as_deref())?;
    let client = create_client(&token, &config.github.api_base)?;

    // Negative, NaN, and infinite delays all collapse to no delay.
    let delay_seconds = args.delay.unwrap_or(config.fetch.delay_seconds);
    let delay = Duration::try_from_secs_f64(delay_seconds).unwrap_or(Duration::ZERO);
    debug!(delay_seconds, total = pr_numbers.len(), "Starting bulk fetch");

    if !ctx.quiet {
        println!(
            "Processing {} pull requests from {}/{}",
            pr_numbers.len(),
            args.owner,
            args.repo
        );
    }

    let outcome = run_bulk(
        &client,
        &args.owner,
        &args.repo,
        &pr_numbers,
        config.github.per_page,
        delay,
        |event| {
            if !ctx.quiet {
                output::bulk::print_progress(event);
            }
        },
    )
    .await;

    let document = BulkDocument::new(&args.owner, &args.repo, &pr_numbers, outcome);

    export::json::write_bulk(&args.output_json, &document)?;
    report_export(ctx, &args.output_json);

    if let Some(path) = &args.output_csv {
        export::csv::write(path, &document.results)?;
        report_export(ctx, path);
    }

    if let Some(path) = &args.output_md {
        export::markdown::write(path, &document.results)?;
        report_export(ctx, path);
    }

    // --summary is explicitly requested output, so it ignores --quiet.
    if args.summary {
        let mut stdout = std::io::stdout();
        output::bulk::render_report(&mut stdout, &document.summary)?;
    }

    if !ctx.quiet {
        let mut stdout = std::io::stdout();
        output::bulk::render_outcome(&mut stdout, document.results.len(), &document.failures)?;
    }

    if document.results.is_empty() {
        bail!("all {} PRs failed to fetch", document.failures.len());
    }

    Ok(())
}

fn report_export(ctx: OutputContext, path: &std::path::Path) {
    if !ctx.quiet {
        println!(
            "{}",
            style(format!("Data exported to {}", path.display())).green()
        );
    }
}
