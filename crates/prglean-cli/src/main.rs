// SPDX-License-Identifier: Apache-2.0

//! prglean CLI entry point.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use anyhow::Context;
use clap::Parser;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.verbose);
    let ctx = OutputContext::from_cli(cli.quiet, cli.verbose);

    if let Err(e) = run(cli, ctx).await {
        eprintln!("Error: {}", errors::format_error(&e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, ctx: OutputContext) -> anyhow::Result<()> {
    let config = prglean_core::load_config().context("Failed to load configuration")?;
    commands::run(cli.command, &config, ctx).await
}
