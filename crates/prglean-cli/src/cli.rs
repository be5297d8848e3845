// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for prglean.
//!
//! Uses clap's derive API for declarative CLI parsing.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Extended help text for the completion subcommand with shell-specific examples.
const COMPLETION_HELP: &str = r#"EXAMPLES

  bash
    Add to ~/.bashrc or ~/.bash_profile:
      eval "$(prglean completion bash)"

  zsh
    Generate completion file:
      mkdir -p ~/.zsh/completions
      prglean completion zsh > ~/.zsh/completions/_prglean

    Add to ~/.zshrc (before compinit):
      fpath=(~/.zsh/completions $fpath)
      autoload -U compinit && compinit -i

  fish
    Generate completion file:
      prglean completion fish > ~/.config/fish/completions/prglean.fish
"#;

/// Global output configuration passed to commands.
#[derive(Clone, Copy)]
pub struct OutputContext {
    /// Suppress non-essential output (spinners, progress)
    pub quiet: bool,
    /// Enable verbose output (debug-level logging)
    pub verbose: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet
    }
}

/// prglean - PR review activity aggregation.
///
/// Fetches reviews, line comments, and discussion comments for one or
/// many pull requests and exports them as JSON, CSV, or Markdown.
#[derive(Parser)]
#[command(name = "prglean")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Suppress non-essential output (spinners, progress)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch review activity for one pull request
    Fetch {
        /// Repository owner (user or organization)
        owner: String,

        /// Repository name
        repo: String,

        /// Pull request number
        pr_number: u64,

        /// GitHub token (falls back to the GITHUB_TOKEN environment variable)
        #[arg(long)]
        token: Option<String>,

        /// Output JSON file
        #[arg(long, value_name = "FILE", default_value = "review_comments.json")]
        output: PathBuf,
    },

    /// Fetch review activity for a set of pull requests
    Bulk {
        /// Repository owner (user or organization)
        owner: String,

        /// Repository name
        repo: String,

        /// PR numbers as a comma-separated list with ranges (e.g. "1,3-5,7")
        pr_numbers: String,

        /// GitHub token (falls back to the GITHUB_TOKEN environment variable)
        #[arg(long)]
        token: Option<String>,

        /// Output JSON file
        #[arg(
            long,
            value_name = "FILE",
            default_value = "bulk_review_comments.json"
        )]
        output_json: PathBuf,

        /// Also export one CSV row per comment
        #[arg(long, value_name = "FILE")]
        output_csv: Option<PathBuf>,

        /// Also export a Markdown comment table
        #[arg(long, value_name = "FILE")]
        output_md: Option<PathBuf>,

        /// Seconds to wait between PRs (overrides the configured default of 1.0)
        #[arg(long, value_name = "SECONDS")]
        delay: Option<f64>,

        /// Print an aggregate report after fetching
        #[arg(long)]
        summary: bool,
    },

    /// Generate shell completion scripts
    #[command(after_long_help = COMPLETION_HELP)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
