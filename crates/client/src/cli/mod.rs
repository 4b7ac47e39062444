//! CLI command definitions.

pub mod credentials;
pub mod posts;
pub mod submit;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the issueboard bulletin board.
#[derive(Debug, Parser)]
#[command(name = "issueboard")]
#[command(about = "CLI client for an issue-tracker-backed bulletin board", long_about = None)]
pub struct Cli {
    /// Base URL the published feed is served from.
    #[arg(long, env = "ISSUEBOARD_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
    /// HTML fragment with sanitized fields.
    Html,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read the published post feed.
    Posts(posts::PostsCommand),
    /// Submit a new post to the tracker.
    Submit(submit::SubmitCommand),
    /// Manage the saved credential pair.
    Credentials(credentials::CredentialsCommand),
}
