//! Submission CLI command.

use clap::{Parser, ValueEnum};

/// Submit a new post to the tracker.
#[derive(Debug, Parser)]
pub struct SubmitCommand {
    /// Post body text.
    #[arg(long)]
    pub body: String,

    /// Display name; defaults to the saved credential.
    #[arg(long)]
    pub user_id: Option<String>,

    /// Trip key; defaults to the saved credential.
    #[arg(long)]
    pub trip_key: Option<String>,

    /// How the post reaches the tracker.
    #[arg(long, value_enum, default_value = "indirect")]
    pub strategy: Strategy,

    /// Tracker repository owner.
    #[arg(long, env = "ISSUEBOARD_OWNER")]
    pub owner: String,

    /// Tracker repository name.
    #[arg(long, env = "ISSUEBOARD_REPO")]
    pub repo: String,

    /// Access token for the direct strategy.
    #[arg(long, env = "ISSUEBOARD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// Submission strategy options.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Strategy {
    /// Open the tracker's pre-filled compose page in the browser.
    Indirect,
    /// Create the issue with an authenticated API call.
    Direct,
}
