//! Credential CLI commands.

use clap::{Parser, Subcommand};

/// Saved credential management commands.
#[derive(Debug, Parser)]
pub struct CredentialsCommand {
    #[command(subcommand)]
    pub action: CredentialsAction,
}

/// Available credential actions.
#[derive(Debug, Subcommand)]
pub enum CredentialsAction {
    /// Show the saved pair.
    Show,
    /// Remove the saved pair.
    Clear,
}
