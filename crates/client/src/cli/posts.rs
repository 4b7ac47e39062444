//! Post feed CLI commands.

use clap::{Parser, Subcommand};

/// Post feed commands.
#[derive(Debug, Parser)]
pub struct PostsCommand {
    #[command(subcommand)]
    pub action: PostsAction,
}

/// Available post actions.
#[derive(Debug, Subcommand)]
pub enum PostsAction {
    /// Fetch the feed and render it, newest first.
    List,
}
