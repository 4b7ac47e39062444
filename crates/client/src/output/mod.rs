//! Output formatting functions.

pub mod html;
pub mod json;
pub mod pretty;

use issueboard_core::Post;

use crate::cli::OutputFormat;

/// Render the post list in the selected format.
pub fn format_posts(posts: &[Post], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(&posts),
        OutputFormat::Pretty => pretty::format_posts(posts),
        OutputFormat::Html => html::render_posts(posts),
    }
}
