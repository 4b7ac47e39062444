//! Pretty output formatting.

use issueboard_core::Post;

/// Format a post for display.
pub fn format_post(post: &Post) -> String {
    format!(
        "@{} at {}\n  {}",
        post.user_id,
        post.display_timestamp(),
        post.body
    )
}

/// Format posts for display.
pub fn format_posts(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts yet.".to_string();
    }
    let mut output = format!("POSTS ({})\n", posts.len());
    output.push_str(&"-".repeat(40));
    for post in posts {
        output.push_str(&format!("\n{}", format_post(post)));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_feed_message() {
        assert_eq!(format_posts(&[]), "No posts yet.");
    }

    #[test]
    fn test_lists_each_post() {
        let posts = vec![Post {
            user_id: "alice".to_string(),
            trip_key: "k".to_string(),
            body: "hello".to_string(),
            timestamp: "2024-01-02T03:04:05Z".to_string(),
        }];
        let output = format_posts(&posts);
        assert!(output.starts_with("POSTS (1)"));
        assert!(output.contains("@alice at 2024-01-02 03:04"));
        assert!(output.contains("hello"));
    }
}
