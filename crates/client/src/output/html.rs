//! HTML output formatting.

use issueboard_core::sanitize::escape;
use issueboard_core::Post;

/// Render the post list as an HTML fragment.
///
/// Every untrusted field passes through [`escape`] exactly once before it
/// is interpolated; the tag and attribute scaffolding is static, and the
/// timestamp is date-derived rather than user-controlled.
pub fn render_posts(posts: &[Post]) -> String {
    if posts.is_empty() {
        return r#"<section class="post-list">
  <div class="subtitle">No posts yet. Be the first!</div>
</section>"#
            .to_string();
    }

    let mut output = String::from("<section class=\"post-list\">\n");
    for post in posts {
        output.push_str(&format!(
            r#"  <article class="post-card">
    <div class="post-meta">
      <span class="post-user">@{user}</span>
      <time class="post-time">{time}</time>
    </div>
    <div class="post-body">{body}</div>
  </article>
"#,
            user = escape(&post.user_id),
            time = post.display_timestamp(),
            body = escape(&post.body),
        ));
    }
    output.push_str("</section>");
    output
}
