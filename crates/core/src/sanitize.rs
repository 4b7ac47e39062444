//! Markup sanitization for untrusted post fields.

/// Escape HTML special characters to prevent markup injection.
///
/// Ampersand is replaced first so the entities produced by the later
/// replacements are not themselves re-escaped. The function is total and
/// deliberately not idempotent: escaping twice double-escapes, so callers
/// must apply it exactly once, at the point a value is interpolated into
/// markup. Values placed into URLs use percent-encoding instead.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_special_characters() {
        assert_eq!(escape("<a>&'\""), "&lt;a&gt;&amp;&#039;&quot;");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(escape("hello world"), "hello world");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_output_has_no_raw_special_characters() {
        let escaped = escape("<script>alert(\"x&y's\")</script>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        // Every remaining ampersand starts an entity we produced.
        for (i, _) in escaped.match_indices('&') {
            let rest = &escaped[i..];
            assert!(
                rest.starts_with("&amp;")
                    || rest.starts_with("&lt;")
                    || rest.starts_with("&gt;")
                    || rest.starts_with("&quot;")
                    || rest.starts_with("&#039;"),
                "unexpected ampersand in {escaped}"
            );
        }
    }

    #[test]
    fn test_not_idempotent() {
        assert_eq!(escape(&escape("&")), "&amp;amp;");
    }
}
