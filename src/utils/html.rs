//! Rich-text sanitization.
//!
//! CMS fields arrive as HTML strings and are injected with `inner_html`, so
//! they are cleaned with `ammonia` first.

/// Sanitize CMS-provided HTML, dropping scripts, event handlers and other
/// dangerous markup.
pub fn sanitize_html(html: &str) -> String {
    ammonia::clean(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_scripts_and_handlers() {
        let dirty = r#"<p onclick="steal()">Hi<script>alert(1)</script></p>"#;
        let clean = sanitize_html(dirty);
        assert!(clean.contains("<p>Hi</p>"));
        assert!(!clean.contains("script"));
        assert!(!clean.contains("onclick"));
    }

    #[test]
    fn test_keeps_links_and_emphasis() {
        let clean = sanitize_html(r#"<p><em>a</em> <a href="https://example.com">b</a></p>"#);
        assert!(clean.contains("<em>a</em>"));
        assert!(clean.contains(r#"href="https://example.com""#));
    }
}
