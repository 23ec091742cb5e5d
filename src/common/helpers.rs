// Helper functions for safe logging and HTML output

/// Escapes text for interpolation into HTML pages
///
/// The greeting and dashboard pages echo user-controlled strings (path
/// segment, identity-provider profile fields); everything goes through
/// this before it reaches a response body.
pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Masks tokens for safe logging
/// Shows only first and last 4 characters
///
/// # Example
/// ```
/// use chores_api::common::helpers::safe_token_log;
/// let masked = safe_token_log("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
/// assert_eq!(masked, "eyJh...VCJ9");
/// ```
pub fn safe_token_log(token: &str) -> String {
    if token.len() > 8 {
        format!("{}...{}", &token[..4], &token[token.len() - 4..])
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape_passthrough() {
        assert_eq!(html_escape("Alice"), "Alice");
    }

    #[test]
    fn test_html_escape_markup() {
        assert_eq!(
            html_escape("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
        );
        assert_eq!(html_escape(r#"a"&b"#), "a&quot;&amp;b");
    }

    #[test]
    fn test_safe_token_log_masks_middle() {
        assert_eq!(safe_token_log("abcdefghijkl"), "abcd...ijkl");
        assert_eq!(safe_token_log("short"), "***");
    }
}
