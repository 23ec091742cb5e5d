// src/pages/handlers.rs

use axum::extract::Path;
use axum::response::Html;

use crate::common::html_escape;

/// GET / - Landing page
pub async fn index() -> Html<String> {
    Html(render_greeting(None))
}

/// GET /:name - Greeting page with a caller-supplied name
pub async fn greet(Path(name): Path<String>) -> Html<String> {
    Html(render_greeting(Some(&name)))
}

fn render_greeting(name: Option<&str>) -> String {
    let greeting = match name {
        Some(n) => format!("Hello, {}!", html_escape(n)),
        None => "Hello, World!".to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Chores</title></head>
<body>
    <h1>{greeting}</h1>
    <p><a href="/login">Log in</a> to see your dashboard.</p>
    <p>The chores API lives under <code>/api/chores</code>.</p>
</body>
</html>
"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_defaults_to_world() {
        let page = render_greeting(None);
        assert!(page.contains("Hello, World!"));
    }

    #[test]
    fn test_greeting_escapes_name() {
        let page = render_greeting(Some("<b>Ada</b>"));
        assert!(page.contains("Hello, &lt;b&gt;Ada&lt;/b&gt;!"));
        assert!(!page.contains("<b>Ada</b>"));
    }
}
