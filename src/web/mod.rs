//! Web front-ends for the two studio tools
//!
//! Server-rendered single-page forms: a GET shows the form, a POST to the
//! same route runs the pipeline and re-renders the page with results
//! embedded as data URIs, so no generated artifact needs separate hosting.

pub mod image_app;
pub mod summary_app;

pub use image_app::ImageAppState;
pub use summary_app::SummaryAppState;

use axum::Json;

/// Minimal HTML escaping for user-supplied text interpolated into pages.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Full-page shell shared by both apps.
pub(crate) fn page(title: &str, css: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>",
        title, css, body
    )
}

/// GET /health - liveness probe shared by both apps.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_neutralises_markup() {
        assert_eq!(
            escape_html("<script>alert(\"x\")</script> & 'quotes'"),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;quotes&#39;"
        );
    }

    #[test]
    fn test_page_shell_wraps_body() {
        let html = page("Title", "body {}", "<p>hello</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Title</title>"));
        assert!(html.contains("<p>hello</p>"));
    }
}
