use dioxus::prelude::*;

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Render an element tree to an HTML string with entities decoded
#[allow(dead_code)]
pub fn render(element: Element) -> String {
    unescape(&dioxus_ssr::render_element(element))
}

fn unescape(html: &str) -> String {
    html.replace("&#x2f;", "/")
        .replace("&#x27;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Class tokens of the first element in the rendered HTML
#[allow(dead_code)]
pub fn root_classes(html: &str) -> Vec<String> {
    let Some(start) = html.find("class=\"") else {
        return Vec::new();
    };
    let rest = &html[start + "class=\"".len()..];
    let end = rest.find('"').unwrap_or(rest.len());
    rest[..end].split_whitespace().map(str::to_string).collect()
}

/// Padding utilities (`p-*`, `px-*`, `pt-*`, ...) among the given tokens
#[allow(dead_code)]
pub fn padding_tokens(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| {
            let Some(rest) = t.strip_prefix('p') else {
                return false;
            };
            let rest = rest.trim_start_matches(['x', 'y', 't', 'r', 'b', 'l', 's', 'e']);
            rest.starts_with('-')
        })
        .cloned()
        .collect()
}
