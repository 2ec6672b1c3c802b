//! Window scrolling through the webview.
//!
//! Scroll position and smooth scrolling aren't exposed as element events,
//! so these go through `document::eval`.

use dioxus::prelude::*;

/// Reports `window.scrollY` now and on every scroll
const SCROLL_LISTENER_JS: &str = r#"
    const report = () => dioxus.send(window.scrollY);
    window.addEventListener('scroll', report, { passive: true });
    report();
"#;

/// Start listening for scroll offsets. Keep the returned handle alive and
/// `recv::<f64>()` on it.
pub fn watch_scroll() -> document::Eval {
    document::eval(SCROLL_LISTENER_JS)
}

/// Smoothly scroll to the top of the page
pub fn scroll_to_top() {
    let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}

/// Smoothly scroll the element with `id` into view
pub fn scroll_into_view(id: &str) {
    let _ = document::eval(&scroll_into_view_js(id));
}

fn scroll_into_view_js(id: &str) -> String {
    // Debug formatting quotes and escapes the id as a JS string literal
    format!("document.getElementById({id:?})?.scrollIntoView({{ behavior: 'smooth' }});")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_into_view_quotes_id() {
        assert_eq!(
            scroll_into_view_js("fleet"),
            r#"document.getElementById("fleet")?.scrollIntoView({ behavior: 'smooth' });"#
        );
    }

    #[test]
    fn scroll_into_view_escapes_quotes() {
        let js = scroll_into_view_js(r#"a"b"#);
        assert!(js.contains(r#"getElementById("a\"b")"#));
    }
}
