use super::*;

// =============================================================
// escape_html
// =============================================================

#[test]
fn script_tag_is_neutralized() {
    let escaped = escape_html("<script>alert(1)</script>");
    assert_eq!(escaped, "&lt;script&gt;alert(1)&lt;/script&gt;");
    assert!(!escaped.contains('<'));
}

#[test]
fn quotes_and_ampersands_are_escaped() {
    assert_eq!(escape_html(r#"a & "b""#), "a &amp; &quot;b&quot;");
}

#[test]
fn existing_entities_are_escaped_not_decoded() {
    assert_eq!(escape_html("&lt;b&gt;"), "&amp;lt;b&amp;gt;");
}

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(escape_html("héllo wörld 'single'"), "héllo wörld 'single'");
}

// =============================================================
// render_markdown_html
// =============================================================

#[test]
fn markdown_formatting_is_rendered() {
    let html = render_markdown_html("**bold** and `code`");
    assert!(html.contains("<strong>bold</strong>"));
    assert!(html.contains("<code>code</code>"));
}

#[test]
fn raw_block_html_is_shown_as_text() {
    let html = render_markdown_html("<script>alert(1)</script>");
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn inline_html_is_shown_as_text() {
    let html = render_markdown_html("hello <img src=x onerror=alert(1)> there");
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img"));
}

#[test]
fn text_content_is_escaped() {
    let html = render_markdown_html("1 < 2 & 3 > 2");
    assert!(html.contains("1 &lt; 2 &amp; 3 &gt; 2"));
}

#[test]
fn script_links_keep_only_their_label() {
    let html = render_markdown_html("[click me](javascript:alert(document.cookie))");
    assert!(!html.contains("javascript:"));
    assert!(!html.contains("<a"));
    assert!(html.contains("click me"));
}

#[test]
fn obfuscated_script_scheme_is_dropped() {
    let html = render_markdown_html("[x](JaVaScRiPt:alert(1)) and [y](data:text/html,hi)");
    assert!(!html.contains("href"));
}

#[test]
fn images_become_alt_text() {
    let html = render_markdown_html("![tracking pixel](https://evil.example/track.png)");
    assert!(!html.contains("<img"));
    assert!(!html.contains("evil.example"));
    assert!(html.contains("tracking pixel"));
}

#[test]
fn image_inside_link_keeps_link_and_alt() {
    let html = render_markdown_html("[![logo](https://x.example/a.png)](https://example.com)");
    assert!(!html.contains("<img"));
    assert!(html.contains(r#"<a href="https://example.com">logo</a>"#));
}

#[test]
fn web_and_mail_links_are_kept() {
    let html = render_markdown_html("[docs](https://example.com/docs) [mail](mailto:a@b.example) [rel](/help)");
    assert!(html.contains(r#"href="https://example.com/docs""#));
    assert!(html.contains(r#"href="mailto:a@b.example""#));
    assert!(html.contains(r#"href="/help""#));
}

// =============================================================
// is_safe_url
// =============================================================

#[test]
fn url_scheme_allow_list() {
    assert!(is_safe_url("http://example.com"));
    assert!(is_safe_url("HTTPS://example.com"));
    assert!(is_safe_url("mailto:a@b.example"));
    assert!(is_safe_url("relative/path?q=a:b"));
    assert!(is_safe_url("#anchor"));
    assert!(!is_safe_url("javascript:alert(1)"));
    assert!(!is_safe_url(" java\tscript:alert(1)"));
    assert!(!is_safe_url("vbscript:msgbox"));
    assert!(!is_safe_url("data:image/png;base64,AAAA"));
}
