//! HTML escaping and markdown rendering for strings injected as markup.
//!
//! Text nodes produced by `view!` are escaped by Leptos already; these
//! helpers cover the paths that build HTML by hand (`inner_html`).
//!
//! Rendered markdown never carries raw HTML, images, or links outside
//! `http`, `https`, `mailto`, and scheme-less relative URLs.

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Escape `&`, `<`, `>`, and `"` so user text cannot form markup.
///
/// Not idempotent: an already-escaped entity is escaped again (`&amp;`
/// becomes `&amp;amp;`), never decoded.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

/// Render an AI reply as markdown. Raw HTML in the source is shown as
/// literal text instead of being interpreted. Images are reduced to their
/// alt text and links with a disallowed scheme keep only their label.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut image_depth = 0usize;
    let mut open_links: Vec<bool> = Vec::new();
    let parser = Parser::new_ext(markdown, options).filter_map(move |event| match event {
        Event::Start(Tag::Image { .. }) => {
            image_depth += 1;
            None
        }
        Event::End(TagEnd::Image) => {
            image_depth = image_depth.saturating_sub(1);
            None
        }
        Event::Text(text) | Event::Code(text) if image_depth > 0 => Some(Event::Text(text)),
        _ if image_depth > 0 => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            let keep = is_safe_url(&dest_url);
            open_links.push(keep);
            keep.then(|| Event::Start(Tag::Link { link_type, dest_url, title, id }))
        }
        Event::End(TagEnd::Link) => open_links.pop().unwrap_or(false).then_some(Event::End(TagEnd::Link)),
        Event::Html(raw) => Some(Event::Html(escape_html(&raw).into())),
        Event::InlineHtml(raw) => Some(Event::InlineHtml(escape_html(&raw).into())),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Whether a link target may be rendered as an `href`. Relative URLs pass;
/// absolute ones need an allowed scheme. Whitespace and control characters
/// are ignored the way browsers ignore them when parsing the scheme.
pub fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url.chars().filter(|c| !c.is_whitespace() && !c.is_control()).collect();
    let Some(colon) = cleaned.find(':') else {
        return true;
    };
    if cleaned[..colon].contains(['/', '?', '#']) {
        return true;
    }
    let scheme = cleaned[..colon].to_ascii_lowercase();
    ALLOWED_SCHEMES.contains(&scheme.as_str())
}
