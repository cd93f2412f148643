//! Markdown body rendering.

use pulldown_cmark::{Options, Parser, html};

/// Parser options: `CommonMark` plus the GFM extensions content authors use.
fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_GFM
}

/// Render a markdown body to HTML.
///
/// Pure text transform: the same input always produces byte-identical output,
/// and nothing in the input is evaluated.
#[must_use]
pub fn render_markdown(source: &str) -> String {
    if source.trim().is_empty() {
        return String::new();
    }

    let parser = Parser::new_ext(source, parser_options());
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
