//! Rendering assistant text (light markdown) to HTML.
//!
//! Assistant lines use `**bold**` for emphasis and plain newlines for
//! layout. Raw HTML is dropped so text echoed back from the user or the
//! prediction backend can never inject markup.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// Render `text` to an HTML fragment.
#[must_use]
pub fn render_markup(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::SoftBreak => Some(Event::HardBreak),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
