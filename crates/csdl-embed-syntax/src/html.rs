//! HTML sink: folds classifier events into a markup fragment.

use crate::classifier::{Delimiter, Event};

pub const NBSP: &str = "&nbsp;";
pub const LINE_BREAK: &str = "<br/>";
/// Rendered for tabs and `\t` escapes.
pub const INDENT: &str = "&nbsp;&nbsp;";

/// Knobs for [`render_html`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    /// HTML-escape word text. Off by default: words are emitted verbatim.
    pub escape_text: bool,
}

/// Render events as a fragment of `<span class="category-…">` words and
/// literal delimiter markup.
pub fn render_html(events: &[Event], options: &HtmlOptions) -> String {
    let mut out = String::new();

    for event in events {
        match event {
            Event::Word { category, text } => {
                out.push_str("<span class=\"");
                out.push_str(category.css_class());
                out.push_str("\">");
                if options.escape_text {
                    html_escape::encode_text_to_string(text, &mut out);
                } else {
                    out.push_str(text);
                }
                out.push_str("</span>");
            }
            Event::Delimiter(delimiter) => out.push_str(delimiter_markup(*delimiter)),
            Event::EscapedLineBreak => out.push_str(LINE_BREAK),
            Event::EscapedTab => out.push_str(INDENT),
        }
    }

    out
}

fn delimiter_markup(delimiter: Delimiter) -> &'static str {
    match delimiter {
        Delimiter::Space => NBSP,
        Delimiter::OpenBrace => "{",
        Delimiter::CloseBrace => "}",
        Delimiter::OpenParen => "(",
        Delimiter::CloseParen => ")",
        Delimiter::Newline => LINE_BREAK,
        Delimiter::Tab => INDENT,
    }
}
