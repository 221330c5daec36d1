//! Coloured terminal rendering of classifier events.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use csdl_embed_syntax::{Category, Event};

fn color(category: Category) -> Color {
    match category {
        Category::Predicate => Color::Blue,
        Category::Operator => Color::Red,
        Category::Keyword => Color::Magenta,
        Category::String => Color::Green,
        Category::Int => Color::DarkGreen,
        Category::Comment => Color::DarkGrey,
    }
}

/// Write `events` to `out`, one colour per category.
///
/// With `plain` set no escape codes are written, only the layout.
pub fn write_preview<W: Write>(out: &mut W, events: &[Event], plain: bool) -> io::Result<()> {
    for event in events {
        match event {
            Event::Word { text, .. } if plain => write!(out, "{text}")?,
            Event::Word { category, text } => {
                let styled = text.as_str().with(color(*category));
                if *category == Category::Keyword {
                    write!(out, "{}", styled.bold())?;
                } else {
                    write!(out, "{styled}")?;
                }
            }
            Event::Delimiter(delimiter) => write!(out, "{}", delimiter.as_char())?,
            Event::EscapedLineBreak => writeln!(out)?,
            Event::EscapedTab => write!(out, "  ")?,
        }
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use csdl_embed_syntax::classify;
    use pretty_assertions::assert_eq;

    fn plain(text: &str) -> String {
        let mut out = Vec::new();
        write_preview(&mut out, &classify(text), true).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_preview_keeps_layout() {
        assert_eq!(plain("tag.x \"a\" {\n\tb == 1\n}"), "tag.x \"a\" {\n\tb == 1\n}\n");
    }

    #[test]
    fn plain_preview_expands_escapes() {
        assert_eq!(plain("a\\nb"), "\nab\n");
    }

    #[test]
    fn coloured_preview_contains_words() {
        let mut out = Vec::new();
        write_preview(&mut out, &classify("return x"), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("return"));
        assert!(text.contains('x'));
    }
}
