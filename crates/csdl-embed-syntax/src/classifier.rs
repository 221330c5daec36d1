//! # Classifier - Words, Delimiters and Spanning State
//!
//! The classifier walks a [`CharSequence`] once, accumulating characters into
//! a word buffer. Delimiter characters flush the buffer and are emitted as
//! [`Event::Delimiter`]; every flushed word becomes an [`Event::Word`] carrying
//! exactly one [`Category`].
//!
//! ```text
//! "tag.x == 1" → [Word(keyword "tag.x"), Delimiter(Space), Word(operator "=="),
//!                 Delimiter(Space), Word(int "1")]
//! ```
//!
//! ## Precedence
//!
//! A word is tested against each rule in a fixed order and later rules win:
//!
//! 1. predicate (default)
//! 2. operator vocabulary
//! 3. keyword vocabulary or a `tag.` namespace
//! 4. signed decimal number
//! 5. string spanning (`"` opens or closes a string across words)
//! 6. comment spanning (`//` to end of line, `/*` to the word holding `*/`)
//!
//! String and comment state persists across words in [`ClassifierState`],
//! which belongs to a single [`classify`] call. Nothing is shared between
//! calls, so classification is reentrant.
//!
//! Unterminated strings and comments are not errors: they simply run to the
//! end of input.

use std::sync::OnceLock;

use log::{debug, trace};
use regex::Regex;

use crate::category::{Category, KEYWORDS, OPERATORS};
use crate::char_sequence::CharSequence;

/// Literal backslash-n inside a word, rendered as a line break.
pub const LINE_BREAK_ESCAPE: &str = "\\n";
/// Literal backslash-t inside a word, rendered as indentation.
pub const TAB_ESCAPE: &str = "\\t";

const QUOTE: char = '"';
const BLOCK_COMMENT_OPEN: &str = "/*";
const BLOCK_COMMENT_CLOSE: &str = "*/";
const LINE_COMMENT: &str = "//";

/// Characters that end a word and are rendered outside any span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Space,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    Newline,
    Tab,
}

impl Delimiter {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            ' ' => Some(Delimiter::Space),
            '{' => Some(Delimiter::OpenBrace),
            '}' => Some(Delimiter::CloseBrace),
            '(' => Some(Delimiter::OpenParen),
            ')' => Some(Delimiter::CloseParen),
            '\n' => Some(Delimiter::Newline),
            '\t' => Some(Delimiter::Tab),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Space => ' ',
            Delimiter::OpenBrace => '{',
            Delimiter::CloseBrace => '}',
            Delimiter::OpenParen => '(',
            Delimiter::CloseParen => ')',
            Delimiter::Newline => '\n',
            Delimiter::Tab => '\t',
        }
    }
}

/// Output of classification, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A finalized word with its category.
    Word { category: Category, text: String },
    /// A delimiter character between words.
    Delimiter(Delimiter),
    /// A `\n` escape found (and stripped) inside the following word.
    EscapedLineBreak,
    /// A `\t` escape found (and stripped) inside the following word.
    EscapedTab,
}

/// Spanning state carried from one word to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifierState {
    pub in_string: bool,
    pub in_line_comment: bool,
    pub in_block_comment: bool,
    /// Set when the current word both opens and closes a string. Cleared
    /// after every word.
    self_contained_string: bool,
}

impl ClassifierState {
    /// Classify one finalized word and advance the spanning state.
    pub fn classify_word(&mut self, word: &str) -> Category {
        let lowered = word.to_lowercase();
        let mut category = Category::Predicate;

        if OPERATORS.contains(&lowered.as_str()) {
            category = Category::Operator;
        }

        if KEYWORDS.contains(&lowered.as_str()) || namespaced_tag().is_match(word) {
            category = Category::Keyword;
        }

        if numeric().is_match(word) {
            category = Category::Int;
        }

        let has_quote = word.contains(QUOTE);
        if self.in_string {
            category = Category::String;
            if has_quote {
                self.in_string = false;
            }
        } else if has_quote {
            category = Category::String;
            if word.starts_with(QUOTE) && word.ends_with(QUOTE) {
                self.self_contained_string = true;
            } else {
                self.in_string = true;
            }
        }

        // A word that is a whole string cannot open a comment.
        if self.in_line_comment || self.in_block_comment {
            category = Category::Comment;
            if self.in_block_comment && word.contains(BLOCK_COMMENT_CLOSE) {
                self.in_block_comment = false;
            }
        } else if word.contains(BLOCK_COMMENT_OPEN) && !self.self_contained_string {
            category = Category::Comment;
            self.in_block_comment = true;
        } else if word.contains(LINE_COMMENT) && !self.self_contained_string {
            category = Category::Comment;
            self.in_line_comment = true;
        }

        self.self_contained_string = false;
        category
    }
}

fn namespaced_tag() -> &'static Regex {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    TAG_REGEX.get_or_init(|| Regex::new(r"(?i)tag\.").expect("Invalid tag namespace regex"))
}

fn numeric() -> &'static Regex {
    static NUMERIC_REGEX: OnceLock<Regex> = OnceLock::new();
    NUMERIC_REGEX
        .get_or_init(|| Regex::new(r"^[-+]?[0-9]+\.?[0-9]*$").expect("Invalid numeric regex"))
}

/// Finalize the buffered word: expand escapes, classify, emit, clear.
fn flush(buffer: &mut String, state: &mut ClassifierState, events: &mut Vec<Event>) {
    if buffer.is_empty() {
        return;
    }

    let mut word = std::mem::take(buffer);

    if word.contains(LINE_BREAK_ESCAPE) {
        events.push(Event::EscapedLineBreak);
        word = word.replacen(LINE_BREAK_ESCAPE, "", 1);
    }

    if word.contains(TAB_ESCAPE) {
        events.push(Event::EscapedTab);
        word = word.replacen(TAB_ESCAPE, "", 1);
    }

    let category = state.classify_word(&word);
    events.push(Event::Word {
        category,
        text: word,
    });
}

/// Classify `text` into an ordered event stream.
///
/// Total over all input: malformed CSDL falls back to `predicate` and open
/// strings or comments end silently with the input.
pub fn classify(text: &str) -> Vec<Event> {
    let sequence = CharSequence::build(text);
    let mut state = ClassifierState::default();
    let mut buffer = String::new();
    let mut events = Vec::new();

    for step in sequence.steps() {
        if step.is_terminal {
            // The synthetic trailing delimiter only ends the last word.
            flush(&mut buffer, &mut state, &mut events);
            break;
        }

        match Delimiter::from_char(step.ch) {
            Some(delimiter) => {
                flush(&mut buffer, &mut state, &mut events);
                // Line comments never survive the line they start on, even
                // when the newline follows another delimiter.
                if delimiter == Delimiter::Newline {
                    state.in_line_comment = false;
                }
                events.push(Event::Delimiter(delimiter));
            }
            None => buffer.push(step.ch),
        }
    }

    if state.in_string || state.in_block_comment {
        debug!(
            "Input ended inside an open span (string: {}, block comment: {})",
            state.in_string, state.in_block_comment
        );
    }
    trace!("Classified {} chars into {} events", sequence.len(), events.len());

    events
}
