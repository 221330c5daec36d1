//! # Character Sequence - Ordered Input for the Classifier
//!
//! The classifier never looks at the raw `&str`. It walks a [`CharSequence`]:
//! the trimmed input characters in order, followed by one synthetic trailing
//! space. The trailing space guarantees the last word of the input is always
//! followed by a boundary, so the classifier has a single place where buffers
//! get flushed.
//!
//! ```
//! use csdl_embed_syntax::char_sequence::CharSequence;
//!
//! let seq = CharSequence::build("  a b \n");
//! let chars: Vec<char> = seq.steps().map(|step| step.ch).collect();
//! assert_eq!(chars, vec!['a', ' ', 'b', ' ']);
//! ```
//!
//! ## Traversal
//!
//! [`CharSequence::steps`] yields a [`Step`] per character. Each step knows
//! whether it is the terminal one by peeking at the next character only, so
//! traversal is a flat loop with no recursion and no lookbehind.

use std::iter::Peekable;
use std::slice::Iter;

/// The synthetic delimiter appended after the trimmed input.
pub const TRAILING_DELIMITER: char = ' ';

/// Append-only, ordered sequence of characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSequence {
    chars: Vec<char>,
}

impl CharSequence {
    /// Build the sequence for `text`: every character of `text.trim()`
    /// followed by [`TRAILING_DELIMITER`].
    ///
    /// Whitespace-only input produces an empty sequence.
    pub fn build(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::default();
        }

        let mut seq = Self {
            chars: Vec::with_capacity(trimmed.len() + 1),
        };
        for ch in trimmed.chars() {
            seq.push(ch);
        }
        seq.push(TRAILING_DELIMITER);
        seq
    }

    fn push(&mut self, ch: char) {
        self.chars.push(ch);
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Single forward traversal over the sequence.
    pub fn steps(&self) -> Steps<'_> {
        Steps {
            inner: self.chars.iter().peekable(),
        }
    }
}

/// One character of the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub ch: char,
    /// True only for the last character of the sequence.
    pub is_terminal: bool,
}

/// Iterator returned by [`CharSequence::steps`].
pub struct Steps<'a> {
    inner: Peekable<Iter<'a, char>>,
}

impl Iterator for Steps<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let ch = *self.inner.next()?;
        let is_terminal = self.inner.peek().is_none();
        Some(Step { ch, is_terminal })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_builds_empty_sequence() {
        let seq = CharSequence::build("");
        assert!(seq.is_empty());
        assert_eq!(seq.steps().count(), 0);
    }

    #[test]
    fn whitespace_only_input_builds_empty_sequence() {
        let seq = CharSequence::build(" \n\t  ");
        assert!(seq.is_empty());
    }

    #[test]
    fn appends_single_trailing_delimiter() {
        let seq = CharSequence::build("ab");
        let chars: Vec<char> = seq.steps().map(|s| s.ch).collect();
        assert_eq!(chars, vec!['a', 'b', ' ']);
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn trims_before_appending() {
        let seq = CharSequence::build("\n\t x y \n");
        let chars: String = seq.steps().map(|s| s.ch).collect();
        assert_eq!(chars, "x y ");
    }

    #[test]
    fn only_last_step_is_terminal() {
        let seq = CharSequence::build("abc");
        let flags: Vec<bool> = seq.steps().map(|s| s.is_terminal).collect();
        assert_eq!(flags, vec![false, false, false, true]);
    }

    #[test]
    fn preserves_multibyte_characters() {
        let seq = CharSequence::build("héllo");
        let chars: String = seq.steps().map(|s| s.ch).collect();
        assert_eq!(chars, "héllo ");
    }

    #[test]
    fn long_input_traverses_without_recursion() {
        let text = "a ".repeat(200_000);
        let seq = CharSequence::build(&text);
        // trimmed trailing space is replaced by the synthetic one
        assert_eq!(seq.steps().count(), text.len());
    }
}
