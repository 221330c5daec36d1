//! # csdl-embed-syntax
//!
//! Turns CSDL source text into a syntax-highlighted HTML fragment.
//!
//! This is not a CSDL parser: there is no tree and no validation. Every word
//! of the input gets exactly one category and is rendered, however malformed
//! the query is.
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → CharSequence → Classifier → Events → HTML sink → Fragment
//!               (trim + ' ')   (state)               (spans)
//! ```
//!
//! ### 1. Character sequence ([`char_sequence`] module)
//!
//! The trimmed input plus one synthetic trailing space, walked once from front
//! to back.
//!
//! ### 2. Classifier ([`classifier`] module)
//!
//! Splits on delimiters (space, braces, parentheses, newline, tab), classifies
//! each word and tracks string/comment spans that cross word boundaries.
//!
//! ```text
//! "x contains \"a b\"" → [Word(predicate "x"), Delimiter(Space),
//!                         Word(operator "contains"), Delimiter(Space),
//!                         Word(string "\"a"), Delimiter(Space), Word(string "b\"")]
//! ```
//!
//! ### 3. HTML sink ([`html`] module)
//!
//! Words become `<span class="category-…">` elements; delimiters become
//! literal markup (`&nbsp;`, `<br/>`, braces, parentheses).
//!
//! ## Quick Start
//!
//! ```
//! use csdl_embed_syntax::tokenize;
//!
//! let html = tokenize("tag.topic == 1");
//! assert_eq!(
//!     html,
//!     "<span class=\"category-keyword\">tag.topic</span>&nbsp;\
//!      <span class=\"category-operator\">==</span>&nbsp;\
//!      <span class=\"category-int\">1</span>"
//! );
//! ```

pub mod category;
pub mod char_sequence;
pub mod classifier;
pub mod html;

pub use category::Category;
pub use classifier::{ClassifierState, Delimiter, Event, classify};
pub use html::{HtmlOptions, render_html};

/// Tokenize CSDL text into an HTML fragment.
///
/// Never fails. Returns an empty string when `text` is empty or whitespace.
pub fn tokenize(text: &str) -> String {
    tokenize_with(text, &HtmlOptions::default())
}

/// [`tokenize`] with explicit rendering options.
pub fn tokenize_with(text: &str, options: &HtmlOptions) -> String {
    render_html(&classify(text), options)
}
