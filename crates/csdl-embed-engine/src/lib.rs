pub mod embed;
pub mod render;
pub mod snippet;
pub mod source;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use embed::{CONTENT_TYPE, DEFAULT_TEMPLATE, EmbedScript, EmbedService, PLACEHOLDER};
pub use render::{FAILURE_MESSAGE, Page, RenderOptions, STYLESHEET, render_page, render_widget};
pub use snippet::{Gist, GistFile, Snippet};
pub use source::{DirectorySource, SnippetSource, SourceError};

pub use csdl_embed_syntax::{HtmlOptions, tokenize};
