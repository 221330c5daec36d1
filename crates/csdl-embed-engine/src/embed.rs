//! Embed scripts served to third-party pages.
//!
//! The served script writes the highlighted page (stylesheet, widgets and
//! attribution) straight into the host document. A data script is also
//! available for hosts that render themselves: its template holds a
//! [`PLACEHOLDER`] that is replaced by either `null` (lookup failed) or a
//! JSON array of [`Snippet`] records.

use log::{debug, warn};

use crate::render::{RenderOptions, render_page};
use crate::snippet::Snippet;
use crate::source::SnippetSource;

pub const PLACEHOLDER: &str = "%%CSDL%%";
/// Content type for HTTP responses carrying an embed script.
pub const CONTENT_TYPE: &str = "application/javascript";
/// Template used when no custom one is configured.
pub const DEFAULT_TEMPLATE: &str = include_str!("../resources/embed.js");

const NULL_PAYLOAD: &str = "null";

/// A script template with a single payload slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedScript {
    template: String,
}

impl Default for EmbedScript {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl EmbedScript {
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        if !template.contains(PLACEHOLDER) {
            warn!("Embed template has no {PLACEHOLDER} placeholder, payload will be dropped");
        }
        Self { template }
    }

    /// Substitute the first placeholder with the payload for `snippets`.
    pub fn render(&self, snippets: Option<&[Snippet]>) -> String {
        let payload = match snippets {
            Some(snippets) => serde_json::to_string(snippets).unwrap_or_else(|err| {
                warn!("Failed to serialize snippets: {err}");
                NULL_PAYLOAD.to_string()
            }),
            None => NULL_PAYLOAD.to_string(),
        };
        self.template.replacen(PLACEHOLDER, &payload, 1)
    }
}

/// Script that writes already-rendered markup into the page.
pub fn prerendered_script(markup: &str) -> String {
    // A JSON string literal is also a valid JavaScript string literal.
    let literal = serde_json::to_string(markup).unwrap_or_else(|_| "\"\"".to_string());
    format!("document.write({literal});\n")
}

/// Looks snippets up by gist id and turns them into scripts or pages.
#[derive(Debug, Clone)]
pub struct EmbedService<S> {
    source: S,
    script: EmbedScript,
}

impl<S: SnippetSource> EmbedService<S> {
    pub fn new(source: S, script: EmbedScript) -> Self {
        Self { source, script }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Snippets for `id`, or `None` when the lookup fails.
    pub fn lookup(&self, id: &str) -> Option<Vec<Snippet>> {
        match self.source.fetch(id) {
            Ok(gist) => {
                debug!("Embedding {} snippet(s) from gist {id}", gist.files.len());
                Some(gist.snippets())
            }
            Err(err) => {
                warn!("Error accessing CSDL from gist ({id}): {err}");
                None
            }
        }
    }

    /// Embed script that writes the highlighted page for `id`.
    pub fn script_for(&self, id: &str, options: &RenderOptions) -> String {
        prerendered_script(&self.page_for(id, options))
    }

    /// Embed script carrying the raw snippet records through the template.
    pub fn data_script_for(&self, id: &str) -> String {
        self.script.render(self.lookup(id).as_deref())
    }

    /// Highlighted page markup for `id`.
    pub fn page_for(&self, id: &str, options: &RenderOptions) -> String {
        render_page(self.lookup(id).as_deref(), options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FAILURE_MESSAGE;
    use crate::snippet::{Gist, GistFile};
    use crate::source::SourceError;
    use pretty_assertions::assert_eq;

    struct FixedSource;

    impl SnippetSource for FixedSource {
        fn fetch(&self, id: &str) -> Result<Gist, SourceError> {
            if id != "known" {
                return Err(SourceError::NotFound(id.to_string()));
            }
            Ok(Gist {
                id: id.to_string(),
                owner: "octocat".to_string(),
                url: "https://gist.example.com/known".to_string(),
                files: vec![GistFile {
                    filename: "f.csdl".to_string(),
                    content: "a == \"b\"".to_string(),
                }],
            })
        }
    }

    fn service(template: &str) -> EmbedService<FixedSource> {
        EmbedService::new(FixedSource, EmbedScript::new(template))
    }

    #[test]
    fn failed_lookup_substitutes_null() {
        assert_eq!(
            service("var csdl = %%CSDL%%;").data_script_for("missing"),
            "var csdl = null;"
        );
    }

    #[test]
    fn successful_lookup_substitutes_json_array() {
        assert_eq!(
            service("var csdl = %%CSDL%%;").data_script_for("known"),
            r#"var csdl = [{"content":"a == \"b\"","filename":"f.csdl","username":"octocat","url":"https://gist.example.com/known"}];"#
        );
    }

    #[test]
    fn only_first_placeholder_is_replaced() {
        let script = EmbedScript::new("%%CSDL%% %%CSDL%%");
        assert_eq!(script.render(None), "null %%CSDL%%");
    }

    #[test]
    fn empty_snippet_list_is_an_empty_array() {
        let script = EmbedScript::new("%%CSDL%%");
        let snippets: Vec<Snippet> = Vec::new();
        assert_eq!(script.render(Some(snippets.as_slice())), "[]");
    }

    #[test]
    fn default_template_has_placeholder() {
        assert!(DEFAULT_TEMPLATE.contains(PLACEHOLDER));
        let script = EmbedScript::default().render(None);
        assert!(script.contains("var csdl = null;"));
    }

    #[test]
    fn default_template_uses_widget_shell_and_attribution() {
        assert!(DEFAULT_TEMPLATE.contains(r#"<code class="csdl-embed">"#));
        assert!(DEFAULT_TEMPLATE.contains(r#"class="logo""#));
        assert!(!DEFAULT_TEMPLATE.contains("<pre"));
    }

    #[test]
    fn page_for_failed_lookup_shows_failure_message() {
        let page = service("").page_for("missing", &RenderOptions::default());
        assert!(page.ends_with(FAILURE_MESSAGE));
    }

    #[test]
    fn script_is_a_single_write_call() {
        let script = service("").script_for("known", &RenderOptions::default());
        assert!(script.starts_with("document.write(\"<style"));
        assert!(script.ends_with("\");\n"));
        assert!(script.contains(r#"<span class=\"category-string\">\"b\"</span>"#));
    }

    #[test]
    fn script_carries_one_stylesheet_and_attribution() {
        let script = service("").script_for("known", &RenderOptions::default());
        assert_eq!(script.matches("<style").count(), 1);
        assert_eq!(script.matches("<code class=\\\"csdl-embed\\\">").count(), 1);
        assert!(script.contains(r#"<a href=\"http://datasift.com\" class=\"logo\""#));
    }

    #[test]
    fn script_for_failed_lookup_still_styles_the_message() {
        let script = service("").script_for("missing", &RenderOptions::default());
        assert_eq!(script.matches("<style").count(), 1);
        assert!(script.contains(FAILURE_MESSAGE));
    }
}
