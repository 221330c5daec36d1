//! Widget and page rendering for highlighted snippets.
//!
//! A page holds any number of widgets but carries the stylesheet once.

use csdl_embed_syntax::{HtmlOptions, tokenize_with};

use crate::snippet::Snippet;

/// Shown in place of widgets when the gist could not be retrieved.
pub const FAILURE_MESSAGE: &str = "<em>-- Failed to embed CSDL --</em>";

/// Styles for the widget and every token category.
pub const STYLESHEET: &str = concat!(
    ".csdl-embed{margin-top:4px;font-family:Helvetica,Arial,sans-serif;font-size:12px;overflow:hidden;",
    "font-style:normal;font-weight:normal;text-transform:none;letter-spacing:normal;line-height:1.5em}",
    ".csdl-embed code{font-family:\"courier new\";background:#EFEFEF;padding:10px 15px;",
    "border:1px solid #DCDCDC;border-bottom:0px;display:block;",
    "border-top-left-radius:3px;border-top-right-radius:3px}",
    ".csdl-embed code .category-keyword{color:black}",
    ".csdl-embed code .category-operator{color:red}",
    ".csdl-embed code .category-string{color:green;white-space:nowrap}",
    ".csdl-embed code .category-predicate{color:blue}",
    ".csdl-embed code .category-int{color:darkgreen}",
    ".csdl-embed code .category-comment{color:grey}",
    ".csdl-embed .csdl-embed-footer{margin-bottom:4px;background:#2C2B33;border:1px solid #0B0B0D;",
    "padding:10px 10px;overflow:hidden;border-bottom-left-radius:3px;border-bottom-right-radius:3px}",
    ".csdl-embed .csdl-embed-footer a{color:#FFF;text-decoration:none;display:block;float:left;margin-right:5px}",
    ".csdl-embed .csdl-embed-footer a.logo{margin-right:0px;float:right}",
    ".csdl-embed .csdl-embed-footer strong.name{float:left;margin-right:5px;color:#FFF}",
);

/// Rendering settings shared by every widget on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub html: HtmlOptions,
    pub attribution_name: String,
    pub attribution_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            html: HtmlOptions::default(),
            attribution_name: "DataSift".to_string(),
            attribution_url: "http://datasift.com".to_string(),
        }
    }
}

/// Render one snippet as a self-contained widget.
pub fn render_widget(snippet: &Snippet, options: &RenderOptions) -> String {
    let fragment = tokenize_with(&snippet.content, &options.html);

    let mut out = String::with_capacity(fragment.len() + 512);
    out.push_str("<div class=\"csdl-embed\"><code class=\"csdl-embed\">");
    out.push_str(&fragment);
    out.push_str("</code><div class=\"csdl-embed-footer\"><a href=\"");
    html_escape::encode_double_quoted_attribute_to_string(&snippet.url, &mut out);
    out.push_str("\" target=\"_blank\"><strong>");
    html_escape::encode_text_to_string(&snippet.filename, &mut out);
    out.push_str("</strong></a><strong class=\"name\">");
    html_escape::encode_text_to_string(&snippet.username, &mut out);
    out.push_str("</strong><a href=\"");
    html_escape::encode_double_quoted_attribute_to_string(&options.attribution_url, &mut out);
    out.push_str("\" class=\"logo\" target=\"_blank\">");
    html_escape::encode_text_to_string(&options.attribution_name, &mut out);
    out.push_str("</a><br style=\"clear:both;\" /></div></div>");
    out
}

/// Accumulates widgets for one page.
#[derive(Debug, Clone)]
pub struct Page {
    options: RenderOptions,
    body: String,
}

impl Page {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            body: String::new(),
        }
    }

    pub fn push_snippet(&mut self, snippet: &Snippet) {
        self.body.push_str(&render_widget(snippet, &self.options));
    }

    pub fn push_failure(&mut self) {
        self.body.push_str(FAILURE_MESSAGE);
    }

    /// Stylesheet followed by everything pushed so far.
    pub fn finish(self) -> String {
        let mut out = String::with_capacity(STYLESHEET.len() + self.body.len() + 32);
        out.push_str("<style type=\"text/css\">");
        out.push_str(STYLESHEET);
        out.push_str("</style>");
        out.push_str(&self.body);
        out
    }
}

/// Render the widgets for a retrieval result, or the failure message.
pub fn render_page(snippets: Option<&[Snippet]>, options: &RenderOptions) -> String {
    let mut page = Page::new(options.clone());
    match snippets {
        Some(snippets) => {
            for snippet in snippets {
                page.push_snippet(snippet);
            }
        }
        None => page.push_failure(),
    }
    page.finish()
}
