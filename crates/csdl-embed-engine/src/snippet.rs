use serde::{Deserialize, Serialize};

/// One CSDL file ready for embedding.
///
/// Field order is the JSON field order of the embed script payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub content: String,
    pub filename: String,
    pub username: String,
    pub url: String,
}

/// A single file inside a gist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistFile {
    pub filename: String,
    pub content: String,
}

/// A retrieved gist: an owner, a canonical URL and one or more files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gist {
    pub id: String,
    pub owner: String,
    pub url: String,
    pub files: Vec<GistFile>,
}

impl Gist {
    /// One snippet per file, in file order. Owner and URL are shared.
    pub fn snippets(&self) -> Vec<Snippet> {
        self.files
            .iter()
            .map(|file| Snippet {
                content: file.content.clone(),
                filename: file.filename.clone(),
                username: self.owner.clone(),
                url: self.url.clone(),
            })
            .collect()
    }
}
