//! Retrieval of gists by identifier.
//!
//! [`SnippetSource`] is the seam between the embed service and wherever the
//! snippets actually live. [`DirectorySource`] serves gists from a local
//! directory tree:
//!
//! ```text
//! <root>/
//! └── abc123/          # gist id
//!     ├── gist.toml    # optional: owner = "…", url = "…"
//!     ├── filter.csdl
//!     └── tags.csdl
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::snippet::{Gist, GistFile};

/// Name of the optional per-gist metadata file.
pub const METADATA_FILE: &str = "gist.toml";
/// Owner reported when `gist.toml` does not name one.
pub const DEFAULT_OWNER: &str = "anonymous";

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Invalid gist id: {0:?}")]
    InvalidId(String),
    #[error("Gist not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse gist metadata at {path}: {source}")]
    Metadata {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Something that can look up a gist by id.
pub trait SnippetSource {
    fn fetch(&self, id: &str) -> Result<Gist, SourceError>;
}

#[derive(Debug, Default, Deserialize)]
struct GistMetadata {
    owner: Option<String>,
    url: Option<String>,
}

/// Serves gists stored as directories under a root path.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn gist_dir(&self, id: &str) -> Result<PathBuf, SourceError> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(SourceError::InvalidId(id.to_string()));
        }
        Ok(self.root.join(id))
    }

    fn read_metadata(dir: &Path) -> Result<GistMetadata, SourceError> {
        let path = dir.join(METADATA_FILE);
        if !path.exists() {
            return Ok(GistMetadata::default());
        }
        let content = fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|source| SourceError::Metadata { path, source })
    }

    fn read_files(dir: &Path) -> Result<Vec<GistFile>, SourceError> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // Symlinks are skipped so a gist cannot expose files outside it.
            if entry.file_type()?.is_file() && entry.file_name() != METADATA_FILE {
                paths.push(entry.path());
            }
        }
        paths.sort();

        paths
            .into_iter()
            .map(|path| {
                let filename = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let content = fs::read_to_string(&path)?;
                Ok::<_, SourceError>(GistFile { filename, content })
            })
            .collect()
    }
}

impl SnippetSource for DirectorySource {
    fn fetch(&self, id: &str) -> Result<Gist, SourceError> {
        let dir = self.gist_dir(id)?;
        if !dir.is_dir() {
            return Err(SourceError::NotFound(id.to_string()));
        }

        let metadata = Self::read_metadata(&dir)?;
        let files = Self::read_files(&dir)?;
        debug!("Fetched gist {id} with {} file(s)", files.len());

        Ok(Gist {
            id: id.to_string(),
            owner: metadata.owner.unwrap_or_else(|| DEFAULT_OWNER.to_string()),
            url: metadata
                .url
                .unwrap_or_else(|| format!("file://{}", dir.display())),
            files,
        })
    }
}
