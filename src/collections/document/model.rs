use std::path::{Path, PathBuf};

use crate::front_matter::FrontMatter;
use crate::toc::TocNode;
use crate::utils::error::{AutotocError, Result};
use crate::utils::path::to_logical_path;

/// A file of the site being processed
#[derive(Debug, Clone)]
pub struct Document {
    /// Absolute path to the document file
    pub path: PathBuf,

    /// Path relative to the source directory
    pub relative_path: PathBuf,

    /// Raw file contents, written back as-is when untouched
    pub source: Vec<u8>,

    /// Front matter, once the document has been parsed
    pub front_matter: Option<FrontMatter>,

    /// Rewritten body with heading ids filled in
    pub body: Option<String>,

    /// Table of contents attached by the transform
    pub toc: Option<Vec<TocNode>>,
}

impl Document {
    pub fn new(path: PathBuf, relative_path: PathBuf, source: Vec<u8>) -> Self {
        Document {
            path,
            relative_path,
            source,
            front_matter: None,
            body: None,
            toc: None,
        }
    }

    /// Build an in-memory document, with `relative_path` doubling as its path
    #[cfg(test)]
    pub fn from_text<P: AsRef<Path>>(relative_path: P, content: &str) -> Self {
        let relative_path = relative_path.as_ref().to_path_buf();
        Document::new(relative_path.clone(), relative_path, content.as_bytes().to_vec())
    }

    /// Path used for pattern matching, always `/`-separated
    pub fn logical_path(&self) -> String {
        to_logical_path(&self.relative_path)
    }

    /// Source contents as text
    pub fn text(&self) -> Result<&str> {
        std::str::from_utf8(&self.source).map_err(|e| {
            AutotocError::Parse(format!("{} is not valid UTF-8: {}", self.path.display(), e))
        })
    }
}
