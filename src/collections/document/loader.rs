use std::io;
use std::path::Path;

use glob_match::glob_match;
use log::{debug, info};
use walkdir::WalkDir;

use crate::collections::document::model::Document;
use crate::utils::error::Result;
use crate::utils::fs;
use crate::utils::path::{is_within, to_logical_path};

/// Load every file below `source` as a document.
///
/// Files under any of `skip_dirs` (typically the destination) and files whose
/// logical path matches one of the `exclude` globs are left out. Documents are
/// returned sorted by path.
pub fn load_documents(source: &Path, exclude: &[String], skip_dirs: &[&Path]) -> Result<Vec<Document>> {
    info!("Loading documents from {}", source.display());
    let mut documents = Vec::new();

    let walker = WalkDir::new(source)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !skip_dirs.iter().any(|dir| is_within(entry.path(), dir)));

    for entry in walker {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative_path = path.strip_prefix(source).unwrap_or(path).to_path_buf();
        let logical_path = to_logical_path(&relative_path);

        if exclude.iter().any(|pattern| glob_match(pattern, &logical_path)) {
            debug!("Excluding {}", logical_path);
            continue;
        }

        let source_bytes = fs::read_bytes(path)?;
        documents.push(Document::new(path.to_path_buf(), relative_path, source_bytes));
    }

    info!("Loaded {} documents", documents.len());
    Ok(documents)
}
