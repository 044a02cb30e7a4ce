use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use rayon::prelude::*;

use crate::collections::Document;
use crate::config::TocOutput;
use crate::front_matter::{render_document, FrontMatter};
use crate::utils::error::Result;
use crate::utils::fs;

/// Suffix appended to a document's file name for its JSON TOC
pub const SIDECAR_SUFFIX: &str = ".toc.json";

/// Path of the JSON TOC written next to `target`
pub fn sidecar_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(SIDECAR_SUFFIX);
    target.with_file_name(name)
}

/// Write every document below `destination`
pub fn write_documents(documents: &[Document], destination: &Path, output: TocOutput) -> Result<()> {
    documents
        .par_iter()
        .try_for_each(|doc| write_document(doc, destination, output))
}

/// Write one document.
///
/// Untouched documents are copied byte for byte. Transformed ones get their
/// rewritten body, with the TOC placed according to `output`.
pub fn write_document(doc: &Document, destination: &Path, output: TocOutput) -> Result<()> {
    let target = destination.join(&doc.relative_path);

    let (toc, body) = match (&doc.toc, &doc.body) {
        (Some(toc), Some(body)) => (toc, body),
        _ => {
            debug!("Copying {}", doc.logical_path());
            return fs::write_file(&target, &doc.source);
        }
    };

    let mut front_matter = doc.front_matter.clone();
    if output.front_matter() {
        front_matter.get_or_insert_with(FrontMatter::default).set_toc(toc)?;
    }

    let contents = match &front_matter {
        Some(front_matter) => render_document(front_matter, body)?,
        None => body.clone(),
    };
    debug!("Writing {}", target.display());
    fs::write_file(&target, contents.as_bytes())?;

    if output.sidecar() {
        let json = serde_json::to_string_pretty(toc).map_err(io::Error::from)?;
        fs::write_file(sidecar_path(&target), json.as_bytes())?;
    }

    Ok(())
}
