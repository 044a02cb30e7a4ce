use std::sync::Arc;

use glob_match::glob_match;
use log::{debug, info};
use rayon::prelude::*;

use crate::collections::Document;
use crate::config::TocConfig;
use crate::front_matter::split_front_matter;
use crate::headers::{assign_identifiers, DefaultSlugger, Slugger};
use crate::markup::Markup;
use crate::toc::{build_toc_items, TocNode};
use crate::utils::error::Result;

/// Settings shared by every document of a pass
#[derive(Clone)]
pub struct AutoToc {
    /// Heading selector, unless a document overrides it
    pub selector: String,
    /// Glob a document's logical path must match to be transformed
    pub pattern: String,
    slugger: Arc<dyn Slugger>,
}

impl AutoToc {
    pub fn new(config: &TocConfig) -> Self {
        AutoToc {
            selector: config.selector.clone(),
            pattern: config.pattern.clone(),
            slugger: Arc::new(DefaultSlugger::new(config.header_id_prefix.clone())),
        }
    }

    /// Replace the slug function
    pub fn with_slugger(mut self, slugger: impl Slugger + 'static) -> Self {
        self.slugger = Arc::new(slugger);
        self
    }

    pub fn slugger(&self) -> &dyn Slugger {
        self.slugger.as_ref()
    }
}

/// What happened to a single document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The path did not match the pattern
    Skipped,
    /// Ids were assigned and a TOC attached
    Transformed { entries: usize },
}

/// Totals for a whole pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub transformed: usize,
    pub skipped: usize,
    pub entries: usize,
}

impl Summary {
    fn from_outcomes(outcomes: &[Outcome]) -> Self {
        outcomes.iter().fold(Summary::default(), |mut summary, outcome| {
            match outcome {
                Outcome::Skipped => summary.skipped += 1,
                Outcome::Transformed { entries } => {
                    summary.transformed += 1;
                    summary.entries += entries;
                }
            }
            summary
        })
    }
}

/// Glob match against a logical path; an empty pattern matches nothing
pub fn matches_pattern(pattern: &str, path: &str) -> bool {
    !pattern.is_empty() && glob_match(pattern, path)
}

/// Assign heading ids in `body` and build its TOC.
///
/// Returns the re-serialized body together with the forest.
pub fn transform_body(body: &str, selector: &str, slugger: &dyn Slugger) -> Result<(String, Vec<TocNode>)> {
    let markup = Markup::parse_fragment(body);
    let elements = markup.headings(selector)?;
    let headings = assign_identifiers(&elements, slugger)?;
    let toc = build_toc_items(&headings)?;

    Ok((markup.body_html(), toc))
}

/// Run the transform on one document if its path matches
pub fn process_document(doc: &mut Document, autotoc: &AutoToc) -> Result<Outcome> {
    let logical_path = doc.logical_path();
    if !matches_pattern(&autotoc.pattern, &logical_path) {
        debug!("Skipping {} (no pattern match)", logical_path);
        return Ok(Outcome::Skipped);
    }

    let (front_matter, body) = split_front_matter(doc.text()?)?;
    let selector = front_matter
        .as_ref()
        .and_then(|fm| fm.selector_override())
        .unwrap_or(autotoc.selector.as_str())
        .to_string();

    let (body, toc) = transform_body(body, &selector, autotoc.slugger())?;
    let entries = toc.iter().map(TocNode::count).sum();
    debug!("{}: {} toc entries for '{}'", logical_path, entries, selector);

    doc.front_matter = front_matter;
    doc.body = Some(body);
    doc.toc = Some(toc);

    Ok(Outcome::Transformed { entries })
}

/// Process all documents in parallel.
///
/// The first failure aborts the pass and is returned with the path of the
/// document that caused it.
pub fn process_documents(documents: &mut [Document], autotoc: &AutoToc) -> Result<Summary> {
    info!(
        "Generating tables of contents for {} documents on {} CPU cores",
        documents.len(),
        num_cpus::get()
    );

    let outcomes = documents
        .par_iter_mut()
        .map(|doc| process_document(doc, autotoc).map_err(|e| e.in_document(doc.logical_path())))
        .collect::<Result<Vec<Outcome>>>()?;

    Ok(Summary::from_outcomes(&outcomes))
}
