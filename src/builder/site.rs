use std::time::Instant;

use log::info;

use crate::builder::processor::{process_documents, AutoToc, Summary};
use crate::builder::writer::write_documents;
use crate::collections::load_documents;
use crate::config::{validate_config, Config};
use crate::utils::error::Result;

/// Run a full pass with the settings from `config`
pub fn build_site(config: &Config) -> Result<Summary> {
    validate_config(config)?;
    build_site_with(config, &AutoToc::new(&config.autotoc))
}

/// Run a full pass with a prepared [`AutoToc`].
///
/// Nothing is written unless every document was processed successfully.
pub fn build_site_with(config: &Config, autotoc: &AutoToc) -> Result<Summary> {
    let start = Instant::now();

    let mut documents = load_documents(
        &config.source,
        &config.exclude,
        &[config.destination.as_path()],
    )?;

    let summary = process_documents(&mut documents, autotoc)?;

    info!("Writing {} documents to {}", documents.len(), config.destination.display());
    write_documents(&documents, &config.destination, config.autotoc.output)?;

    info!(
        "Added {} toc entries to {} documents ({} copied unchanged) in {:.2?}",
        summary.entries,
        summary.transformed,
        summary.skipped,
        start.elapsed()
    );
    Ok(summary)
}
