use dom_query::Matcher;
use log::{info, warn};

use crate::config::Config;
use crate::utils::error::{AutotocError, Result};
use crate::utils::path::normalize_path;

/// Validate the configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_source_directory(config)?;
    validate_destination_directory(config)?;
    validate_toc_settings(config)?;
    Ok(())
}

/// Validate the source directory
fn validate_source_directory(config: &Config) -> Result<()> {
    let source = &config.source;

    if !source.exists() {
        return Err(AutotocError::Config(format!(
            "Source directory does not exist: {}",
            source.display()
        )));
    }

    if !source.is_dir() {
        return Err(AutotocError::Config(format!(
            "Source path is not a directory: {}",
            source.display()
        )));
    }

    info!("Source directory: {}", source.display());
    Ok(())
}

/// Validate the destination directory
fn validate_destination_directory(config: &Config) -> Result<()> {
    let destination = &config.destination;

    if normalize_path(destination) == normalize_path(&config.source) {
        return Err(AutotocError::Config(format!(
            "Destination must differ from the source directory: {}",
            destination.display()
        )));
    }

    if destination.exists() && !destination.is_dir() {
        return Err(AutotocError::Config(format!(
            "Destination path is not a directory: {}",
            destination.display()
        )));
    }

    info!("Destination directory: {}", destination.display());
    Ok(())
}

/// Validate selector and pattern
fn validate_toc_settings(config: &Config) -> Result<()> {
    let selector = config.autotoc.selector.trim();
    if selector.is_empty() {
        return Err(AutotocError::Config("Heading selector must not be empty".to_string()));
    }

    if let Err(e) = Matcher::new(selector) {
        return Err(AutotocError::Config(format!(
            "Invalid heading selector '{}': {:?}",
            selector, e
        )));
    }

    if config.autotoc.pattern.is_empty() {
        warn!("No document pattern configured; documents will be copied unchanged");
    }

    Ok(())
}
