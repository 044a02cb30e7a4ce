use log::{info, LevelFilter};
use std::path::PathBuf;

use crate::builder;
use crate::cli::logging::set_log_level;
use crate::cli::types::Commands;
use crate::config::{self, Config};
use crate::utils::error::BoxResult;

/// Handle the build command
pub fn handle_build_command(
    command: &Commands,
    source: Option<&PathBuf>,
    destination: Option<&PathBuf>,
) -> BoxResult<()> {
    if let Commands::Build {
        config: cfg_files,
        pattern,
        selector,
        header_id_prefix,
        output,
        quiet,
        verbose,
    } = command
    {
        if *verbose {
            set_log_level(LevelFilter::Debug);
        } else if *quiet {
            set_log_level(LevelFilter::Error);
        }

        let source_dir = source.cloned().unwrap_or_else(|| PathBuf::from("."));
        let mut config = config::load_config(&source_dir, cfg_files.clone())?;

        // Command line options take precedence over config files
        if let Some(destination) = destination {
            config.destination = destination.clone();
        }
        if let Some(pattern) = pattern {
            config.autotoc.pattern = pattern.clone();
        }
        if let Some(selector) = selector {
            config.autotoc.selector = selector.clone();
        }
        if let Some(prefix) = header_id_prefix {
            config.autotoc.header_id_prefix = prefix.clone();
        }
        if let Some(output) = output {
            config.autotoc.output = (*output).into();
        }

        run_build(&config)?;
    }

    Ok(())
}

/// Build with an already assembled configuration
pub fn run_build(config: &Config) -> BoxResult<()> {
    info!("Processing documents...");
    builder::build_site(config)?;
    info!("Documents written to {}", config.destination.display());
    Ok(())
}
