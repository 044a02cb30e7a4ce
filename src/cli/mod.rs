pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::error;

use crate::config;
use crate::utils::error::BoxResult;
use std::path::PathBuf;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    if let Err(e) = dispatch(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: &types::Cli) -> BoxResult<()> {
    match &cli.command {
        Some(command @ types::Commands::Build { .. }) => {
            commands::handle_build_command(command, cli.source.as_ref(), cli.destination.as_ref())
        }
        Some(command @ types::Commands::Toc { .. }) => {
            commands::handle_toc_command(command, cli.source.as_ref())
        }
        None => {
            // Default to build command if none provided
            let source = cli.source.clone().unwrap_or_else(|| PathBuf::from("."));
            let mut config = config::load_config(&source, None)?;
            if let Some(destination) = &cli.destination {
                config.destination = destination.clone();
            }
            commands::run_build(&config)
        }
    }
}
