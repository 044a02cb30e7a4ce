// Module declarations
mod builder;
mod cli;
mod collections;
mod config;
mod front_matter;
mod headers;
mod markup;
mod toc;
mod utils;

fn main() {
    // Run the CLI
    cli::run();
}
