mod build;
mod toc;

pub use build::{handle_build_command, run_build};
pub use toc::handle_toc_command;
