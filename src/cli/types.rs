use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::TocOutput;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "autotoc")]
#[command(about = "Assign heading ids and build tables of contents for site documents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Source directory (defaults to ./)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Destination directory (defaults to ./_site)
    #[arg(short, long, value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Process every matching document of the source directory
    #[command(alias = "b")]
    Build {
        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<Vec<PathBuf>>,

        /// Glob selecting the documents to process
        #[arg(short, long, value_name = "GLOB")]
        pattern: Option<String>,

        /// CSS selector for headings
        #[arg(long, value_name = "SELECTOR")]
        selector: Option<String>,

        /// Prefix for generated heading ids
        #[arg(long, value_name = "PREFIX")]
        header_id_prefix: Option<String>,

        /// Where to write the generated TOC
        #[arg(short, long, value_enum)]
        output: Option<OutputArg>,

        /// Silence output
        #[arg(short, long, default_value_t = false)]
        quiet: bool,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,
    },

    /// Print the table of contents of a single file
    Toc {
        /// File to read
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// CSS selector for headings
        #[arg(long, value_name = "SELECTOR")]
        selector: Option<String>,

        /// Prefix for generated heading ids
        #[arg(long, value_name = "PREFIX")]
        header_id_prefix: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = TocFormat::Json)]
        format: TocFormat,
    },
}

/// TOC destination as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    FrontMatter,
    Sidecar,
    Both,
}

impl From<OutputArg> for TocOutput {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::FrontMatter => TocOutput::FrontMatter,
            OutputArg::Sidecar => TocOutput::Sidecar,
            OutputArg::Both => TocOutput::Both,
        }
    }
}

/// Serialization used by the `toc` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TocFormat {
    Json,
    Yaml,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build() {
        let cli = Cli::parse_from([
            "autotoc", "-s", "site", "build", "--pattern", "**/*.html",
            "--header-id-prefix", "sec-", "--output", "sidecar",
        ]);

        assert_eq!(cli.source, Some(PathBuf::from("site")));
        match cli.command {
            Some(Commands::Build { pattern, header_id_prefix, output, .. }) => {
                assert_eq!(pattern.as_deref(), Some("**/*.html"));
                assert_eq!(header_id_prefix.as_deref(), Some("sec-"));
                assert_eq!(output, Some(OutputArg::Sidecar));
            }
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn test_parse_toc() {
        let cli = Cli::parse_from(["autotoc", "toc", "page.html", "--format", "yaml"]);
        match cli.command {
            Some(Commands::Toc { file, format, selector, .. }) => {
                assert_eq!(file, PathBuf::from("page.html"));
                assert_eq!(format, TocFormat::Yaml);
                assert!(selector.is_none());
            }
            _ => panic!("expected toc command"),
        }
    }
}
