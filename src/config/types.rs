use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Where the generated TOC is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TocOutput {
    /// Under the `toc` key of the document's front matter
    #[default]
    FrontMatter,
    /// In a `<file>.toc.json` file next to the document
    Sidecar,
    /// Both of the above
    Both,
}

impl TocOutput {
    pub fn front_matter(self) -> bool {
        matches!(self, TocOutput::FrontMatter | TocOutput::Both)
    }

    pub fn sidecar(self) -> bool {
        matches!(self, TocOutput::Sidecar | TocOutput::Both)
    }
}

/// Table of contents settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocConfig {
    /// CSS selector for the headings to collect
    #[serde(default = "defaults::default_selector")]
    pub selector: String,

    /// Prefix prepended to generated heading ids
    #[serde(default = "defaults::default_header_id_prefix", alias = "headerIdPrefix")]
    pub header_id_prefix: String,

    /// Glob matched against each document's path relative to the source
    #[serde(default = "defaults::default_pattern")]
    pub pattern: String,

    /// Where the generated TOC is written
    #[serde(default)]
    pub output: TocOutput,
}

impl Default for TocConfig {
    fn default() -> Self {
        TocConfig {
            selector: defaults::default_selector(),
            header_id_prefix: defaults::default_header_id_prefix(),
            pattern: defaults::default_pattern(),
            output: TocOutput::default(),
        }
    }
}

/// Site configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Source directory holding the documents
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Destination directory for processed documents
    #[serde(default = "defaults::default_destination")]
    pub destination: PathBuf,

    /// Exclude patterns (glob patterns of files to leave out entirely)
    #[serde(default = "defaults::default_exclude")]
    pub exclude: Vec<String>,

    /// Table of contents settings
    #[serde(default)]
    pub autotoc: TocConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: defaults::default_source(),
            destination: defaults::default_destination(),
            exclude: defaults::default_exclude(),
            autotoc: TocConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.autotoc.selector, "h2, h3, h4, h5, h6");
        assert_eq!(config.autotoc.header_id_prefix, "");
        assert_eq!(config.autotoc.pattern, "");
        assert_eq!(config.autotoc.output, TocOutput::FrontMatter);
        assert_eq!(config.destination, PathBuf::from("_site"));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str(
            "autotoc:\n  headerIdPrefix: sec-\n  pattern: '**/*.html'\n  output: both\n",
        )
        .unwrap();

        assert_eq!(config.autotoc.header_id_prefix, "sec-");
        assert_eq!(config.autotoc.pattern, "**/*.html");
        assert_eq!(config.autotoc.selector, "h2, h3, h4, h5, h6");
        assert!(config.autotoc.output.front_matter());
        assert!(config.autotoc.output.sidecar());
        assert_eq!(config.source, PathBuf::from("."));
    }
}
