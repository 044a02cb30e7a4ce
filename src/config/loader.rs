use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::defaults;
use crate::config::types::Config;
use crate::utils::error::{AutotocError, Result};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = ["_config.yml", "_config.yaml", "_config.toml", "_config.json"];

/// Load configuration from config files.
///
/// Explicit `config_files` are merged in order, later files winning; otherwise
/// the default file names are looked up in `source_dir`.
pub fn load_config<P: AsRef<Path>>(source_dir: P, config_files: Option<Vec<PathBuf>>) -> Result<Config> {
    let mut config = Config::default();

    let config_paths = match config_files {
        Some(paths) => paths,
        None => find_default_config_files(&source_dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut config, &path)?;
        }
    }

    if config.source == defaults::default_source() {
        config.source = source_dir.as_ref().to_path_buf();
    }

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Merge a configuration file into the current configuration
fn merge_config_file(config: &mut Config, config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(AutotocError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path).map_err(|e| {
        AutotocError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let extension = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    // Assume YAML if no extension
    let file_config = match extension.as_deref() {
        None | Some("yml") | Some("yaml") => parse_yaml_config(&content, config_path)?,
        Some("toml") => parse_toml_config(&content, config_path)?,
        Some("json") => parse_json_config(&content, config_path)?,
        Some(other) => {
            return Err(AutotocError::Config(format!(
                "Unsupported configuration file format: {}",
                other
            )));
        }
    };

    merge_configs(config, &file_config);
    Ok(())
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> Result<Config> {
    // An empty file is a valid, empty configuration
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(content).map_err(|e| {
        AutotocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> Result<Config> {
    toml::from_str(content).map_err(|e| {
        AutotocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> Result<Config> {
    serde_json::from_str(content).map_err(|e| {
        AutotocError::Config(format!(
            "Failed to parse JSON configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

/// Merge two configurations, only taking non-default values from `source`
fn merge_configs(target: &mut Config, source: &Config) {
    if source.source != defaults::default_source() {
        target.source = source.source.clone();
    }

    if source.destination != defaults::default_destination() {
        target.destination = source.destination.clone();
    }

    if source.exclude != defaults::default_exclude() {
        target.exclude = source.exclude.clone();
    }

    let toc = &source.autotoc;
    if toc.selector != defaults::default_selector() {
        target.autotoc.selector = toc.selector.clone();
    }

    if toc.header_id_prefix != defaults::default_header_id_prefix() {
        target.autotoc.header_id_prefix = toc.header_id_prefix.clone();
    }

    if toc.pattern != defaults::default_pattern() {
        target.autotoc.pattern = toc.pattern.clone();
    }

    if toc.output != Default::default() {
        target.autotoc.output = toc.output;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TocOutput;
    use crate::utils::fs::write_file;

    #[test]
    fn test_load_default_yaml() {
        let dir = tempfile::tempdir().unwrap();
        write_file(
            dir.path().join("_config.yml"),
            b"autotoc:\n  selector: 'h2, h3'\n  pattern: 'docs/**'\n",
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.autotoc.selector, "h2, h3");
        assert_eq!(config.autotoc.pattern, "docs/**");
        assert_eq!(config.source, dir.path());
    }

    #[test]
    fn test_later_files_override() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = dir.path().join("base.yml");
        let toml = dir.path().join("local.toml");
        write_file(&yaml, b"autotoc:\n  pattern: '*.html'\n  header_id_prefix: a-\n").unwrap();
        write_file(&toml, b"[autotoc]\nheader_id_prefix = \"b-\"\noutput = \"sidecar\"\n").unwrap();

        let config = load_config(dir.path(), Some(vec![yaml, toml])).unwrap();
        assert_eq!(config.autotoc.pattern, "*.html");
        assert_eq!(config.autotoc.header_id_prefix, "b-");
        assert_eq!(config.autotoc.output, TocOutput::Sidecar);
    }

    #[test]
    fn test_missing_and_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = load_config(dir.path(), Some(vec![dir.path().join("nope.yml")]));
        assert_eq!(missing.unwrap_err().stage(), "config");

        let bad = dir.path().join("_config.json");
        write_file(&bad, b"{ not json").unwrap();
        assert!(load_config(dir.path(), None).is_err());
    }

    #[test]
    fn test_no_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.autotoc, Default::default());
    }
}
