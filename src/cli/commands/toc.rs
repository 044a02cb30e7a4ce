use std::io;
use std::path::PathBuf;

use crate::builder::{transform_body, AutoToc};
use crate::cli::types::{Commands, TocFormat};
use crate::collections::Document;
use crate::config;
use crate::front_matter::split_front_matter;
use crate::headers::DefaultSlugger;
use crate::toc::TocNode;
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Handle the toc command: print the TOC of a single file
pub fn handle_toc_command(command: &Commands, source: Option<&PathBuf>) -> BoxResult<()> {
    if let Commands::Toc {
        file,
        selector,
        header_id_prefix,
        format,
    } = command
    {
        let source_dir = source.cloned().unwrap_or_else(|| PathBuf::from("."));
        let defaults = config::load_config(&source_dir, None)?.autotoc;

        let doc = Document::new(file.clone(), file.clone(), fs::read_bytes(file)?);
        let (front_matter, body) = split_front_matter(doc.text()?)?;

        let mut autotoc = AutoToc::new(&defaults);
        if let Some(prefix) = header_id_prefix {
            autotoc = autotoc.with_slugger(DefaultSlugger::new(prefix.as_str()));
        }
        let selector = selector
            .as_deref()
            .or_else(|| front_matter.as_ref().and_then(|fm| fm.selector_override()))
            .unwrap_or(autotoc.selector.as_str());

        let (_, toc) = transform_body(body, selector, autotoc.slugger())?;
        println!("{}", render_toc(&toc, *format)?);
    }

    Ok(())
}

fn render_toc(toc: &[TocNode], format: TocFormat) -> BoxResult<String> {
    let rendered = match format {
        TocFormat::Json => serde_json::to_string_pretty(toc).map_err(io::Error::from)?,
        TocFormat::Yaml => serde_yaml::to_string(toc)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_toc_json() {
        let mut node = TocNode::new("a", "A", None);
        node.children.push(TocNode::placeholder());

        let json = render_toc(&[node], TocFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["id"], "a");
        assert_eq!(value[0]["children"][0]["text"], "");
        assert!(value[0].get("linkTarget").is_none());
    }

    #[test]
    fn test_render_toc_yaml() {
        let yaml = render_toc(&[TocNode::new("a", "A", Some("/a".to_string()))], TocFormat::Yaml).unwrap();
        assert!(yaml.contains("linkTarget: /a"));
    }
}
