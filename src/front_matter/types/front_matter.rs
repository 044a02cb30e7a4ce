use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::toc::TocNode;
use crate::utils::error::{AutotocError, Result};

/// Keys that override the heading selector for a single document
pub const SELECTOR_KEYS: [&str; 2] = ["autotoc_selector", "autotocSelector"];

/// Key the TOC forest is attached under
pub const TOC_KEY: &str = "toc";

/// Document metadata from the YAML block at the top of a file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter(Mapping);

impl FrontMatter {
    /// Parse a YAML block; an empty block yields empty front matter
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(yaml)
            .map_err(|e| AutotocError::FrontMatter(format!("invalid YAML: {}", e)))?;

        match value {
            Value::Null => Ok(FrontMatter::default()),
            Value::Mapping(mapping) => Ok(FrontMatter(mapping)),
            _ => Err(AutotocError::FrontMatter(
                "front matter must be a mapping of keys to values".to_string(),
            )),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.0)
            .map_err(|e| AutotocError::FrontMatter(format!("failed to serialize: {}", e)))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Per-document heading selector, if set and non-empty
    pub fn selector_override(&self) -> Option<&str> {
        SELECTOR_KEYS
            .iter()
            .find_map(|key| self.get_str(key))
            .filter(|selector| !selector.trim().is_empty())
    }

    /// Store the TOC forest under [`TOC_KEY`], replacing any previous value
    pub fn set_toc(&mut self, toc: &[TocNode]) -> Result<()> {
        let value = serde_yaml::to_value(toc)
            .map_err(|e| AutotocError::FrontMatter(format!("failed to serialize toc: {}", e)))?;
        self.0.insert(Value::from(TOC_KEY), value);
        Ok(())
    }
}
