use std::path::PathBuf;

/// Default source directory
pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Default destination directory
pub fn default_destination() -> PathBuf {
    PathBuf::from("_site")
}

/// Default heading selector, h2 through h6
pub fn default_selector() -> String {
    "h2, h3, h4, h5, h6".to_string()
}

/// Default prefix for generated heading ids
pub fn default_header_id_prefix() -> String {
    String::new()
}

/// Default document pattern; empty matches nothing
pub fn default_pattern() -> String {
    String::new()
}

/// Default exclude patterns
pub fn default_exclude() -> Vec<String> {
    vec![
        ".git/**".to_string(),
        "_config.*".to_string(),
    ]
}
