use std::error::Error;
use std::fmt;
use std::io;

use crate::toc::TreeError;

/// Result type for CLI glue where any error is reported the same way
pub type BoxResult<T> = std::result::Result<T, Box<dyn Error>>;

/// Common result type for autotoc operations
pub type Result<T> = std::result::Result<T, AutotocError>;

/// Error types for autotoc operations
#[derive(Debug)]
pub enum AutotocError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Front matter parsing error
    FrontMatter(String),
    /// Markup or selector could not be parsed
    Parse(String),
    /// The selector matched something that is not an h1-h6 element
    Heading(String),
    /// The slug function failed
    Slug(String),
    /// TOC tree construction error
    Tree(TreeError),
    /// A failure while processing one document of a pass
    Document {
        path: String,
        source: Box<AutotocError>,
    },
}

impl AutotocError {
    /// Name of the processing stage that produced the error
    pub fn stage(&self) -> &'static str {
        match self {
            AutotocError::Io(_) => "io",
            AutotocError::Config(_) => "config",
            AutotocError::FrontMatter(_) => "front matter",
            AutotocError::Parse(_) => "parse",
            AutotocError::Heading(_) => "heading",
            AutotocError::Slug(_) => "slug",
            AutotocError::Tree(_) => "tree",
            AutotocError::Document { source, .. } => source.stage(),
        }
    }

    /// Attach the logical path of the document being processed
    pub fn in_document(self, path: impl Into<String>) -> Self {
        AutotocError::Document {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

impl fmt::Display for AutotocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutotocError::Io(err) => write!(f, "IO error: {}", err),
            AutotocError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AutotocError::FrontMatter(msg) => write!(f, "Front matter error: {}", msg),
            AutotocError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AutotocError::Heading(msg) => write!(f, "Heading error: {}", msg),
            AutotocError::Slug(msg) => write!(f, "Slug error: {}", msg),
            AutotocError::Tree(err) => write!(f, "TOC construction error: {}", err),
            AutotocError::Document { path, source } => {
                write!(f, "{} (while processing {}, stage: {})", source, path, source.stage())
            }
        }
    }
}

impl Error for AutotocError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AutotocError::Io(err) => Some(err),
            AutotocError::Tree(err) => Some(err),
            AutotocError::Document { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for AutotocError {
    fn from(err: io::Error) -> Self {
        AutotocError::Io(err)
    }
}

impl From<TreeError> for AutotocError {
    fn from(err: TreeError) -> Self {
        AutotocError::Tree(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_error_names_stage() {
        let err = AutotocError::Slug("boom".to_string()).in_document("docs/a.html");
        assert_eq!(err.stage(), "slug");

        let message = err.to_string();
        assert!(message.contains("docs/a.html"));
        assert!(message.contains("boom"));
        assert!(message.contains("stage: slug"));
    }

    #[test]
    fn test_tree_error_conversion() {
        let err: AutotocError = TreeError::AscendPastRoot.into();
        assert_eq!(err.stage(), "tree");
        assert!(err.source().is_some());
    }
}
