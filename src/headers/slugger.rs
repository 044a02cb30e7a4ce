use std::error::Error;

/// Error returned by a slug function
pub type SlugError = Box<dyn Error + Send + Sync>;

/// Strategy that decides the identifier of a heading.
///
/// Receives the heading's raw inner markup (tags included) and its current
/// identifier, if any.
pub trait Slugger: Send + Sync {
    fn slug(&self, inner_html: &str, existing_id: Option<&str>) -> Result<String, SlugError>;
}

impl<F> Slugger for F
where
    F: Fn(&str, Option<&str>) -> Result<String, SlugError> + Send + Sync,
{
    fn slug(&self, inner_html: &str, existing_id: Option<&str>) -> Result<String, SlugError> {
        self(inner_html, existing_id)
    }
}

/// Keeps author-chosen ids and slugifies the raw markup otherwise
#[derive(Debug, Clone, Default)]
pub struct DefaultSlugger {
    prefix: String,
}

impl DefaultSlugger {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }
}

impl Slugger for DefaultSlugger {
    fn slug(&self, inner_html: &str, existing_id: Option<&str>) -> Result<String, SlugError> {
        match existing_id {
            Some(id) if !id.is_empty() => Ok(id.to_string()),
            _ => Ok(format!("{}{}", self.prefix, slug::slugify(inner_html))),
        }
    }
}
