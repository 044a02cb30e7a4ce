use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::error::{AutotocError, Result};

lazy_static! {
    static ref HEADING_TAG_REGEX: Regex = Regex::new(r"(?i)^h([1-6])$").unwrap();

    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Nominal nesting level of a heading, always within 1..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub fn new(level: u8) -> Option<Self> {
        (1..=6).contains(&level).then_some(HeadingLevel(level))
    }

    /// Derive the level from a tag name such as `h3` or `H3`
    pub fn from_tag_name(tag_name: &str) -> Result<Self> {
        HEADING_TAG_REGEX
            .captures(tag_name)
            .and_then(|cap| cap[1].parse::<u8>().ok())
            .and_then(HeadingLevel::new)
            .ok_or_else(|| {
                AutotocError::Heading(format!(
                    "selector matched <{}>, which is not an h1-h6 element",
                    tag_name
                ))
            })
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.0)
    }
}

/// Remove anything between angle brackets.
///
/// Not markup aware: a stray `<` swallows text up to the next `>`. Kept this
/// way so generated TOC text stays stable for existing documents.
pub fn strip_tags(markup: &str) -> String {
    TAG_REGEX.replace_all(markup, "").into_owned()
}

/// One heading as seen by the TOC builder, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    id: String,
    text: String,
    link_target: Option<String>,
    level: HeadingLevel,
}

impl Heading {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        link_target: Option<String>,
        level: HeadingLevel,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            link_target,
            level,
        }
    }

    /// Build a heading from the element's raw inner markup
    pub fn from_markup(
        id: impl Into<String>,
        inner_html: &str,
        link_target: Option<String>,
        level: HeadingLevel,
    ) -> Self {
        Self::new(id, strip_tags(inner_html), link_target, level)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn link_target(&self) -> Option<&str> {
        self.link_target.as_deref()
    }

    pub fn level(&self) -> HeadingLevel {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_tag_name() {
        assert_eq!(HeadingLevel::from_tag_name("h2").unwrap().get(), 2);
        assert_eq!(HeadingLevel::from_tag_name("H6").unwrap().get(), 6);
        assert!(HeadingLevel::from_tag_name("h7").is_err());
        assert!(HeadingLevel::from_tag_name("h0").is_err());
        assert!(HeadingLevel::from_tag_name("div").is_err());
        assert!(HeadingLevel::from_tag_name("h23").is_err());
    }

    #[test]
    fn test_level_bounds() {
        assert!(HeadingLevel::new(0).is_none());
        assert!(HeadingLevel::new(7).is_none());
        assert_eq!(HeadingLevel::new(1).map(|l| l.to_string()), Some("h1".to_string()));
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("Hello <b>World</b>"), "Hello World");
        assert_eq!(strip_tags("<a href=\"#x\">Link</a> text "), "Link text ");
    }

    #[test]
    fn test_strip_tags_is_not_markup_aware() {
        // A bare comparison operator eats everything up to the next `>`.
        assert_eq!(strip_tags("1 < 2 and 3 > 2"), "1  2");
        assert_eq!(strip_tags("a &amp; b"), "a &amp; b");
    }

    #[test]
    fn test_heading_from_markup() {
        let level = HeadingLevel::new(3).unwrap();
        let heading = Heading::from_markup("intro", "<em>Intro</em>", Some("/intro".into()), level);

        assert_eq!(heading.id(), "intro");
        assert_eq!(heading.text(), "Intro");
        assert_eq!(heading.link_target(), Some("/intro"));
        assert_eq!(heading.level(), level);
    }
}
