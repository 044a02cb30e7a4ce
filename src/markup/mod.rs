//! Markup parsing and heading selection, backed by `dom_query`

use dom_query::{Document, Matcher, NodeRef};

use crate::utils::error::{AutotocError, Result};

/// Attribute carrying an alternate link destination for a heading
pub const LINK_TARGET_ATTR: &str = "data-href";

/// A parsed document body
pub struct Markup {
    document: Document,
}

impl Markup {
    /// Parse a body fragment, wrapping it in a full html/body skeleton first
    pub fn parse_fragment(contents: &str) -> Self {
        let html = format!("<html><body>{}</body></html>", contents);
        Self {
            document: Document::from(html.as_str()),
        }
    }

    /// Elements matching `selector`, in document order
    pub fn headings(&self, selector: &str) -> Result<Vec<HeadingElement<'_>>> {
        let matcher = Matcher::new(selector)
            .map_err(|e| AutotocError::Parse(format!("invalid selector '{}': {:?}", selector, e)))?;

        Ok(self
            .document
            .select_matcher(&matcher)
            .nodes()
            .iter()
            .cloned()
            .map(HeadingElement::new)
            .collect())
    }

    /// Serialize the body contents, including any attribute changes
    pub fn body_html(&self) -> String {
        self.document.select("body").inner_html().to_string()
    }
}

/// A matched heading element that can have its identifier rewritten
pub struct HeadingElement<'a> {
    node: NodeRef<'a>,
}

impl<'a> HeadingElement<'a> {
    fn new(node: NodeRef<'a>) -> Self {
        Self { node }
    }

    pub fn tag_name(&self) -> String {
        self.node
            .node_name()
            .map(|name| name.to_string())
            .unwrap_or_default()
    }

    pub fn inner_html(&self) -> String {
        self.node.inner_html().to_string()
    }

    /// Current `id` attribute; an empty value counts as absent
    pub fn id(&self) -> Option<String> {
        self.node
            .attr("id")
            .map(|id| id.to_string())
            .filter(|id| !id.is_empty())
    }

    pub fn set_id(&self, id: &str) {
        self.node.set_attr("id", id);
    }

    pub fn link_target(&self) -> Option<String> {
        self.node.attr(LINK_TARGET_ATTR).map(|href| href.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_in_document_order() {
        let markup = Markup::parse_fragment(
            "<h3>One</h3><p>x</p><h2 id=\"two\">Two</h2><div><h4 data-href=\"/three\">Three</h4></div>",
        );
        let headings = markup.headings("h2, h3, h4").unwrap();

        let names: Vec<String> = headings.iter().map(|h| h.tag_name()).collect();
        assert_eq!(names, vec!["h3", "h2", "h4"]);
        assert_eq!(headings[0].id(), None);
        assert_eq!(headings[1].id().as_deref(), Some("two"));
        assert_eq!(headings[2].link_target().as_deref(), Some("/three"));
    }

    #[test]
    fn test_inner_html_keeps_markup() {
        let markup = Markup::parse_fragment("<h2>Hello <b>World</b></h2>");
        let headings = markup.headings("h2").unwrap();

        assert_eq!(headings[0].inner_html(), "Hello <b>World</b>");
    }

    #[test]
    fn test_empty_id_is_absent() {
        let markup = Markup::parse_fragment("<h2 id=\"\">Empty</h2>");
        assert_eq!(markup.headings("h2").unwrap()[0].id(), None);
    }

    #[test]
    fn test_set_id_is_serialized() {
        let markup = Markup::parse_fragment("<h2>Title</h2><p>Body</p>");
        for heading in markup.headings("h2").unwrap() {
            heading.set_id("title");
        }

        assert_eq!(markup.body_html(), "<h2 id=\"title\">Title</h2><p>Body</p>");
    }

    #[test]
    fn test_invalid_selector() {
        let markup = Markup::parse_fragment("<h2>Title</h2>");
        let err = markup.headings("h2[").err().unwrap();
        assert_eq!(err.stage(), "parse");
    }

    #[test]
    fn test_no_matches() {
        let markup = Markup::parse_fragment("<p>No headings here</p>");
        assert!(markup.headings("h2, h3").unwrap().is_empty());
    }
}
