use crate::headers::slugger::Slugger;
use crate::markup::HeadingElement;
use crate::toc::{Heading, HeadingLevel};
use crate::utils::error::{AutotocError, Result};

/// Decide the identifier for one heading element and write it back.
///
/// The element's `data-href`, if any, is copied onto the returned record and
/// never takes part in slugging.
pub fn assign_identifier(element: &HeadingElement<'_>, slugger: &dyn Slugger) -> Result<Heading> {
    let level = HeadingLevel::from_tag_name(&element.tag_name())?;
    let inner_html = element.inner_html();
    let link_target = element.link_target();

    let id = slugger
        .slug(&inner_html, element.id().as_deref())
        .map_err(|e| AutotocError::Slug(e.to_string()))?;
    element.set_id(&id);

    Ok(Heading::from_markup(id, &inner_html, link_target, level))
}

/// Assign identifiers to every element, stopping at the first failure
pub fn assign_identifiers(elements: &[HeadingElement<'_>], slugger: &dyn Slugger) -> Result<Vec<Heading>> {
    elements
        .iter()
        .map(|element| assign_identifier(element, slugger))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::slugger::{DefaultSlugger, SlugError};
    use crate::markup::Markup;

    #[test]
    fn test_assigns_and_writes_ids() {
        let markup = Markup::parse_fragment(
            "<h2>Getting Started</h2><h3 id=\"keep-me\">Details</h3>",
        );
        let elements = markup.headings("h2, h3").unwrap();
        let headings = assign_identifiers(&elements, &DefaultSlugger::new("doc-")).unwrap();

        assert_eq!(headings[0].id(), "doc-getting-started");
        assert_eq!(headings[1].id(), "keep-me");
        assert_eq!(headings[1].level().get(), 3);
        assert!(markup.body_html().contains("<h2 id=\"doc-getting-started\">"));
        assert!(markup.body_html().contains("<h3 id=\"keep-me\">"));
    }

    #[test]
    fn test_link_target_is_preserved_separately() {
        let markup = Markup::parse_fragment("<h2 data-href=\"/api\">API</h2>");
        let elements = markup.headings("h2").unwrap();
        let heading = assign_identifier(&elements[0], &DefaultSlugger::default()).unwrap();

        assert_eq!(heading.id(), "api");
        assert_eq!(heading.link_target(), Some("/api"));
        assert!(markup.body_html().contains("data-href=\"/api\""));
    }

    #[test]
    fn test_text_is_stripped_but_slug_sees_markup() {
        let markup = Markup::parse_fragment("<h2>Hello <b>World</b></h2>");
        let elements = markup.headings("h2").unwrap();
        let heading = assign_identifier(&elements[0], &DefaultSlugger::new("sec-")).unwrap();

        assert_eq!(heading.text(), "Hello World");
        assert_eq!(heading.id(), format!("sec-{}", slug::slugify("Hello <b>World</b>")));
    }

    #[test]
    fn test_reassignment_keeps_ids() {
        let markup = Markup::parse_fragment("<h2>Intro</h2>");
        let slugger = DefaultSlugger::new("x-");
        let elements = markup.headings("h2").unwrap();
        let first = assign_identifier(&elements[0], &slugger).unwrap();
        let second = assign_identifier(&elements[0], &slugger).unwrap();

        assert_eq!(first.id(), second.id());
    }

    #[test]
    fn test_slug_failure_propagates() {
        let failing = |_: &str, _: Option<&str>| -> std::result::Result<String, SlugError> {
            Err("no slug for you".into())
        };
        let markup = Markup::parse_fragment("<h2>Intro</h2>");
        let elements = markup.headings("h2").unwrap();

        let err = assign_identifier(&elements[0], &failing).unwrap_err();
        assert_eq!(err.stage(), "slug");
        assert!(err.to_string().contains("no slug for you"));
    }

    #[test]
    fn test_non_heading_match_is_rejected() {
        let markup = Markup::parse_fragment("<p class=\"title\">Not a heading</p>");
        let elements = markup.headings(".title").unwrap();

        let err = assign_identifier(&elements[0], &DefaultSlugger::default()).unwrap_err();
        assert_eq!(err.stage(), "heading");
    }
}
