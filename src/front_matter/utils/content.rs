use crate::front_matter::types::FrontMatter;
use crate::utils::error::{AutotocError, Result};

const DELIMITER: &str = "---";

fn strip_opening_delimiter(content: &str) -> Option<&str> {
    content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
}

/// Split content into front matter and body.
///
/// The body is returned untouched, starting right after the closing
/// delimiter line.
pub fn split_front_matter(content: &str) -> Result<(Option<FrontMatter>, &str)> {
    let rest = match strip_opening_delimiter(content) {
        Some(rest) => rest,
        None => return Ok((None, content)),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            let front_matter = FrontMatter::from_yaml(&rest[..offset])?;
            return Ok((Some(front_matter), &rest[offset + line.len()..]));
        }
        offset += line.len();
    }

    Err(AutotocError::FrontMatter(
        "malformed front matter: missing closing delimiter".to_string(),
    ))
}

/// Render front matter and body back into a single document
pub fn render_document(front_matter: &FrontMatter, body: &str) -> Result<String> {
    Ok(format!(
        "{}\n{}{}\n{}",
        DELIMITER,
        front_matter.to_yaml()?,
        DELIMITER,
        body
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_front_matter() {
        let content = "---\ntitle: Hello\n---\n<h2>Intro</h2>\n";
        let (front_matter, body) = split_front_matter(content).unwrap();

        assert_eq!(front_matter.unwrap().get_str("title"), Some("Hello"));
        assert_eq!(body, "<h2>Intro</h2>\n");
    }

    #[test]
    fn test_split_without_front_matter() {
        let content = "<h2>Intro</h2>\n---\n";
        let (front_matter, body) = split_front_matter(content).unwrap();

        assert!(front_matter.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_split_crlf_and_empty_block() {
        let (front_matter, body) = split_front_matter("---\r\n---\r\nbody").unwrap();
        assert_eq!(front_matter, Some(FrontMatter::default()));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_unterminated_front_matter() {
        let err = split_front_matter("---\ntitle: Hello\n<h2>Intro</h2>").unwrap_err();
        assert_eq!(err.stage(), "front matter");
    }

    #[test]
    fn test_render_document_round_trips() {
        let content = "---\ntitle: Hello\n---\n<h2>Intro</h2>";
        let (front_matter, body) = split_front_matter(content).unwrap();
        let rendered = render_document(&front_matter.unwrap(), body).unwrap();

        assert_eq!(rendered, content);
    }
}
