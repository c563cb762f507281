use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde_yaml::{Mapping, Value};

use crate::front_matter::metadata::{scalar_to_string, Metadata};
use crate::utils::error::{SiteError, SiteResult};

lazy_static! {
    // Opening `---` on the first line, then the first `---` or `--` line after it.
    // The block is captured lazily so a later `---` in the body is left alone.
    static ref FRONT_MATTER_REGEX: Regex =
        Regex::new(r"(?ms)\A---[ \t]*\r?\n(.*?)^---?[ \t]*\r?$\n?(.*)").unwrap();
}

/// Split a document into its metadata and the body that follows the
/// front matter block.
///
/// Without a block the whole text is the body and the metadata is
/// [`Metadata::untitled`]. With a block, `title` is required.
pub fn split_front_matter(text: &str) -> SiteResult<(Metadata, &str)> {
    let captures = match FRONT_MATTER_REGEX.captures(text) {
        Some(captures) => captures,
        None => return Ok((Metadata::untitled(), text)),
    };

    let block = captures.get(1).map_or("", |m| m.as_str());
    let body = captures.get(2).map_or("", |m| m.as_str());

    let mapping = parse_block(block)?;
    let metadata = metadata_from_mapping(mapping)?;
    debug!("Front matter for '{}': {} extra keys", metadata.title, metadata.extra.len());

    Ok((metadata, body))
}

/// Parse the text between the delimiters as a YAML mapping
fn parse_block(block: &str) -> SiteResult<Mapping> {
    if block.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let value: Value = serde_yaml::from_str(block)
        .map_err(|e| SiteError::MetadataParse(e.to_string()))?;

    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        Value::Sequence(_) => Err(SiteError::MetadataParse(
            "expected a key/value mapping, found a sequence".to_string(),
        )),
        _ => Err(SiteError::MetadataParse(
            "expected a key/value mapping, found a scalar".to_string(),
        )),
    }
}

fn metadata_from_mapping(mapping: Mapping) -> SiteResult<Metadata> {
    let mut title = None;
    let mut date = None;
    let mut extra = std::collections::BTreeMap::new();

    for (key, value) in mapping {
        let key = scalar_to_string(&key).ok_or_else(|| {
            SiteError::MetadataParse(format!("unsupported front matter key: {:?}", key))
        })?;

        match key.as_str() {
            "title" => title = well_known_scalar("title", &value)?,
            "date" => date = well_known_scalar("date", &value)?,
            // Always derived from the title.
            "slug" => {}
            _ => {
                extra.insert(key, value);
            }
        }
    }

    let title = title.ok_or(SiteError::MissingField("title"))?;
    let mut metadata = Metadata::with_title(title, date);
    metadata.extra = extra;
    Ok(metadata)
}

/// A null value counts as absent
fn well_known_scalar(key: &str, value: &Value) -> SiteResult<Option<String>> {
    if value.is_null() {
        return Ok(None);
    }
    scalar_to_string(value)
        .map(Some)
        .ok_or_else(|| SiteError::MetadataParse(format!("'{}' must be a scalar value", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_front_matter() {
        let (meta, body) = split_front_matter("---\ntitle: Hello\n---\nBody text").unwrap();

        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.slug, "hello");
        assert_eq!(meta.date, "0000-00-00");
        assert_eq!(body, "Body text");
    }

    #[test]
    fn test_body_keeps_surrounding_whitespace() {
        let (_, body) = split_front_matter("---\ntitle: Hello\n---\n\n  Body text\n\n").unwrap();

        // Only the line break closing the delimiter is consumed.
        assert_eq!(body, "\n  Body text\n\n");
    }

    #[test]
    fn test_no_front_matter() {
        let text = "# Just a heading\n\nSome text\n---\nmore";
        let (meta, body) = split_front_matter(text).unwrap();

        assert_eq!(meta, Metadata::untitled());
        assert_eq!(body, text);
    }

    #[test]
    fn test_delimiter_must_open_the_text() {
        let text = "\n---\ntitle: Late\n---\nBody";
        let (meta, body) = split_front_matter(text).unwrap();

        assert_eq!(meta.title, "Untitled");
        assert_eq!(body, text);
    }

    #[test]
    fn test_unclosed_block_is_body() {
        let text = "---\ntitle: Open\nno closer here";
        let (meta, body) = split_front_matter(text).unwrap();

        assert_eq!(meta.slug, "untitled");
        assert_eq!(body, text);
    }

    #[test]
    fn test_first_closing_delimiter_wins() {
        let text = "---\ntitle: First\n---\nintro\n---\nafter rule\n";
        let (meta, body) = split_front_matter(text).unwrap();

        assert_eq!(meta.title, "First");
        assert_eq!(body, "intro\n---\nafter rule\n");
    }

    #[test]
    fn test_two_hyphen_closer() {
        let (meta, body) = split_front_matter("---\ntitle: Short\n--\nBody").unwrap();

        assert_eq!(meta.title, "Short");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_crlf_line_endings() {
        let (meta, body) =
            split_front_matter("---\r\ntitle: Windows Post\r\n---\r\nBody\r\n").unwrap();

        assert_eq!(meta.title, "Windows Post");
        assert_eq!(meta.slug, "windows-post");
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_date_and_extra_keys() {
        let text = "---\ntitle: Dated\ndate: 2023-05-17\nauthor: Sam\ntags: [a, b]\nslug: ignored\n---\nBody";
        let (meta, _) = split_front_matter(text).unwrap();

        assert_eq!(meta.date, "2023-05-17");
        assert_eq!(meta.slug, "dated");
        assert_eq!(meta.extra.get("author"), Some(&Value::String("Sam".into())));
        assert!(meta.extra.get("tags").map_or(false, Value::is_sequence));
        assert!(!meta.extra.contains_key("slug"));
    }

    #[test]
    fn test_numeric_title() {
        let (meta, _) = split_front_matter("---\ntitle: 2024\n---\n").unwrap();

        assert_eq!(meta.title, "2024");
        assert_eq!(meta.slug, "2024");
    }

    #[test]
    fn test_missing_title() {
        let err = split_front_matter("---\ndate: 2020-01-01\n---\nBody").unwrap_err();
        assert!(matches!(err, SiteError::MissingField("title")));

        let err = split_front_matter("---\n---\nBody").unwrap_err();
        assert!(matches!(err, SiteError::MissingField("title")));
    }

    #[test]
    fn test_block_must_be_a_mapping() {
        let err = split_front_matter("---\n- one\n- two\n---\nBody").unwrap_err();
        assert!(matches!(err, SiteError::MetadataParse(_)));

        let err = split_front_matter("---\njust a sentence\n---\nBody").unwrap_err();
        assert!(matches!(err, SiteError::MetadataParse(_)));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = split_front_matter("---\ntitle: [unclosed\n---\nBody").unwrap_err();
        assert!(matches!(err, SiteError::MetadataParse(_)));
    }

    #[test]
    fn test_nested_title_rejected() {
        let err = split_front_matter("---\ntitle:\n  en: Hello\n---\nBody").unwrap_err();
        assert!(matches!(err, SiteError::MetadataParse(_)));
    }
}
