use std::collections::BTreeMap;

use serde_yaml::Value;

use crate::utils::slugify;

/// Title used when a document has no front matter
pub const UNTITLED: &str = "Untitled";

/// Slug used when a document has no front matter
pub const UNTITLED_SLUG: &str = "untitled";

/// Date used when a document does not declare one
pub const NO_DATE: &str = "0000-00-00";

/// Page metadata taken from the front matter block.
///
/// `title`, `slug` and `date` are always present. Every other key the
/// author wrote is kept untouched in `extra` and handed to the templates.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub title: String,
    pub slug: String,
    pub date: String,
    pub extra: BTreeMap<String, Value>,
}

impl Metadata {
    /// Metadata for a document without front matter.
    ///
    /// The slug is set directly rather than derived from the title.
    pub fn untitled() -> Self {
        Metadata {
            title: UNTITLED.to_string(),
            slug: UNTITLED_SLUG.to_string(),
            date: NO_DATE.to_string(),
            extra: BTreeMap::new(),
        }
    }

    /// Metadata for a document whose front matter declares `title`
    pub fn with_title(title: impl Into<String>, date: Option<String>) -> Self {
        let title = title.into();
        Metadata {
            slug: slugify(&title),
            title,
            date: date.unwrap_or_else(|| NO_DATE.to_string()),
            extra: BTreeMap::new(),
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::untitled()
    }
}

/// String form of a YAML scalar; `None` for null, sequences and mappings
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untitled_defaults() {
        let meta = Metadata::untitled();

        assert_eq!(meta.title, "Untitled");
        assert_eq!(meta.slug, "untitled");
        assert_eq!(meta.date, "0000-00-00");
        assert!(meta.extra.is_empty());
    }

    #[test]
    fn test_with_title_derives_slug() {
        let meta = Metadata::with_title("My First Post", Some("2024-03-01".to_string()));

        assert_eq!(meta.slug, "my-first-post");
        assert_eq!(meta.date, "2024-03-01");
        assert_eq!(meta.title, "My First Post");
        assert!(meta.extra.is_empty());
    }

    #[test]
    fn test_scalar_to_string() {
        assert_eq!(scalar_to_string(&Value::from(2024)), Some("2024".to_string()));
        assert_eq!(scalar_to_string(&Value::from(true)), Some("true".to_string()));
        assert_eq!(scalar_to_string(&Value::Null), None);
        assert_eq!(scalar_to_string(&Value::Sequence(vec![])), None);
    }
}
