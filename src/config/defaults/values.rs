use std::path::PathBuf;

use crate::markdown::renderer::DEFAULT_HIGHLIGHT_CLASS;

/// Default directory holding the Markdown sources
pub fn default_pages_dir() -> PathBuf {
    PathBuf::from("pages")
}

/// Default directory the HTML is written to
pub fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

/// Default directory holding the `index` and `page` templates
pub fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

/// Default source extensions
pub fn default_markdown_ext() -> Vec<String> {
    vec!["md".to_string()]
}

/// Pages are sorted by file name unless configured otherwise
pub fn default_sort_pages() -> bool {
    true
}

/// Default class for highlighted code wrappers
pub fn default_highlight_class() -> String {
    DEFAULT_HIGHLIGHT_CLASS.to_string()
}
