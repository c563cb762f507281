use std::path::{Path, PathBuf};

use crate::front_matter::{split_front_matter, Metadata};
use crate::markdown::MarkdownRenderer;
use crate::utils::error::SiteResult;
use crate::utils::fs::read_file;

/// A page in the site, built once from one source file
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Source file
    pub path: PathBuf,
    /// File contents after the front matter block
    pub text: String,
    /// Metadata from the front matter, or the untitled defaults
    pub metadata: Metadata,
    /// Rendered body
    pub html: String,
}

impl Page {
    /// Read, split and render a source file
    pub fn load<P: AsRef<Path>>(path: P, renderer: &MarkdownRenderer<'_>) -> SiteResult<Page> {
        let path = path.as_ref();
        let raw = read_file(path)?;
        Page::from_text(path, &raw, renderer).map_err(|e| e.in_page(path))
    }

    /// Build a page from already-read contents
    pub fn from_text<P: AsRef<Path>>(
        path: P,
        raw: &str,
        renderer: &MarkdownRenderer<'_>,
    ) -> SiteResult<Page> {
        let (metadata, body) = split_front_matter(raw)?;
        let html = renderer.render(body)?;

        Ok(Page {
            path: path.as_ref().to_path_buf(),
            text: body.to_string(),
            metadata,
            html,
        })
    }

    /// Output file stem
    pub fn slug(&self) -> &str {
        &self.metadata.slug
    }

    /// Output file name, `<slug>.html`
    pub fn output_file_name(&self) -> String {
        format!("{}.html", self.metadata.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::utils::error::SiteError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_page_with_front_matter() {
        let renderer = MarkdownRenderer::new(&Config::default());
        let page = Page::from_text(
            "pages/hello.md",
            "---\ntitle: Hello World\ndate: 2024-01-02\n---\n# Hi\n",
            &renderer,
        )
        .unwrap();

        assert_eq!(page.path, PathBuf::from("pages/hello.md"));
        assert_eq!(page.text, "# Hi\n");
        assert_eq!(page.metadata.title, "Hello World");
        assert_eq!(page.slug(), "hello-world");
        assert_eq!(page.metadata.date, "2024-01-02");
        assert_eq!(page.output_file_name(), "hello-world.html");
        assert!(page.html.contains("<h1>Hi</h1>"));
    }

    #[test]
    fn test_page_without_front_matter() {
        let renderer = MarkdownRenderer::new(&Config::default());
        let raw = "Plain *text*\n";
        let page = Page::from_text("pages/plain.md", raw, &renderer).unwrap();

        assert_eq!(page.text, raw);
        assert_eq!(page.metadata, Metadata::untitled());
        assert_eq!(page.output_file_name(), "untitled.html");
        assert!(page.html.contains("<em>text</em>"));
    }

    #[test]
    fn test_load_reports_page_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.md");
        fs::write(&path, "---\nauthor: nobody\n---\nBody").unwrap();

        let renderer = MarkdownRenderer::new(&Config::default());
        let err = Page::load(&path, &renderer).unwrap_err();

        assert!(matches!(&err, SiteError::Page { path: p, .. } if p == &path));
        assert!(matches!(err.root(), SiteError::MissingField("title")));
    }

    #[test]
    fn test_load_unknown_language() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("code.md");
        fs::write(&path, "---\ntitle: Code\n---\n```no-such-language\nx\n```\n").unwrap();

        let renderer = MarkdownRenderer::new(&Config::default());
        let err = Page::load(&path, &renderer).unwrap_err();

        assert!(matches!(err.root(), SiteError::UnknownLanguage(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let renderer = MarkdownRenderer::new(&Config::default());
        let err = Page::load(dir.path().join("gone.md"), &renderer).unwrap_err();

        assert!(matches!(err, SiteError::SourceRead { .. }));
    }
}
