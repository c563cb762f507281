use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::utils::error::{SiteError, SiteResult};

/// Default CSS class on the element wrapping highlighted code
pub const DEFAULT_HIGHLIGHT_CLASS: &str = "highlight";

/// Syntax highlighter for fenced code blocks, emitting CSS classes
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    wrapper_class: String,
}

impl SyntaxHighlighter {
    /// Create a new syntax highlighter with the bundled syntax definitions
    pub fn new() -> Self {
        Self::with_class(DEFAULT_HIGHLIGHT_CLASS)
    }

    /// Create a highlighter whose wrapper `<div>` carries `class`
    pub fn with_class(class: &str) -> Self {
        SyntaxHighlighter {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            wrapper_class: class.to_string(),
        }
    }

    /// Highlight a code block in the given language.
    ///
    /// Leading and trailing whitespace is stripped first. An unknown
    /// language is an error; there is no plain-text fallback.
    pub fn highlight_code(&self, code: &str, lang: &str) -> SiteResult<String> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .ok_or_else(|| SiteError::UnknownLanguage(lang.to_string()))?;

        let mut html_generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::Spaced,
        );

        let mut code = code.trim().to_string();
        code.push('\n');
        for line in LinesWithEndings::from(&code) {
            html_generator
                .parse_html_for_line_which_includes_newline(line)
                .map_err(|e| SiteError::Markdown(format!("highlighting {} failed: {}", lang, e)))?;
        }

        let highlighted_html = html_generator.finalize();

        Ok(format!(
            "<div class=\"{}\"><pre><code class=\"language-{}\">{}</code></pre></div>\n",
            html_escape::encode_double_quoted_attribute(&self.wrapper_class),
            html_escape::encode_double_quoted_attribute(lang),
            highlighted_html
        ))
    }
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
