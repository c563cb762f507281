use comrak::nodes::AstNode;
use comrak::{Arena, Options};

use crate::utils::error::{SiteError, SiteResult};

/// Create ComrakOptions with GitHub Flavored Markdown settings
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;

    // Render options
    options.render.hardbreaks = false;
    options.render.unsafe_ = true; // highlighted code is spliced in as raw HTML

    options
}

/// Parse markdown into a comrak AST allocated in `arena`
pub fn parse_document<'a>(
    arena: &'a Arena<AstNode<'a>>,
    content: &str,
    options: &Options,
) -> &'a AstNode<'a> {
    comrak::parse_document(arena, content, options)
}

/// Format a comrak AST as HTML
pub fn format_document<'a>(root: &'a AstNode<'a>, options: &Options) -> SiteResult<String> {
    let mut output = Vec::new();
    comrak::format_html(root, options, &mut output)
        .map_err(|e| SiteError::Markdown(format!("failed to format HTML: {}", e)))?;
    String::from_utf8(output).map_err(|e| SiteError::Markdown(e.to_string()))
}
