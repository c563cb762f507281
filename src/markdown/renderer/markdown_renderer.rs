use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};
use comrak::Arena;
use log::debug;

use crate::config::Config;
use crate::markdown::engine::{create_comrak_options, format_document, parse_document};
use crate::markdown::renderer::syntax::SyntaxHighlighter;
use crate::utils::error::SiteResult;

/// Markdown renderer with syntax highlighting for fenced code blocks
pub struct MarkdownRenderer<'a> {
    options: comrak::Options<'a>,
    syntax_highlighter: SyntaxHighlighter,
}

impl<'a> MarkdownRenderer<'a> {
    /// Create a new markdown renderer from config
    pub fn new(config: &Config) -> Self {
        MarkdownRenderer {
            options: create_comrak_options(),
            syntax_highlighter: SyntaxHighlighter::with_class(&config.highlight_class),
        }
    }

    /// Render Markdown content to HTML.
    ///
    /// Fenced code blocks are replaced before formatting: with a language
    /// tag they go through the highlighter, without one they become a
    /// plain `<pre><code>` block.
    pub fn render(&self, content: &str) -> SiteResult<String> {
        let arena = Arena::new();
        let root = parse_document(&arena, content, &self.options);

        let fenced: Vec<&AstNode> = root
            .descendants()
            .filter(|node| matches!(node.data.borrow().value, NodeValue::CodeBlock(ref block) if block.fenced))
            .collect();

        for node in fenced {
            let replacement = {
                let data = node.data.borrow();
                match data.value {
                    NodeValue::CodeBlock(ref block) => self.render_code_block(&block.info, &block.literal)?,
                    _ => continue,
                }
            };

            node.data.borrow_mut().value = NodeValue::HtmlBlock(NodeHtmlBlock {
                block_type: 0,
                literal: replacement,
            });
        }

        format_document(root, &self.options)
    }

    /// Render one fenced block. The language is the first word of the info string.
    fn render_code_block(&self, info: &str, code: &str) -> SiteResult<String> {
        match info.split_whitespace().next() {
            Some(lang) => {
                debug!("Highlighting {} code block", lang);
                self.syntax_highlighter.highlight_code(code, lang)
            }
            None => Ok(format!(
                "<pre><code>{}</code></pre>\n",
                html_escape::encode_text(code.trim())
            )),
        }
    }
}
