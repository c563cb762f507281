mod syntax;
mod markdown_renderer;

pub use syntax::{SyntaxHighlighter, DEFAULT_HIGHLIGHT_CLASS};
pub use markdown_renderer::MarkdownRenderer;
