//! pressmark turns a directory of Markdown pages into a static HTML site.
//!
//! Each page may open with a YAML front matter block. Pages are rendered to
//! HTML with highlighted code blocks, then handed to two Liquid templates:
//! `index` once for the whole collection and `page` once per page.

pub mod builder;
pub mod cli;
pub mod config;
pub mod directory;
pub mod front_matter;
pub mod layout;
pub mod markdown;
pub mod utils;

pub use builder::{build_site, BuildReport, Page, Pages, Website};
pub use config::Config;
pub use front_matter::{split_front_matter, Metadata};
pub use layout::TemplateRenderer;
pub use markdown::MarkdownRenderer;
pub use utils::{slugify, SiteError, SiteResult};
