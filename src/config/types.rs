use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Site configuration structure.
///
/// Read once at the start of a run and never re-read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for Markdown sources
    #[serde(default = "defaults::default_pages_dir")]
    pub pages_dir: PathBuf,

    /// Directory the generated HTML is written to
    #[serde(default = "defaults::default_public_dir")]
    pub public_dir: PathBuf,

    /// Directory the templates are loaded from
    #[serde(default = "defaults::default_templates_dir")]
    pub templates_dir: PathBuf,

    /// Extensions of source files, with or without a leading dot, compared case-sensitively
    #[serde(default = "defaults::default_markdown_ext")]
    pub markdown_ext: Vec<String>,

    /// Sort pages by file name instead of directory listing order
    #[serde(default = "defaults::default_sort_pages")]
    pub sort_pages: bool,

    /// CSS class on the wrapper of highlighted code blocks
    #[serde(default = "defaults::default_highlight_class")]
    pub highlight_class: String,

    /// Free-form values exposed to every template as `site`
    #[serde(default)]
    pub site: serde_yaml::Mapping,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pages_dir: defaults::default_pages_dir(),
            public_dir: defaults::default_public_dir(),
            templates_dir: defaults::default_templates_dir(),
            markdown_ext: defaults::default_markdown_ext(),
            sort_pages: defaults::default_sort_pages(),
            highlight_class: defaults::default_highlight_class(),
            site: serde_yaml::Mapping::new(),
        }
    }
}

impl Config {
    /// Configuration rooted at explicit directories, everything else default
    pub fn with_dirs(
        pages_dir: impl Into<PathBuf>,
        public_dir: impl Into<PathBuf>,
        templates_dir: impl Into<PathBuf>,
    ) -> Self {
        Config {
            pages_dir: pages_dir.into(),
            public_dir: public_dir.into(),
            templates_dir: templates_dir.into(),
            ..Config::default()
        }
    }
}
