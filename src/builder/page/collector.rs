use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::builder::page::model::Page;
use crate::config::Config;
use crate::markdown::MarkdownRenderer;
use crate::utils::error::{SiteError, SiteResult};
use crate::utils::fs::has_extension;

/// The pages of one build, in collection order
#[derive(Debug, Clone, Default)]
pub struct Pages {
    directory: PathBuf,
    pages: Vec<Page>,
    /// Every extra front matter key used by at least one page
    extra_keys: BTreeSet<String>,
}

impl Pages {
    /// Source directory the pages were collected from
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }

    /// Extra metadata keys across the whole collection, sorted
    pub fn extra_keys(&self) -> &BTreeSet<String> {
        &self.extra_keys
    }
}

impl<'p> IntoIterator for &'p Pages {
    type Item = &'p Page;
    type IntoIter = std::slice::Iter<'p, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

/// Collect one page per Markdown file directly inside `config.pages_dir`.
///
/// With `sort_pages` the order is by file name, otherwise it is whatever
/// the directory listing yields. The first page that fails aborts.
pub fn collect_pages(config: &Config, renderer: &MarkdownRenderer<'_>) -> SiteResult<Pages> {
    let directory = &config.pages_dir;
    debug!("Collecting pages from {}", directory.display());

    let mut walker = WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);
    if config.sort_pages {
        walker = walker.sort_by_file_name();
    }

    let mut pages = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| SiteError::SourceRead {
            path: e.path().unwrap_or(directory.as_path()).to_path_buf(),
            source: io::Error::from(e),
        })?;

        let path = entry.path();
        if !entry.file_type().is_file() || !has_extension(path, &config.markdown_ext) {
            continue;
        }

        debug!("Loading page {}", path.display());
        pages.push(Page::load(path, renderer)?);
    }

    let extra_keys: BTreeSet<String> = pages
        .iter()
        .flat_map(|page| page.metadata.extra.keys().cloned())
        .collect();
    debug!("Collected {} pages, {} extra keys", pages.len(), extra_keys.len());

    Ok(Pages {
        directory: directory.clone(),
        pages,
        extra_keys,
    })
}
