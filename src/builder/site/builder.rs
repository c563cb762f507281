use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use liquid::model::Value;
use log::{debug, info, warn};

use crate::builder::page::{collect_pages, Page, Pages};
use crate::builder::site::converter::{index_globals, page_globals, site_to_liquid};
use crate::config::{validate_config, Config};
use crate::directory::clean_html_files;
use crate::layout::TemplateRenderer;
use crate::markdown::MarkdownRenderer;
use crate::utils::error::SiteResult;
use crate::utils::fs::{create_directory, write_file};

/// Template rendered once with every page
pub const INDEX_TEMPLATE: &str = "index";

/// Template rendered for each page
pub const PAGE_TEMPLATE: &str = "page";

/// Output file of the index template
pub const INDEX_FILE: &str = "index.html";

/// What a build did
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BuildReport {
    /// Number of page files written, collisions included
    pub pages_written: usize,
    /// Number of stale HTML files removed before writing
    pub removed: usize,
    /// Files written, in write order, index first
    pub outputs: Vec<PathBuf>,
}

/// A loaded site: configuration, pages and templates, ready to generate
pub struct Website {
    config: Config,
    pages: Pages,
    renderer: TemplateRenderer,
    site: Value,
}

impl Website {
    /// Load every page and the templates. Nothing is written yet.
    pub fn load(config: &Config) -> SiteResult<Self> {
        validate_config(config)?;

        info!("Loading pages from {}", config.pages_dir.display());
        let markdown_renderer = MarkdownRenderer::new(config);
        let pages = collect_pages(config, &markdown_renderer)?;
        info!("Loaded {} pages", pages.len());

        let renderer = TemplateRenderer::new(&config.templates_dir)?;
        debug!("Templates loaded from {}", renderer.templates_dir().display());

        Ok(Website {
            config: config.clone(),
            pages,
            renderer,
            site: site_to_liquid(config),
        })
    }

    /// Pages in the order they will be written
    pub fn pages(&self) -> &Pages {
        &self.pages
    }

    /// Clean the output directory, then write the index and every page
    pub fn generate(&self) -> SiteResult<BuildReport> {
        let mut report = BuildReport::default();

        create_directory(&self.config.public_dir)?;
        report.removed = clean_html_files(&self.config.public_dir)?;

        info!("Writing index");
        report.outputs.push(self.write_index()?);

        info!("Writing {} pages", self.pages.len());
        let mut slugs = HashSet::new();
        for page in &self.pages {
            if !slugs.insert(page.slug()) {
                warn!(
                    "Slug '{}' of {} was already used, its output is overwritten",
                    page.slug(),
                    page.path.display()
                );
            }
            report.outputs.push(self.write_page(page)?);
            report.pages_written += 1;
        }

        Ok(report)
    }

    /// Render the index template with the full page collection
    fn write_index(&self) -> SiteResult<PathBuf> {
        let globals = index_globals(&self.pages, &self.site);
        let html_content = self.renderer.render(INDEX_TEMPLATE, &globals)?;

        let html_path = self.config.public_dir.join(INDEX_FILE);
        write_file(&html_path, &html_content)?;
        Ok(html_path)
    }

    /// Render the page template for one page into `<slug>.html`
    fn write_page(&self, page: &Page) -> SiteResult<PathBuf> {
        let globals = page_globals(page, &self.pages, &self.site);
        let html_content = self.renderer.render(PAGE_TEMPLATE, &globals)?;

        let html_path = self.config.public_dir.join(page.output_file_name());
        debug!("page: {} -> {}", page.path.display(), html_path.display());
        write_file(&html_path, &html_content)?;
        Ok(html_path)
    }
}

/// Build the site: load, clean, index, then one file per page.
///
/// The first error aborts the run. Files already written stay in place.
pub fn build_site(config: &Config) -> SiteResult<BuildReport> {
    let start_time = Instant::now();

    let site = Website::load(config)?;
    let report = site.generate()?;

    info!(
        "Wrote {} pages and the index to {} in {:.2?}",
        report.pages_written,
        config.public_dir.display(),
        start_time.elapsed()
    );
    Ok(report)
}
