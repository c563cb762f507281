mod builder;
mod converter;

pub use builder::{build_site, BuildReport, Website, INDEX_FILE, INDEX_TEMPLATE, PAGE_TEMPLATE};
pub use converter::{index_globals, metadata_to_liquid, page_globals, page_to_liquid, site_to_liquid};
