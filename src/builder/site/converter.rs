use std::collections::BTreeSet;

use liquid::model::Value;
use liquid::Object;

use crate::builder::page::{Page, Pages};
use crate::builder::processor::{mapping_to_liquid, yaml_to_liquid};
use crate::config::Config;
use crate::front_matter::Metadata;

/// Convert page metadata to a Liquid object, extra keys included.
///
/// Keys in `known_keys` that this page does not set are present as nil,
/// so templates can test optional keys without failing the lookup.
pub fn metadata_to_liquid(metadata: &Metadata, known_keys: &BTreeSet<String>) -> Object {
    let mut obj = Object::new();

    for key in known_keys {
        obj.insert(key.clone().into(), Value::Nil);
    }
    for (key, value) in &metadata.extra {
        obj.insert(key.clone().into(), yaml_to_liquid(value.clone()));
    }

    obj.insert("title".into(), Value::scalar(metadata.title.clone()));
    obj.insert("slug".into(), Value::scalar(metadata.slug.clone()));
    obj.insert("date".into(), Value::scalar(metadata.date.clone()));

    obj
}

/// Convert a page to a Liquid value for template rendering
pub fn page_to_liquid(page: &Page, known_keys: &BTreeSet<String>) -> Value {
    let mut obj = Object::new();

    obj.insert("path".into(), Value::scalar(page.path.to_string_lossy().to_string()));
    obj.insert("text".into(), Value::scalar(page.text.clone()));
    obj.insert("html".into(), Value::scalar(page.html.clone()));

    // Well-known keys are also reachable without going through `meta`
    obj.insert("title".into(), Value::scalar(page.metadata.title.clone()));
    obj.insert("slug".into(), Value::scalar(page.metadata.slug.clone()));
    obj.insert("date".into(), Value::scalar(page.metadata.date.clone()));

    obj.insert("meta".into(), Value::Object(metadata_to_liquid(&page.metadata, known_keys)));

    Value::Object(obj)
}

/// Site-wide values from the configuration
pub fn site_to_liquid(config: &Config) -> Value {
    Value::Object(mapping_to_liquid(config.site.clone()))
}

/// Globals for the index template: every page plus the site values
pub fn index_globals(pages: &Pages, site: &Value) -> Object {
    let mut globals = Object::new();
    globals.insert(
        "pages".into(),
        Value::Array(
            pages
                .iter()
                .map(|page| page_to_liquid(page, pages.extra_keys()))
                .collect(),
        ),
    );
    globals.insert("site".into(), site.clone());
    globals
}

/// Globals for the page template: one page plus the site values
pub fn page_globals(page: &Page, pages: &Pages, site: &Value) -> Object {
    let mut globals = Object::new();
    globals.insert("page".into(), page_to_liquid(page, pages.extra_keys()));
    globals.insert("site".into(), site.clone());
    globals
}
