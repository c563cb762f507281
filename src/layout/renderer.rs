use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use liquid::partials::{InMemorySource, LazyCompiler};
use liquid::{Object, Parser, Template};
use log::{debug, warn};

use crate::utils::error::{SiteError, SiteResult};

type Partials = LazyCompiler<InMemorySource>;

/// Liquid template renderer over a snapshot of the template directory.
///
/// Templates are found by file name (`page.html`) or by stem (`page`).
/// Files added to the directory after construction are not seen.
pub struct TemplateRenderer {
    /// Template directory
    templates_dir: PathBuf,

    /// File name to template source
    sources: HashMap<String, String>,

    /// Stem to file name
    aliases: HashMap<String, String>,

    /// Liquid parser, with every template available as an include
    parser: Parser,

    /// Parsed templates by file name
    cache: RefCell<HashMap<String, Rc<Template>>>,
}

impl TemplateRenderer {
    /// Load every template in `templates_dir`
    pub fn new<P: AsRef<Path>>(templates_dir: P) -> SiteResult<Self> {
        let templates_dir = templates_dir.as_ref().to_path_buf();
        let sources = read_templates(&templates_dir)?;

        let mut names: Vec<&String> = sources.keys().collect();
        names.sort();

        let mut aliases: HashMap<String, String> = HashMap::new();
        let mut partials = InMemorySource::new();
        for name in names {
            partials.add(name.clone(), sources[name].clone());

            let stem = match Path::new(name).file_stem() {
                Some(stem) => stem.to_string_lossy().to_string(),
                None => continue,
            };
            match aliases.entry(stem) {
                Entry::Vacant(entry) => {
                    entry.insert(name.clone());
                }
                Entry::Occupied(mut entry) => {
                    if name.ends_with(".html") && !entry.get().ends_with(".html") {
                        entry.insert(name.clone());
                    }
                }
            }
        }

        let parser = liquid::ParserBuilder::with_stdlib()
            .partials(Partials::new(partials))
            .build()
            .map_err(|e| SiteError::TemplateSyntax {
                name: templates_dir.display().to_string(),
                message: e.to_string(),
            })?;

        debug!("Loaded {} templates from {}", sources.len(), templates_dir.display());

        Ok(TemplateRenderer {
            templates_dir,
            sources,
            aliases,
            parser,
            cache: RefCell::new(HashMap::new()),
        })
    }

    /// Directory the templates were loaded from
    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Render the named template against `globals`
    pub fn render(&self, name: &str, globals: &Object) -> SiteResult<String> {
        let template = self.template(name)?;

        template
            .render(globals)
            .map_err(|e| SiteError::TemplateRender {
                name: name.to_string(),
                message: e.to_string(),
            })
    }

    /// Parse the named template, or fetch it from the cache
    fn template(&self, name: &str) -> SiteResult<Rc<Template>> {
        let file_name = self
            .resolve(name)
            .ok_or_else(|| SiteError::TemplateNotFound(name.to_string()))?;

        if let Some(template) = self.cache.borrow().get(file_name) {
            return Ok(Rc::clone(template));
        }

        let template = self
            .parser
            .parse(&self.sources[file_name])
            .map_err(|e| SiteError::TemplateSyntax {
                name: file_name.to_string(),
                message: e.to_string(),
            })?;
        let template = Rc::new(template);

        self.cache
            .borrow_mut()
            .insert(file_name.to_string(), Rc::clone(&template));
        Ok(template)
    }

    /// Map a requested name to a loaded file name
    fn resolve(&self, name: &str) -> Option<&str> {
        if let Some((file_name, _)) = self.sources.get_key_value(name) {
            return Some(file_name.as_str());
        }
        self.aliases.get(name).map(String::as_str)
    }
}

/// Read every UTF-8 regular file directly inside `dir`
fn read_templates(dir: &Path) -> SiteResult<HashMap<String, String>> {
    let read_error = |source| SiteError::SourceRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut sources = HashMap::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        let bytes = fs::read(&path).map_err(|source| SiteError::SourceRead {
            path: path.clone(),
            source,
        })?;

        match String::from_utf8(bytes) {
            Ok(content) => {
                sources.insert(file_name, content);
            }
            Err(_) => warn!("Skipping non UTF-8 file in templates: {}", path.display()),
        }
    }

    Ok(sources)
}
