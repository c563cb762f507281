use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Common result type for site operations
pub type SiteResult<T> = Result<T, SiteError>;

/// Error types for a site build. Every one of them aborts the run.
#[derive(Debug)]
pub enum SiteError {
    /// A source file could not be opened or read
    SourceRead { path: PathBuf, source: io::Error },
    /// The front matter block is not a key/value mapping
    MetadataParse(String),
    /// A front matter block is present but lacks a required key
    MissingField(&'static str),
    /// A fenced code block names a language the highlighter does not know
    UnknownLanguage(String),
    /// The HTML formatter failed
    Markdown(String),
    /// No template with this name in the template directory
    TemplateNotFound(String),
    /// The template could not be parsed
    TemplateSyntax { name: String, message: String },
    /// The template parsed but failed while rendering
    TemplateRender { name: String, message: String },
    /// An output file or directory could not be created, written or removed
    OutputWrite { path: PathBuf, source: io::Error },
    /// Configuration error
    Config(String),
    /// Error raised while building the page loaded from `path`
    Page { path: PathBuf, source: Box<SiteError> },
}

impl SiteError {
    /// Attach the path of the source page being processed
    pub fn in_page(self, path: impl Into<PathBuf>) -> Self {
        SiteError::Page {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with any page context stripped
    pub fn root(&self) -> &SiteError {
        match self {
            SiteError::Page { source, .. } => source.root(),
            other => other,
        }
    }
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::SourceRead { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            SiteError::MetadataParse(msg) => write!(f, "Front matter error: {}", msg),
            SiteError::MissingField(field) => {
                write!(f, "Front matter error: missing required field '{}'", field)
            }
            SiteError::UnknownLanguage(lang) => {
                write!(f, "No syntax highlighter for language '{}'", lang)
            }
            SiteError::Markdown(msg) => write!(f, "Markdown error: {}", msg),
            SiteError::TemplateNotFound(name) => write!(f, "Template not found: {}", name),
            SiteError::TemplateSyntax { name, message } => {
                write!(f, "Failed to parse template {}: {}", name, message)
            }
            SiteError::TemplateRender { name, message } => {
                write!(f, "Failed to render template {}: {}", name, message)
            }
            SiteError::OutputWrite { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
            SiteError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SiteError::Page { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl Error for SiteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SiteError::SourceRead { source, .. } => Some(source),
            SiteError::OutputWrite { source, .. } => Some(source),
            SiteError::Page { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
