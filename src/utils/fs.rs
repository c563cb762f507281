use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use crate::utils::error::{SiteError, SiteResult};

/// Read a source file to string. The handle is closed before returning.
pub fn read_file<P: AsRef<Path>>(path: P) -> SiteResult<String> {
    let path = path.as_ref();
    let read = || -> std::io::Result<String> {
        let mut file = fs::File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(contents)
    };

    read().map_err(|source| SiteError::SourceRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a string to an output file, creating or truncating it
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> SiteResult<()> {
    let path = path.as_ref();
    let write = || -> std::io::Result<()> {
        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()
    };

    write().map_err(|source| SiteError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Create an output directory and any missing parents
pub fn create_directory<P: AsRef<Path>>(path: P) -> SiteResult<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|source| SiteError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// A configured extension without its optional leading dot
pub fn extension_name(ext: &str) -> &str {
    ext.strip_prefix('.').unwrap_or(ext)
}

/// Check whether a path has one of the given extensions. Case matters.
pub fn has_extension<P: AsRef<Path>>(path: P, extensions: &[String]) -> bool {
    match path.as_ref().extension() {
        Some(ext) => extensions.iter().any(|e| ext == extension_name(e)),
        None => false,
    }
}
