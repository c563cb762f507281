use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::utils::error::{SiteError, SiteResult};

/// Remove every `*.html` file directly inside `dir`.
///
/// Other files and all sub-directories are left alone. Returns the number
/// of files removed.
pub fn clean_html_files(dir: &Path) -> SiteResult<usize> {
    let output_error = |path: &Path, source| SiteError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    info!("Cleaning HTML files in {}", dir.display());

    let mut removed = 0;
    for entry in fs::read_dir(dir).map_err(|e| output_error(dir, e))? {
        let entry = entry.map_err(|e| output_error(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| output_error(&path, e))?;

        if file_type.is_dir() || path.extension().map_or(true, |ext| ext != "html") {
            continue;
        }

        fs::remove_file(&path).map_err(|e| output_error(&path, e))?;
        debug!("Removed {}", path.display());
        removed += 1;
    }

    Ok(removed)
}
