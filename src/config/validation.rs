use crate::config::Config;
use crate::utils::error::{SiteError, SiteResult};
use crate::utils::fs::extension_name;

/// Validate the configuration
pub fn validate_config(config: &Config) -> SiteResult<()> {
    validate_directories(config)?;
    validate_markdown_ext(config)?;
    Ok(())
}

/// The three directories must be distinct
fn validate_directories(config: &Config) -> SiteResult<()> {
    let dirs = [
        ("pages_dir", &config.pages_dir),
        ("public_dir", &config.public_dir),
        ("templates_dir", &config.templates_dir),
    ];

    for (i, (name, dir)) in dirs.iter().enumerate() {
        for (other_name, other) in &dirs[i + 1..] {
            if dir == other {
                return Err(SiteError::Config(format!(
                    "{} and {} both point to {}",
                    name,
                    other_name,
                    dir.display()
                )));
            }
        }
    }

    Ok(())
}

/// Source extensions must be non-empty and must not include `html`
fn validate_markdown_ext(config: &Config) -> SiteResult<()> {
    if config.markdown_ext.is_empty() {
        return Err(SiteError::Config("markdown_ext must not be empty".to_string()));
    }

    for ext in &config.markdown_ext {
        let name = extension_name(ext);
        if name.is_empty() || name == "html" {
            return Err(SiteError::Config(format!(
                "'{}' is not a valid markdown extension",
                ext
            )));
        }
    }

    Ok(())
}
