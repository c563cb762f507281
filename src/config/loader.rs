use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::Config;
use crate::utils::error::{SiteError, SiteResult};

/// Configuration file names to look for, first match wins
const CONFIG_FILES: [&str; 3] = ["_config.yml", "_config.yaml", "_config.toml"];

/// Load site configuration.
///
/// An explicit `config_file` must exist. Otherwise the first of
/// [`CONFIG_FILES`] found in `dir` is used, and defaults when none is.
/// The result is not validated; overrides may still change it.
pub fn load_config<P: AsRef<Path>>(dir: P, config_file: Option<PathBuf>) -> SiteResult<Config> {
    let config_path = match config_file {
        Some(path) => Some(path),
        None => find_default_config_file(dir.as_ref()),
    };

    let config = match config_path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            read_config_file(&path)?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the default configuration file in a directory
fn find_default_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Read and parse a configuration file based on its extension
fn read_config_file(config_path: &Path) -> SiteResult<Config> {
    let content = fs::read_to_string(config_path).map_err(|e| {
        SiteError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    match ext.as_deref() {
        Some("yml") | Some("yaml") | None => parse_yaml_config(&content, config_path),
        Some("toml") => parse_toml_config(&content, config_path),
        Some(other) => Err(SiteError::Config(format!(
            "Unsupported configuration file format: {}",
            other
        ))),
    }
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> SiteResult<Config> {
    // An empty file is a valid, all-defaults configuration
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(content).map_err(|e| {
        SiteError::Config(format!(
            "Failed to parse YAML configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> SiteResult<Config> {
    toml::from_str(content).map_err(|e| {
        SiteError::Config(format!(
            "Failed to parse TOML configuration ({}): {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), None).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.pages_dir, PathBuf::from("pages"));
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.templates_dir, PathBuf::from("templates"));
        assert!(config.sort_pages);
    }

    #[test]
    fn test_yaml_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "pages_dir: content\nsort_pages: false\nsite:\n  name: My Site\n",
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();

        assert_eq!(config.pages_dir, PathBuf::from("content"));
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert!(!config.sort_pages);
        assert_eq!(
            config.site.get("name").and_then(|v| v.as_str()),
            Some("My Site")
        );
    }

    #[test]
    fn test_toml_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("_config.toml"),
            "public_dir = \"out\"\nmarkdown_ext = [\"md\", \"markdown\"]\n\n[site]\nname = \"Toml Site\"\n",
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();

        assert_eq!(config.public_dir, PathBuf::from("out"));
        assert_eq!(config.markdown_ext, vec!["md".to_string(), "markdown".to_string()]);
        assert_eq!(
            config.site.get("name").and_then(|v| v.as_str()),
            Some("Toml Site")
        );
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = TempDir::new().unwrap();
        let err = load_config(dir.path(), Some(dir.path().join("missing.yml"))).unwrap_err();

        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn test_unsupported_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.ini");
        fs::write(&path, "x=1").unwrap();

        assert!(matches!(load_config(dir.path(), Some(path)), Err(SiteError::Config(_))));
    }

    #[test]
    fn test_loading_does_not_validate() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "pages_dir: site\npublic_dir: site\n").unwrap();

        let config = load_config(dir.path(), None).unwrap();

        assert_eq!(config.pages_dir, config.public_dir);
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "sort_pages: [nope").unwrap();

        assert!(matches!(load_config(dir.path(), None), Err(SiteError::Config(_))));
    }
}
