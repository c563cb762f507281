pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::error;
use std::path::Path;

use crate::config::{self, Config};
use crate::utils::error::SiteResult;

/// Run the command-line interface, returning the process exit code
pub fn run() -> i32 {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug, cli.quiet);

    match execute(&cli) {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}

fn execute(cli: &types::Cli) -> SiteResult<()> {
    let config = resolve_config(Path::new("."), &cli.options)?;

    match cli.command {
        // Default to build command if none provided
        Some(types::Commands::Build) | None => commands::handle_build_command(&config),
        Some(types::Commands::Clean) => commands::handle_clean_command(&config),
    }
}

/// Load the configuration from `dir`, apply the command line overrides,
/// then validate the result
fn resolve_config(dir: &Path, options: &types::SiteOptions) -> SiteResult<Config> {
    let mut config = config::load_config(dir, options.config.clone())?;
    apply_overrides(&mut config, options);
    config::validate_config(&config)?;
    Ok(config)
}

fn apply_overrides(config: &mut Config, options: &types::SiteOptions) {
    if let Some(pages) = &options.pages {
        config.pages_dir = pages.clone();
    }
    if let Some(public) = &options.public {
        config.public_dir = public.clone();
    }
    if let Some(templates) = &options.templates {
        config.templates_dir = templates.clone();
    }
    if options.unsorted {
        config.sort_pages = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SiteError;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_overrides_replace_config_values() {
        let mut config = Config::default();
        let options = types::SiteOptions {
            pages: Some(PathBuf::from("content")),
            public: Some(PathBuf::from("out")),
            unsorted: true,
            ..Default::default()
        };

        apply_overrides(&mut config, &options);

        assert_eq!(config.pages_dir, PathBuf::from("content"));
        assert_eq!(config.public_dir, PathBuf::from("out"));
        assert_eq!(config.templates_dir, PathBuf::from("templates"));
        assert!(!config.sort_pages);
    }

    #[test]
    fn test_override_fixes_clashing_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "pages_dir: site\npublic_dir: site\n").unwrap();

        let err = resolve_config(dir.path(), &types::SiteOptions::default()).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));

        let options = types::SiteOptions {
            public: Some(PathBuf::from("out")),
            ..Default::default()
        };
        let config = resolve_config(dir.path(), &options).unwrap();

        assert_eq!(config.pages_dir, PathBuf::from("site"));
        assert_eq!(config.public_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let mut config = Config::default();
        apply_overrides(&mut config, &types::SiteOptions::default());

        assert_eq!(config, Config::default());
    }
}
