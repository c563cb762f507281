use log::info;

use crate::config::Config;
use crate::directory::clean_html_files;
use crate::utils::error::SiteResult;

/// Handle the clean command
pub fn handle_clean_command(config: &Config) -> SiteResult<()> {
    if !config.public_dir.exists() {
        info!("Nothing to clean, {} does not exist", config.public_dir.display());
        return Ok(());
    }

    let removed = clean_html_files(&config.public_dir)?;
    info!("Removed {} HTML files from {}", removed, config.public_dir.display());
    Ok(())
}
