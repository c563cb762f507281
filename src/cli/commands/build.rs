use log::info;

use crate::builder;
use crate::config::Config;
use crate::utils::error::SiteResult;

/// Handle the build command
pub fn handle_build_command(config: &Config) -> SiteResult<()> {
    info!("Building site...");

    let report = builder::build_site(config)?;

    info!(
        "Site built successfully at {} ({} stale files removed)",
        config.public_dir.display(),
        report.removed
    );
    Ok(())
}
