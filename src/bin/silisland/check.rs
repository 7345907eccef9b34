use silisland_core::ContentDirs;

use crate::args;
use crate::error::*;

/// Validate the site metadata and look for its content directories
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {}

impl CheckArgs {
    pub(crate) fn run(&self, config: &args::ConfigArgs) -> Result<()> {
        let config = config.load_config()?;
        let content = ContentDirs::from_config(&config)?;

        let missing: Vec<_> = content.missing().collect();
        for dir in &missing {
            log::warn!(
                "Content directory `{dir}` does not exist under {}",
                content.root().display()
            );
        }
        if !missing.is_empty() {
            anyhow::bail!(
                "{} of {} content directories are missing",
                missing.len(),
                config.site.include.len()
            );
        }

        for dir in content.ignored() {
            log::warn!("Content directory `{dir}` is excluded by the `ignore` patterns");
        }

        let count = content.files().count();
        log::info!(
            "Found {count} content files in {} directories",
            config.site.include.len()
        );
        println!("{} ok", config.site.target_domain());

        Ok(())
    }
}
