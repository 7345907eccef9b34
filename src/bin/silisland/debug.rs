use silisland_core::ContentDirs;

use crate::args;
use crate::error::*;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints post-processed config
    Config,

    /// Prints the site metadata as template globals
    Globals,

    /// Print files of the included content directories
    Files {
        /// Content directory, one of `include`
        dir: Option<String>,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self, config: &args::ConfigArgs) -> Result<()> {
        match self {
            Self::Config => {
                let config = config.load_config()?;
                print!("{config}");
            }
            Self::Globals => {
                let config = config.load_config()?;
                let globals = silisland::SiteGlobals::from_config(&config.site).build();
                println!("{}", silisland::to_sorted_json(&globals)?);
            }
            Self::Files { dir } => {
                let config = config.load_config()?;
                let content = ContentDirs::from_config(&config)?;
                let files = match dir.as_deref() {
                    Some(dir) => content.files_in(dir)?,
                    None => content.files().collect(),
                };
                for file in files {
                    println!("{}", file.rel_path);
                }
            }
        }

        Ok(())
    }
}
