use std::env;
use std::io::Write;
use std::path;

use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _silisland.yml]
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> Result<silisland_config::Config> {
        let config = if let Some(config_path) = self.config.as_deref() {
            silisland_config::Config::from_file(config_path)
                .with_context(|| format!("Error reading config file {}", config_path.display()))?
        } else {
            let cwd = env::current_dir().context("Failed to read the working directory")?;
            silisland_config::Config::from_cwd(cwd)?
        };
        log::debug!("Site root is {}", config.root.display());

        Ok(config)
    }
}

pub(crate) fn get_logging(level: log::LevelFilter, colored: bool) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    builder.filter(None, level);

    builder.format(move |f, record| {
        let style = if colored {
            level_style(record.level())
        } else {
            anstyle::Style::new()
        };
        let level = format!("[{}]", record.level()).to_lowercase();
        writeln!(f, "{style}{level:8}{style:#} {}", record.args())
    });

    builder
}

fn level_style(level: log::Level) -> anstyle::Style {
    match level {
        log::Level::Error => anstyle::AnsiColor::Red.on_default().bold(),
        log::Level::Warn => anstyle::AnsiColor::Yellow.on_default(),
        log::Level::Info => anstyle::AnsiColor::Green.on_default(),
        log::Level::Debug | log::Level::Trace => anstyle::Style::new().dimmed(),
    }
}
