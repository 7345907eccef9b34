mod args;
mod check;
mod debug;
mod error;

use clap::Parser;

use crate::error::*;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    let colored_stderr = !matches!(
        anstream::AutoStream::choice(&std::io::stderr()),
        anstream::ColorChoice::Never
    );
    args::get_logging(cli.verbose.log_level_filter(), colored_stderr).init();

    if let Err(err) = cli.command.run(&cli.config) {
        log::error!("{err:#}");
        return Err(proc_exit::Exit::new(proc_exit::Code::FAILURE));
    }

    Ok(())
}

/// Inspect and check the silisland site metadata
#[derive(Clone, Debug, clap::Parser)]
#[command(name = "silisland", version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten, next_help_heading = "Config")]
    config: args::ConfigArgs,

    #[command(flatten)]
    color: colorchoice_clap::Color,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    Check(check::CheckArgs),

    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    fn run(&self, config: &args::ConfigArgs) -> Result<()> {
        match self {
            Self::Check(cmd) => cmd.run(config),
            Self::Debug(cmd) => cmd.run(config),
        }
    }
}

#[test]
fn verify_app() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
