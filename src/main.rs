use clap::{CommandFactory, Parser};
use modweave::cli::Cli;
use modweave::commands::dispatch;
use modweave::config::{ConfigSearch, ConfigState};
use modweave::domain::constants::LOG_ENV;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(directive) = cli.directive() else {
        Cli::command().print_help()?;
        eprintln!("\nerror: no command provided");
        std::process::exit(1);
    };

    let code = dispatch(&cli, &directive, || {
        Ok(ConfigState::load(&ConfigSearch::from_env(cli.config.clone()))?)
    })?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
