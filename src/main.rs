//! wadkit - WAD archive and packaging tools

use anyhow::Result;
use clap::Parser;

mod cli;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    cli::dispatch(cli)
}
