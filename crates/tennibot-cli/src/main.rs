mod cli;
mod commands;
mod display;
mod input;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the drawn form
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tennibot=warn,tennibot_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Some(Command::Criteria { json }) => commands::criteria::run(json),
        Some(Command::Score) | None => commands::score::run(commands::score::ScoreOptions {
            shots: args.shots,
            player: args.player,
            clear: !args.no_clear,
            json: args.json,
        }),
    }
}
