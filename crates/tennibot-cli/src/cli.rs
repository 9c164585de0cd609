//! CLI argument definitions for tennibot.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tennibot")]
#[command(about = "Tennis shot scoring form", version)]
pub struct Args {
    /// Number of shots per player (1-50)
    #[arg(long, env = "TENNIBOT_SHOTS")]
    pub shots: Option<String>,

    /// Pre-fill the player name
    #[arg(long)]
    pub player: Option<String>,

    /// Do not clear the terminal between frames
    #[arg(long)]
    pub no_clear: bool,

    /// Print the session summary as JSON on exit
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score shots interactively (default)
    Score,
    /// List the rating criteria and their options
    Criteria {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
