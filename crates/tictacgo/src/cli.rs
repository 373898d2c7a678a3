//! Command-line interface for tictacgo.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// TicTacGo - tic-tac-toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "tictacgo")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game
    Play(PlayArgs),

    /// Print the rules and exit
    Rules,
}

/// Options for a game.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Path to a TOML config file (default: tictacgo.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name for player X (skips the prompt)
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name for player O (skips the prompt)
    #[arg(long)]
    pub player_o: Option<String>,

    /// Disable colors in the banner and prompts
    #[arg(long)]
    pub plain: bool,
}
