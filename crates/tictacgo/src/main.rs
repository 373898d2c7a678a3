//! TicTacGo - terminal tic-tac-toe for two local players.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use std::io;
use tictacgo::{GameConfig, LinePrompter, Session, ask_names, render_banner, terminal_width};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.verbose);

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_game(args),
        Command::Rules => {
            println!("{}", render_banner(terminal_width(), false));
            Ok(())
        }
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run one interactive game on stdin/stdout
#[instrument(skip_all)]
fn run_game(args: PlayArgs) -> Result<()> {
    let config = load_config(&args)?;
    info!(?config, "Starting TicTacGo");

    println!("{}", render_banner(terminal_width(), *config.styled()));

    let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
    let players = ask_names(&config, &mut prompter).context("Failed to set up players")?;

    let mut session = Session::new(players, config, prompter);
    let status = session.run().context("Game ended abnormally")?;
    info!(%status, "Game over");
    Ok(())
}

#[instrument(skip(args))]
fn load_config(args: &PlayArgs) -> Result<GameConfig> {
    let config = GameConfig::load(args.config.as_deref())?.with_overrides(
        args.player_x.as_deref(),
        args.player_o.as_deref(),
        args.plain,
    );
    Ok(config)
}
