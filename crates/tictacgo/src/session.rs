//! The interactive game loop.
//!
//! A [`Session`] owns one [`GameEngine`] and drives it from a [`Prompter`]:
//! ask the player on turn for a cell, hand the answer to the engine, print
//! the board or the reason for rejection, and repeat until the game ends.

use crate::banner::style_label;
use crate::config::GameConfig;
use crate::players::Players;
use crate::prompt::{PlayError, Prompter};
use tictacgo_core::{GameEngine, GameStatus};
use tracing::{debug, info, instrument};

/// Line printed when the game ends, or `None` while it is still running.
pub fn outcome_message(status: GameStatus, players: &Players) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::XWins => Some(format!("{} has won!", players.x())),
        GameStatus::OWins => Some(format!("{} has won!", players.o())),
        GameStatus::Draw => Some("It's a draw :(".to_string()),
    }
}

/// Asks for any player names the config does not already provide.
#[instrument(skip(config, prompter))]
pub fn ask_names<P: Prompter>(config: &GameConfig, prompter: &mut P) -> Result<Players, PlayError> {
    let styled = *config.styled();
    let x = match config.player_x() {
        Some(name) => name.clone(),
        None => prompter.ask(&style_label("Enter PlayerX name:", styled))?,
    };
    let o = match config.player_o() {
        Some(name) => name.clone(),
        None => prompter.ask(&style_label("Enter PlayerO name:", styled))?,
    };
    let players = Players::new(x, o);
    info!(x = %players.x(), o = %players.o(), "Players set");
    Ok(players)
}

/// One game between two local players.
#[derive(Debug)]
pub struct Session<P> {
    engine: GameEngine,
    players: Players,
    config: GameConfig,
    prompter: P,
}

impl<P: Prompter> Session<P> {
    /// Creates a session with a fresh engine.
    pub fn new(players: Players, config: GameConfig, prompter: P) -> Self {
        Self {
            engine: GameEngine::new(),
            players,
            config,
            prompter,
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// Consumes the session, returning its prompter.
    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Renders the board with the configured marker symbols.
    pub fn render_board(&self) -> String {
        self.engine
            .board()
            .render(self.config.x_symbol(), self.config.o_symbol())
    }

    /// Plays until the game ends and announces the result.
    ///
    /// Rejected moves are explained and the same player is asked again.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] if input runs out or output cannot be written.
    #[instrument(skip(self), fields(x = %self.players.x(), o = %self.players.o()))]
    pub fn run(&mut self) -> Result<GameStatus, PlayError> {
        let board = self.render_board();
        self.prompter.say(&board)?;

        while !self.engine.status().is_over() {
            let player = self.engine.to_move();
            let label = format!("({}) Move [1-9]:", self.players.name(player));
            let input = self.prompter.ask(&label)?;

            match self.engine.play_input(&input) {
                Ok(status) => {
                    debug!(%player, %status, "Move accepted");
                    let board = self.render_board();
                    self.prompter.say(&board)?;
                }
                Err(e) => {
                    debug!(%player, error = %e, "Move rejected");
                    self.prompter.say(&e.to_string())?;
                }
            }
        }

        let status = self.engine.status();
        if let Some(message) = outcome_message(status, &self.players) {
            self.prompter.say(&message)?;
        }
        info!(%status, moves = self.engine.history().len(), "Session finished");
        Ok(status)
    }
}
