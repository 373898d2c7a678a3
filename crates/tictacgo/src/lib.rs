//! TicTacGo - two-player tic-tac-toe in the terminal.
//!
//! The game logic lives in [`tictacgo_core`]; this crate adds everything
//! around it: configuration, the welcome banner, prompting, and the
//! session loop that drives a [`GameEngine`](tictacgo_core::GameEngine)
//! from a line-oriented input.
//!
//! # Example
//!
//! ```
//! use tictacgo::{GameConfig, LinePrompter, Players, Session};
//! use tictacgo_core::GameStatus;
//!
//! let input = b"5\n1\n3\n9\n7\n";
//! let prompter = LinePrompter::new(&input[..], Vec::new());
//! let config = GameConfig::default().with_styled(false);
//! let mut session = Session::new(Players::new("Ada", "Grace"), config, prompter);
//! assert_eq!(session.run()?, GameStatus::XWins);
//! # Ok::<(), tictacgo::PlayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod banner;
mod config;
mod players;
mod prompt;
mod session;

pub use banner::{FALLBACK_WIDTH, RULES, WELCOME, render_banner, style_label, terminal_width};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
pub use players::{DEFAULT_O_NAME, DEFAULT_X_NAME, Players};
pub use prompt::{LinePrompter, PlayError, Prompter};
pub use session::{Session, ask_names, outcome_message};
