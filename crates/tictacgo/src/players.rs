//! Display names for the two players.

use derive_getters::Getters;
use tictacgo_core::Player;

/// Name used for X when none is given.
pub const DEFAULT_X_NAME: &str = "playerx";

/// Name used for O when none is given.
pub const DEFAULT_O_NAME: &str = "playero";

/// The two players' display names, fixed once the game starts.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Players {
    /// Name of player X.
    x: String,
    /// Name of player O.
    o: String,
}

impl Players {
    /// Creates the roster, falling back to default names for blank input.
    pub fn new(x: impl AsRef<str>, o: impl AsRef<str>) -> Self {
        let pick = |name: &str, default: &str| {
            let name = name.trim();
            if name.is_empty() {
                default.to_string()
            } else {
                name.to_string()
            }
        };
        Self {
            x: pick(x.as_ref(), DEFAULT_X_NAME),
            o: pick(o.as_ref(), DEFAULT_O_NAME),
        }
    }

    /// Returns the display name for a player.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::new(DEFAULT_X_NAME, DEFAULT_O_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_by_player() {
        let players = Players::new("Ada", "Grace");
        assert_eq!(players.name(Player::X), "Ada");
        assert_eq!(players.name(Player::O), "Grace");
    }

    #[test]
    fn test_blank_names_fall_back() {
        let players = Players::new("  ", "");
        assert_eq!(players.x(), DEFAULT_X_NAME);
        assert_eq!(players.o(), DEFAULT_O_NAME);
    }
}
