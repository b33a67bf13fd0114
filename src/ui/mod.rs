//! Terminal UI: translates keyboard and mouse input into columns for the game
//! engine and draws the board after every event.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;

use crate::config::PlayersConfig;
use crate::game::Player;

/// Display names for the two players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    first: String,
    second: String,
}

impl PlayerNames {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        PlayerNames {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::A => &self.first,
            Player::B => &self.second,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        PlayersConfig::default().into()
    }
}

impl From<PlayersConfig> for PlayerNames {
    fn from(config: PlayersConfig) -> Self {
        PlayerNames::new(config.first.trim(), config.second.trim())
    }
}
