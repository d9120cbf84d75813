//! Display names for the two player symbols.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Maps each player symbol to a display name.
///
/// There are always exactly two entries. Names are free text: empty,
/// duplicated or whitespace-only names are accepted as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRegistry {
    /// Display name for X.
    x: String,
    /// Display name for O.
    o: String,
}

impl PlayerRegistry {
    /// Creates a registry with the given names.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Returns the display name for `player`.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x,
            Player::O => &self.o,
        }
    }

    /// Replaces the display name for `player`.
    #[instrument(skip(self, name))]
    pub fn rename(&mut self, player: Player, name: impl Into<String>) {
        let name = name.into();
        info!(%player, new_name = %name, "Renaming player");
        match player {
            Player::X => self.x = name,
            Player::O => self.o = name,
        }
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new("Player 1", "Player 2")
    }
}
